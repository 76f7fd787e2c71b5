pub mod align;
pub mod overview;
pub mod profiles;
pub mod recovery;
pub mod shock;
