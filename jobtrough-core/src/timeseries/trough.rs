use jobtrough_types::Valued;

/// The minimum of a series and where it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trough<'a, P> {
    /// Position of the trough in the input slice.
    pub position: usize,
    /// The trough point itself.
    pub point: &'a P,
    /// The trough value.
    pub value: f64,
}

impl<P> Trough<'_, P> {
    /// How far the trough sits below `baseline` (positive for a loss).
    ///
    /// For an index-100 series, `depth_below(100.0)` is the percentage job loss
    /// at the worst point.
    #[must_use]
    pub fn depth_below(&self, baseline: f64) -> f64 {
        baseline - self.value
    }
}

/// Linear scan for the minimum defined value.
///
/// Missing and NaN values are skipped. On ties the earliest point wins.
/// Returns `None` if no point has a defined value.
#[must_use]
pub fn find_trough<P: Valued>(series: &[P]) -> Option<Trough<'_, P>> {
    let mut best: Option<Trough<'_, P>> = None;
    for (position, point) in series.iter().enumerate() {
        let Some(value) = point.value().filter(|v| !v.is_nan()) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| value < b.value) {
            best = Some(Trough {
                position,
                point,
                value,
            });
        }
    }
    best
}
