//! Explicit story selection state and its transitions.

use serde::{Deserialize, Serialize};

/// The industry a reader picked: the lookup key and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryChoice {
    /// Key passed to the snapshot views (an alias or a category name).
    pub key: String,
    /// Display label, e.g. `"Education & Health"`.
    pub label: String,
}

/// User input that changes the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Select a recession id, or clear it if it is already selected.
    ToggleRecession(String),
    /// Select an industry. A blank label falls back to the key.
    SelectIndustry {
        /// Lookup key.
        key: String,
        /// Display label.
        label: String,
    },
    /// Return to the initial state.
    Restart,
}

/// Current story selection. `Default` is the initial state with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Selected recession id, e.g. `"2008"`.
    pub recession: Option<String>,
    /// Selected industry.
    pub industry: Option<IndustryChoice>,
}

impl Selection {
    /// Pure transition: the selection after `event`.
    ///
    /// A blank industry key clears the industry.
    #[must_use]
    pub fn apply(&self, event: &SelectionEvent) -> Self {
        match event {
            SelectionEvent::ToggleRecession(id) => Self {
                recession: if self.recession.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id.clone())
                },
                industry: self.industry.clone(),
            },
            SelectionEvent::SelectIndustry { key, label } => {
                let key = key.trim();
                let industry = (!key.is_empty()).then(|| {
                    let label = label.trim();
                    IndustryChoice {
                        key: key.to_string(),
                        label: if label.is_empty() { key } else { label }.to_string(),
                    }
                });
                Self {
                    recession: self.recession.clone(),
                    industry,
                }
            }
            SelectionEvent::Restart => Self::default(),
        }
    }

    /// Fold a sequence of events from this state.
    #[must_use]
    pub fn replay<'a, I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = &'a SelectionEvent>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, e| state.apply(e))
    }
}
