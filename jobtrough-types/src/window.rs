//! Named recession windows and the catalogs that group them.

use core::fmt;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::JobtroughError;
use crate::stamp::MonthStamp;

/// Which phase of a recession a window describes.
///
/// Contraction, recovery and shock windows share ids (e.g. `"2008"`) but cover
/// different date ranges and are kept in separate catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum WindowKind {
    /// Official peak-to-trough contraction; short, used for shock profiles.
    Contraction,
    /// Trough onward; long, used for the recovery story.
    Recovery,
    /// Month before the downturn through a fixed horizon; used for indexed shock paths.
    Shock,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Contraction => "contraction",
            Self::Recovery => "recovery",
            Self::Shock => "shock",
        })
    }
}

/// A named, inclusive month interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecessionWindow {
    /// Catalog key, e.g. `"2008"`.
    pub id: String,
    /// Display label, e.g. `"Great Recession"`.
    pub label: String,
    /// Phase this window describes.
    pub kind: WindowKind,
    /// First month, inclusive.
    pub start: MonthStamp,
    /// Last month, inclusive.
    pub end: MonthStamp,
}

impl RecessionWindow {
    /// Build a validated window.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `start > end` or `id` is blank.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: WindowKind,
        start: MonthStamp,
        end: MonthStamp,
    ) -> Result<Self, JobtroughError> {
        let w = Self {
            id: id.into(),
            label: label.into(),
            kind,
            start,
            end,
        };
        w.validate()?;
        Ok(w)
    }

    /// Check the window invariants (non-blank id, `start <= end`).
    ///
    /// # Errors
    /// Returns `InvalidArg` describing the first violated invariant.
    pub fn validate(&self) -> Result<(), JobtroughError> {
        if self.id.trim().is_empty() {
            return Err(JobtroughError::InvalidArg("window id must not be blank".into()));
        }
        if self.start > self.end {
            return Err(JobtroughError::InvalidArg(format!(
                "window {} starts after it ends ({} > {})",
                self.id, self.start, self.end
            )));
        }
        Ok(())
    }

    /// True if `stamp` falls within `[start, end]`.
    #[must_use]
    pub fn contains(&self, stamp: MonthStamp) -> bool {
        self.start <= stamp && stamp <= self.end
    }

    /// Number of calendar months covered, counting both ends.
    #[must_use]
    pub const fn len_months(&self) -> i64 {
        self.end.months_since(self.start) + 1
    }
}

/// An ordered set of windows of a single kind with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCatalog {
    kind: WindowKind,
    windows: Vec<RecessionWindow>,
}

impl WindowCatalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a window is invalid, has a different kind than the
    /// catalog, or repeats an id.
    pub fn new(kind: WindowKind, windows: Vec<RecessionWindow>) -> Result<Self, JobtroughError> {
        let cat = Self { kind, windows };
        cat.validate()?;
        Ok(cat)
    }

    /// Re-check catalog invariants, e.g. after deserialization.
    ///
    /// # Errors
    /// See [`WindowCatalog::new`].
    pub fn validate(&self) -> Result<(), JobtroughError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for w in &self.windows {
            w.validate()?;
            if w.kind != self.kind {
                return Err(JobtroughError::InvalidArg(format!(
                    "window {} is a {} window inside a {} catalog",
                    w.id, w.kind, self.kind
                )));
            }
            if !seen.insert(w.id.as_str()) {
                return Err(JobtroughError::InvalidArg(format!(
                    "duplicate {} window id: {}",
                    self.kind, w.id
                )));
            }
        }
        Ok(())
    }

    /// Catalog kind.
    #[must_use]
    pub const fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Look up a window by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RecessionWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Look up a window by id, failing with `UnknownWindow`.
    ///
    /// # Errors
    /// Returns `UnknownWindow` if no window has this id.
    pub fn require(&self, id: &str) -> Result<&RecessionWindow, JobtroughError> {
        self.get(id)
            .ok_or_else(|| JobtroughError::unknown_window(self.kind, id))
    }

    /// Iterate windows in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RecessionWindow> {
        self.windows.iter()
    }

    /// Number of windows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.windows.len()
    }

    /// True if the catalog holds no windows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Peak-to-trough contractions of the 2001, 2008 and 2020 recessions.
    #[must_use]
    pub fn contraction() -> Self {
        let w = |id: &str, label: &str, start: MonthStamp, end: MonthStamp| RecessionWindow {
            id: id.into(),
            label: label.into(),
            kind: WindowKind::Contraction,
            start,
            end,
        };
        Self {
            kind: WindowKind::Contraction,
            windows: vec![
                w(
                    "2001",
                    "Dot-com Recession",
                    MonthStamp::ym(2001, 3),
                    MonthStamp::ym(2001, 11),
                ),
                w(
                    "2008",
                    "Great Recession",
                    MonthStamp::ym(2007, 12),
                    MonthStamp::ym(2009, 6),
                ),
                w(
                    "2020",
                    "COVID-19 Recession",
                    MonthStamp::ym(2020, 2),
                    MonthStamp::ym(2020, 4),
                ),
            ],
        }
    }

    /// Recovery periods following each contraction's trough.
    #[must_use]
    pub fn recovery() -> Self {
        let w = |id: &str, label: &str, start: MonthStamp, end: MonthStamp| RecessionWindow {
            id: id.into(),
            label: label.into(),
            kind: WindowKind::Recovery,
            start,
            end,
        };
        Self {
            kind: WindowKind::Recovery,
            windows: vec![
                w(
                    "2001",
                    "Dot-com Recession Recovery",
                    MonthStamp::ym(2001, 12),
                    MonthStamp::ym(2005, 1),
                ),
                w(
                    "2008",
                    "Great Recession Recovery",
                    MonthStamp::ym(2009, 6),
                    MonthStamp::ym(2013, 3),
                ),
                w(
                    "2020",
                    "COVID-19 Recession Recovery",
                    MonthStamp::ym(2020, 5),
                    MonthStamp::ym(2022, 4),
                ),
            ],
        }
    }

    /// Shaded bands of the long-run overview: each recession's start month
    /// followed by 24 months.
    #[must_use]
    pub fn overview_bands() -> Self {
        let starts = [
            ("2001", "Dot-com Recession", MonthStamp::ym(2001, 3)),
            ("2008", "Great Recession", MonthStamp::ym(2008, 1)),
            ("2020", "COVID-19 Recession", MonthStamp::ym(2020, 3)),
        ];
        let windows = starts
            .into_iter()
            .filter_map(|(id, label, start)| {
                Some(RecessionWindow {
                    id: id.into(),
                    label: label.into(),
                    kind: WindowKind::Contraction,
                    start,
                    end: start.add_months(24)?,
                })
            })
            .collect();
        Self {
            kind: WindowKind::Contraction,
            windows,
        }
    }

    /// Shock windows: one month before each downturn's baseline month, spanning
    /// `horizon_months` further months (`horizon_months + 1` points).
    #[must_use]
    pub fn shock(horizon_months: u32) -> Self {
        let baselines = [
            ("2001", "2001 Dot-com Recession", MonthStamp::ym(2001, 1)),
            ("2008", "2008 Great Recession", MonthStamp::ym(2007, 11)),
            ("2020", "2020 COVID-19 Recession", MonthStamp::ym(2020, 1)),
        ];
        let windows = baselines
            .into_iter()
            .filter_map(|(id, label, baseline)| {
                let start = baseline.add_months(-1)?;
                let end = start.add_months(i64::from(horizon_months))?;
                Some(RecessionWindow {
                    id: id.into(),
                    label: label.into(),
                    kind: WindowKind::Shock,
                    start,
                    end,
                })
            })
            .collect();
        Self {
            kind: WindowKind::Shock,
            windows,
        }
    }
}

impl<'a> IntoIterator for &'a WindowCatalog {
    type Item = &'a RecessionWindow;
    type IntoIter = core::slice::Iter<'a, RecessionWindow>;

    fn into_iter(self) -> Self::IntoIter {
        self.windows.iter()
    }
}
