//! CES supersector code lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display name and CES "all employees" series id of one supersector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supersector {
    /// Display name, e.g. `"Manufacturing"`.
    pub name: String,
    /// CES series id, e.g. `"CES3000000001"`.
    pub series_id: String,
}

/// Supersector code (`"00"`, `"30"`, ...) to [`Supersector`] table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupersectorTable(BTreeMap<String, Supersector>);

impl SupersectorTable {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>, series_id: impl Into<String>) {
        self.0.insert(
            code.into(),
            Supersector {
                name: name.into(),
                series_id: series_id.into(),
            },
        );
    }

    /// Entry for a code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Supersector> {
        self.0.get(code.trim())
    }

    /// Display name for a code.
    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.get(code).map(|s| s.name.as_str())
    }

    /// Series id for a code.
    #[must_use]
    pub fn series_id(&self, code: &str) -> Option<&str> {
        self.get(code).map(|s| s.series_id.as_str())
    }

    /// Reverse lookup from a series id to its code.
    #[must_use]
    pub fn code_for_series(&self, series_id: &str) -> Option<&str> {
        let series_id = series_id.trim();
        self.0
            .iter()
            .find(|(_, s)| s.series_id == series_id)
            .map(|(code, _)| code.as_str())
    }

    /// `(code, entry)` pairs sorted by display name, as a selector would list them.
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<(&str, &Supersector)> {
        let mut out: Vec<(&str, &Supersector)> =
            self.0.iter().map(|(c, s)| (c.as_str(), s)).collect();
        out.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        out
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The 22 CES supersectors and aggregates with their all-employee series ids.
    #[must_use]
    pub fn ces_defaults() -> Self {
        const ROWS: &[(&str, &str, &str)] = &[
            ("00", "Total Nonfarm", "CES0000000001"),
            ("05", "Total Private", "CES0500000001"),
            ("06", "Goods-producing", "CES0600000001"),
            ("07", "Service-providing", "CES0700000001"),
            ("08", "Private service-providing", "CES0800000001"),
            ("10", "Mining and Logging", "CES1000000001"),
            ("20", "Construction", "CES2000000001"),
            ("30", "Manufacturing", "CES3000000001"),
            ("31", "Durable Goods", "CES3100000001"),
            ("32", "Nondurable Goods", "CES3200000001"),
            ("40", "Trade, Transportation, Utilities", "CES4000000001"),
            ("41", "Wholesale trade", "CES4142000001"),
            ("42", "Retail trade", "CES4200000001"),
            ("43", "Transportation and warehousing", "CES4300000001"),
            ("44", "Utilities", "CES4422000001"),
            ("50", "Information", "CES5000000001"),
            ("55", "Financial Activities", "CES5500000001"),
            ("60", "Professional and Business Services", "CES6000000001"),
            ("65", "Education and Health Services", "CES6500000001"),
            ("70", "Leisure and Hospitality", "CES7000000001"),
            ("80", "Other Services", "CES8000000001"),
            ("90", "Government", "CES9000000001"),
        ];
        let mut t = Self::new();
        for (code, name, series_id) in ROWS {
            t.insert(*code, *name, *series_id);
        }
        t
    }
}
