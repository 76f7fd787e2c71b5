//! Explicit category alias table.
//!
//! Maps user-facing category keys (button labels, short names) to the canonical
//! category names found in the dataset. Comparison is exact after
//! [`normalize_name`]; there is no substring fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalize a category name for comparison.
///
/// Lowercases, spells `&` as `and`, collapses every run of non-alphanumeric
/// characters to a single space, and trims.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace('&', " and ");
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }
    out
}

/// Normalized alias key to canonical dataset name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable(BTreeMap<String, String>);

impl AliasTable {
    /// Empty table: every key resolves to itself.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build from `(key, canonical)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut t = Self::new();
        for (k, v) in pairs {
            t.insert(k.as_ref(), v);
        }
        t
    }

    /// Insert or replace an alias.
    pub fn insert(&mut self, key: &str, canonical: impl Into<String>) {
        self.0.insert(normalize_name(key), canonical.into());
    }

    /// Canonical name for `key`, or `key` itself when no alias is configured.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.0
            .get(&normalize_name(key))
            .map_or(key, String::as_str)
    }

    /// Iterate `(normalized key, canonical)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no aliases are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Industry selector labels mapped to the industry names of the monthly dataset.
    #[must_use]
    pub fn story_defaults() -> Self {
        Self::from_pairs([
            ("Durable Goods", "Durable goods manufacturing"),
            ("Nondurable Goods", "Nondurable goods manufacturing"),
            ("Construction", "Construction"),
            ("Mining and Logging", "Mining and logging"),
            ("Professional Services", "Professional and business services"),
            (
                "Private Education and Health Services",
                "Education and health services",
            ),
            ("Leisure and Hospitality", "Leisure and hospitality"),
            ("Information", "Information"),
            ("Other Services", "Other services"),
            ("Retail Trade", "Retail trade"),
            ("Wholesale Trade", "Wholesale trade"),
            ("Transportation and Warehousing", "Transportation and warehousing"),
            ("Financial Activities", "Financial activities"),
            ("Utilities", "Utilities"),
            ("Government", "Government"),
            ("Total Economy", "Total nonfarm"),
        ])
    }
}
