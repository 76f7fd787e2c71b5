use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use jobtrough_core::{
    AliasPolicy, AliasTable, AnnualPoint, CategoryField, JobtroughConfig, JobtroughError,
    LoadReport, Observation, RawAnnualRow, RawMonthlyRow, SupersectorTable, WindowCatalog,
    WindowKind, group_by_category, normalize_annual, normalize_monthly, normalize_name,
};

/// Window catalogs a snapshot aligns against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogs {
    pub(crate) contraction: WindowCatalog,
    pub(crate) recovery: WindowCatalog,
    pub(crate) shock: WindowCatalog,
    pub(crate) bands: WindowCatalog,
}

/// Immutable, fully normalized view of one load.
///
/// Every view method borrows the snapshot and recomputes from it, so a single
/// snapshot can be shared (e.g. behind an `Arc`) and queried from any thread.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub(crate) series: BTreeMap<String, Vec<Observation>>,
    /// Normalized category name to the category key in `series`.
    names: HashMap<String, String>,
    pub(crate) annual: Vec<AnnualPoint>,
    pub(crate) supersectors: SupersectorTable,
    pub(crate) aliases: AliasTable,
    pub(crate) catalogs: Catalogs,
    pub(crate) cfg: JobtroughConfig,
    report: LoadReport,
}

impl Snapshot {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "jobtrough::snapshot::assemble",
            skip_all,
            fields(monthly = monthly.len(), annual = annual.len()),
        )
    )]
    pub(crate) fn assemble(
        monthly: &[RawMonthlyRow],
        annual: &[RawAnnualRow],
        supersectors: SupersectorTable,
        aliases: &AliasTable,
        catalogs: Catalogs,
        cfg: JobtroughConfig,
    ) -> Result<Self, JobtroughError> {
        let rows = normalize_monthly(monthly, cfg.category_field, &cfg.row_filter);
        let (mut annual_points, annual_warnings) = normalize_annual(annual);
        annual_points.sort_by_key(|p| p.year);

        let mut report = LoadReport {
            monthly_rows: rows.observations.len(),
            filtered_rows: rows.filtered,
            annual_rows: annual_points.len(),
            categories: 0,
            warnings: rows.warnings,
        };
        report.warnings.extend(annual_warnings);

        let series = group_by_category(rows.observations);
        report.categories = series.len();
        let mut names: HashMap<String, String> = HashMap::with_capacity(series.len());
        for key in series.keys() {
            match names.entry(normalize_name(key)) {
                Entry::Vacant(slot) => {
                    slot.insert(key.clone());
                }
                Entry::Occupied(kept) => {
                    let err = JobtroughError::AmbiguousCategory {
                        name: kept.key().clone(),
                        kept: kept.get().clone(),
                        shadowed: key.clone(),
                    };
                    #[cfg(feature = "tracing")]
                    tracing::warn!(kept = %kept.get(), shadowed = %key, "category names collide");
                    match cfg.alias_policy {
                        AliasPolicy::Strict => return Err(err),
                        _ => report.warnings.push(err),
                    }
                }
            }
        }

        for (key, target) in aliases.iter() {
            if names.contains_key(&normalize_name(target)) {
                continue;
            }
            let err = JobtroughError::UnmatchedAlias {
                key: key.to_string(),
                target: target.to_string(),
            };
            #[cfg(feature = "tracing")]
            tracing::warn!(alias = key, canonical = target, "alias matches no loaded category");
            match cfg.alias_policy {
                AliasPolicy::Strict => return Err(err),
                _ => report.warnings.push(err),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            categories = report.categories,
            monthly_rows = report.monthly_rows,
            warnings = report.warnings.len(),
            "snapshot assembled"
        );

        Ok(Self {
            series,
            names,
            annual: annual_points,
            supersectors,
            aliases: aliases.clone(),
            catalogs,
            cfg,
            report,
        })
    }

    /// Summary of the load that produced this snapshot.
    #[must_use]
    pub const fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Configuration the snapshot was built with.
    #[must_use]
    pub const fn config(&self) -> &JobtroughConfig {
        &self.cfg
    }

    /// Category keys in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Annual summary points sorted by year, as loaded.
    #[must_use]
    pub fn annual(&self) -> &[AnnualPoint] {
        &self.annual
    }

    /// Supersector lookup table delivered by the source.
    #[must_use]
    pub const fn supersectors(&self) -> &SupersectorTable {
        &self.supersectors
    }

    /// Alias table validated at load.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The catalog of the given kind.
    #[must_use]
    pub const fn catalog(&self, kind: WindowKind) -> &WindowCatalog {
        match kind {
            WindowKind::Recovery => &self.catalogs.recovery,
            WindowKind::Shock => &self.catalogs.shock,
            _ => &self.catalogs.contraction,
        }
    }

    /// Shaded recession bands used by the overview.
    #[must_use]
    pub const fn overview_bands(&self) -> &WindowCatalog {
        &self.catalogs.bands
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        if let Some((k, _)) = self.series.get_key_value(name) {
            return Some(k.as_str());
        }
        self.names.get(&normalize_name(name)).map(String::as_str)
    }

    /// Resolve a user-facing key to the category key it denotes.
    ///
    /// Tries, in order: the alias table, the key verbatim, the key after name
    /// normalization, and finally the supersector table (code or display name)
    /// mapped onto the configured category column. Partial name overlaps never
    /// match: `"Trade"` does not resolve to `"Wholesale trade"`.
    ///
    /// # Errors
    /// Returns `MissingCategory` when nothing matches.
    pub fn resolve_category(&self, key: &str) -> Result<&str, JobtroughError> {
        let target = self.aliases.resolve(key);
        if let Some(found) = self.lookup(target) {
            return Ok(found);
        }
        self.via_supersector(target.trim())
            .ok_or_else(|| JobtroughError::missing_category(key))
    }

    fn via_supersector(&self, key: &str) -> Option<&str> {
        let wanted = normalize_name(key);
        let (code, entry) = self
            .supersectors
            .get(key)
            .map(|s| (key, s))
            .or_else(|| {
                self.supersectors
                    .sorted_by_name()
                    .into_iter()
                    .find(|(_, s)| normalize_name(&s.name) == wanted)
            })?;
        let candidate = match self.cfg.category_field {
            CategoryField::SeriesId => entry.series_id.as_str(),
            CategoryField::SupersectorCode => code,
            _ => entry.name.as_str(),
        };
        self.lookup(candidate)
    }

    /// Observations of a category in chronological order.
    ///
    /// # Errors
    /// Returns `MissingCategory` when the key does not resolve.
    pub fn series(&self, key: &str) -> Result<&[Observation], JobtroughError> {
        let found = self.resolve_category(key)?;
        self.series
            .get(found)
            .map(Vec::as_slice)
            .ok_or_else(|| JobtroughError::missing_category(key))
    }
}
