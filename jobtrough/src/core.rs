use std::sync::Arc;

use jobtrough_core::{
    AliasPolicy, AliasTable, CategoryField, JobtroughConfig, JobtroughError, ObservationSource,
    RawAnnualRow, RawMonthlyRow, RowFilter, Smoothing, SupersectorTable, WindowCatalog, WindowKind,
};

use crate::snapshot::{Catalogs, Snapshot};

/// Orchestrator that loads a snapshot from an observation source.
pub struct Jobtrough {
    pub(crate) source: Arc<dyn ObservationSource>,
    pub(crate) cfg: JobtroughConfig,
    pub(crate) aliases: AliasTable,
    pub(crate) catalogs: Catalogs,
}

/// Builder for constructing a `Jobtrough` orchestrator with custom configuration.
pub struct JobtroughBuilder {
    source: Option<Arc<dyn ObservationSource>>,
    cfg: JobtroughConfig,
    aliases: AliasTable,
    contraction: WindowCatalog,
    recovery: WindowCatalog,
    shock: Option<WindowCatalog>,
    bands: WindowCatalog,
}

impl Default for JobtroughBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JobtroughBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no source; you must register one via [`with_source`](Self::with_source).
    /// - Uses the built-in 2001/2008/2020 window catalogs and the story alias table.
    /// - Categories are keyed by industry name, keeping seasonally adjusted
    ///   all-employee rows only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: JobtroughConfig::default(),
            aliases: AliasTable::story_defaults(),
            contraction: WindowCatalog::contraction(),
            recovery: WindowCatalog::recovery(),
            shock: None,
            bands: WindowCatalog::overview_bands(),
        }
    }

    /// Register the observation source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ObservationSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: JobtroughConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the raw column used as category key.
    ///
    /// Behavior and trade-offs:
    /// - `SeriesId` and `SupersectorCode` keys are stable but not human-readable;
    ///   supersector codes and names still resolve through the supersector table.
    /// - The default story aliases target industry names and will be reported as
    ///   unmatched under any other key; pair with [`alias_table`](Self::alias_table).
    #[must_use]
    pub const fn category_field(mut self, field: CategoryField) -> Self {
        self.cfg.category_field = field;
        self
    }

    /// Set the row filters applied while normalizing monthly rows.
    #[must_use]
    pub fn row_filter(mut self, filter: RowFilter) -> Self {
        self.cfg.row_filter = filter;
        self
    }

    /// Smoothing applied to shock paths before rebasing.
    #[must_use]
    pub const fn shock_smoothing(mut self, mode: Smoothing) -> Self {
        self.cfg.shock_smoothing = mode;
        self
    }

    /// Months covered by shock paths and landing metrics.
    ///
    /// Also sizes the built-in shock catalog unless one is supplied via
    /// [`shock_windows`](Self::shock_windows).
    #[must_use]
    pub const fn shock_horizon_months(mut self, months: u32) -> Self {
        self.cfg.shock_horizon_months = months;
        self
    }

    /// Replace the alias table.
    #[must_use]
    pub fn alias_table(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// How name-resolution problems are treated at load time.
    ///
    /// Behavior and trade-offs:
    /// - `Report` keeps loading and records one `UnmatchedAlias` warning per
    ///   alias and one `AmbiguousCategory` warning per colliding category name.
    /// - `Strict` fails the load on the first such problem; use it when the
    ///   alias table and the dataset ship together.
    #[must_use]
    pub const fn alias_policy(mut self, policy: AliasPolicy) -> Self {
        self.cfg.alias_policy = policy;
        self
    }

    /// Upper bound on the one-shot load.
    #[must_use]
    pub const fn load_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.load_timeout = timeout;
        self
    }

    /// Replace the contraction catalog.
    #[must_use]
    pub fn contraction_windows(mut self, catalog: WindowCatalog) -> Self {
        self.contraction = catalog;
        self
    }

    /// Replace the recovery catalog.
    #[must_use]
    pub fn recovery_windows(mut self, catalog: WindowCatalog) -> Self {
        self.recovery = catalog;
        self
    }

    /// Replace the shock catalog.
    #[must_use]
    pub fn shock_windows(mut self, catalog: WindowCatalog) -> Self {
        self.shock = Some(catalog);
        self
    }

    /// Replace the shaded recession bands of the overview.
    #[must_use]
    pub fn overview_bands(mut self, catalog: WindowCatalog) -> Self {
        self.bands = catalog;
        self
    }

    /// Build the `Jobtrough` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered, if a catalog holds
    /// windows of another kind or an invalid window, or if the load timeout is zero.
    pub fn build(self) -> Result<Jobtrough, JobtroughError> {
        let source = self.source.ok_or_else(|| {
            JobtroughError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            )
        })?;
        if self.cfg.load_timeout.is_zero() {
            return Err(JobtroughError::InvalidArg(
                "load_timeout must be greater than zero".to_string(),
            ));
        }

        let shock = self
            .shock
            .unwrap_or_else(|| WindowCatalog::shock(self.cfg.shock_horizon_months));
        for (expected, catalog) in [
            (WindowKind::Contraction, &self.contraction),
            (WindowKind::Recovery, &self.recovery),
            (WindowKind::Shock, &shock),
            (WindowKind::Contraction, &self.bands),
        ] {
            catalog.validate()?;
            if catalog.kind() != expected {
                return Err(JobtroughError::InvalidArg(format!(
                    "expected a {expected} catalog, got {}",
                    catalog.kind()
                )));
            }
        }

        Ok(Jobtrough {
            source,
            cfg: self.cfg,
            aliases: self.aliases,
            catalogs: Catalogs {
                contraction: self.contraction,
                recovery: self.recovery,
                shock,
                bands: self.bands,
            },
        })
    }
}

/// Attribute a source failure to the load, keeping load-level errors as they are.
pub(crate) fn tag_err(origin: &str, e: JobtroughError) -> JobtroughError {
    match e {
        e @ (JobtroughError::DataUnavailable { .. } | JobtroughError::LoadTimeout { .. }) => e,
        other => JobtroughError::data_unavailable(origin, other.to_string()),
    }
}

type RawTables = (Vec<RawMonthlyRow>, Vec<RawAnnualRow>, SupersectorTable);

impl Jobtrough {
    /// Start building a new `Jobtrough` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use jobtrough::{Jobtrough, Smoothing};
    ///
    /// let jt = Jobtrough::builder()
    ///     .with_source(Arc::new(jobtrough_mock::MockSource::new()))
    ///     .shock_smoothing(Smoothing::None)
    ///     .build()?;
    /// let snapshot = jt.load().await?;
    /// ```
    #[must_use]
    pub fn builder() -> JobtroughBuilder {
        JobtroughBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &JobtroughConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch all raw tables concurrently and assemble an immutable snapshot.
    ///
    /// Behavior and trade-offs:
    /// - The three source calls run concurrently; the first failure cancels the others.
    /// - The whole fetch is bounded by `load_timeout`.
    /// - Malformed rows and unmatched aliases are reported in the snapshot's
    ///   [`LoadReport`](crate::LoadReport) rather than failing the load.
    ///
    /// # Errors
    /// Returns `LoadTimeout` if the fetch exceeds `load_timeout`, `DataUnavailable`
    /// if the source fails, and `UnmatchedAlias` or `AmbiguousCategory` under
    /// [`AliasPolicy::Strict`].
    /// No partial snapshot is ever returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "jobtrough::core::load",
            skip(self),
            fields(
                source = self.source.name(),
                timeout_ms = u64::try_from(self.cfg.load_timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub async fn load(&self) -> Result<Snapshot, JobtroughError> {
        let origin = self.source.name();
        let (monthly, annual, supersectors) = self.fetch_with_timeout().await.map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "load failed");
            tag_err(origin, e)
        })?;
        Snapshot::assemble(
            &monthly,
            &annual,
            supersectors,
            &self.aliases,
            self.catalogs.clone(),
            self.cfg.clone(),
        )
    }

    async fn fetch_with_timeout(&self) -> Result<RawTables, JobtroughError> {
        let fetch = async {
            tokio::try_join!(
                self.source.monthly_rows(),
                self.source.annual_rows(),
                self.source.supersectors(),
            )
        };
        (tokio::time::timeout(self.cfg.load_timeout, fetch).await).unwrap_or_else(|_| {
            Err(JobtroughError::LoadTimeout {
                origin: self.source.name().to_string(),
            })
        })
    }
}
