use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::window::WindowKind;

/// Unified error type for the jobtrough workspace.
///
/// Four variants describe local, recoverable degradations of a single series
/// (`MissingCategory`, `EmptyWindow`, `InvalidBaseline`, `MalformedRow`). They are
/// collected as report warnings and never abort unrelated series. The remaining
/// variants describe configuration mistakes and load failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JobtroughError {
    /// No rows match the requested category after alias resolution and name normalization.
    #[error("missing category: {category}")]
    MissingCategory {
        /// Category key as requested by the caller.
        category: String,
    },

    /// A window has zero overlapping observations for the category.
    #[error("no data for {category} in window {window}")]
    EmptyWindow {
        /// Category key the window was applied to.
        category: String,
        /// Window id (e.g. "2008").
        window: String,
    },

    /// Rebasing to an index of 100 was attempted against an unusable first value.
    #[error("invalid baseline: {detail}")]
    InvalidBaseline {
        /// What was wrong with the baseline (missing, zero, non-finite).
        detail: String,
    },

    /// A raw row failed numeric parsing of `year` or `month`/`period`.
    #[error("malformed row {line}: {reason}")]
    MalformedRow {
        /// 1-based position of the row in its input table.
        line: usize,
        /// Human-readable parse failure.
        reason: String,
    },

    /// A window id is not present in the catalog of the requested kind.
    #[error("unknown {kind} window: {id}")]
    UnknownWindow {
        /// Catalog that was searched.
        kind: WindowKind,
        /// Window id that was requested.
        id: String,
    },

    /// A configured alias points at a canonical name absent from the dataset.
    #[error("alias {key} -> {target} matches no loaded category")]
    UnmatchedAlias {
        /// Alias key (e.g. the button label "Durable Goods").
        key: String,
        /// Canonical dataset name the alias resolves to.
        target: String,
    },

    /// Two category keys of the dataset normalize to the same name; lookups by
    /// name resolve to `kept` only.
    #[error("categories {kept} and {shadowed} share the normalized name {name}")]
    AmbiguousCategory {
        /// Shared normalized name.
        name: String,
        /// Category key that name lookups resolve to.
        kept: String,
        /// Category key reachable only by its exact key.
        shadowed: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An observation source returned an error.
    #[error("{origin} failed: {msg}")]
    Source {
        /// Source name that failed.
        origin: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The one-shot load did not yield a complete snapshot.
    #[error("data unavailable from {origin}: {msg}")]
    DataUnavailable {
        /// Source name the load was attempted against.
        origin: String,
        /// Underlying failure.
        msg: String,
    },

    /// The one-shot load exceeded the configured timeout.
    #[error("load timed out: {origin}")]
    LoadTimeout {
        /// Source name that timed out.
        origin: String,
    },
}

impl JobtroughError {
    /// Helper: build a `MissingCategory` error.
    pub fn missing_category(category: impl Into<String>) -> Self {
        Self::MissingCategory {
            category: category.into(),
        }
    }

    /// Helper: build an `EmptyWindow` error.
    pub fn empty_window(category: impl Into<String>, window: impl Into<String>) -> Self {
        Self::EmptyWindow {
            category: category.into(),
            window: window.into(),
        }
    }

    /// Helper: build an `InvalidBaseline` error.
    pub fn invalid_baseline(detail: impl Into<String>) -> Self {
        Self::InvalidBaseline {
            detail: detail.into(),
        }
    }

    /// Helper: build a `MalformedRow` error.
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Helper: build an `UnknownWindow` error.
    pub fn unknown_window(kind: WindowKind, id: impl Into<String>) -> Self {
        Self::UnknownWindow { kind, id: id.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn from_source(origin: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            origin: origin.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `DataUnavailable` error.
    pub fn data_unavailable(origin: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::DataUnavailable {
            origin: origin.into(),
            msg: msg.into(),
        }
    }

    /// Returns true for errors that only degrade the series being computed.
    ///
    /// Recoverable errors are rendered as a "no data" state for that series;
    /// everything else indicates a configuration or load failure.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingCategory { .. }
                | Self::EmptyWindow { .. }
                | Self::InvalidBaseline { .. }
                | Self::MalformedRow { .. }
        )
    }
}
