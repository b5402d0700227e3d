//! The ordered response catalog and its one-time validation.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::guidance::{PayloadError, ResponseEnvelope};

use super::entry::{CatalogEntry, Generator};
use super::patterns;

/// Name reported for the fallback generator in validation errors.
pub const FALLBACK_ENTRY: &str = "fallback";

/// A catalog that cannot be served. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog entry '{entry}' has no trigger keywords")]
    NoKeywords { entry: String },

    #[error("Catalog entry '{entry}' has a blank trigger keyword")]
    BlankKeyword { entry: String },

    #[error("Catalog entry '{entry}' is registered more than once")]
    DuplicateEntry { entry: String },

    #[error("Catalog entry '{entry}' failed to generate: {source}")]
    GeneratorFailed {
        entry: String,
        #[source]
        source: PayloadError,
    },

    #[error("Catalog entry '{entry}' produced no actions")]
    EmptyEnvelope { entry: String },

    #[error("Catalog entry '{entry}' produced a blank intent")]
    BlankIntent { entry: String },

    #[error("Catalog entry '{entry}' lists active components that differ from its actions")]
    ActiveComponentsMismatch { entry: String },
}

impl CatalogError {
    /// Name of the offending entry.
    pub fn entry(&self) -> &str {
        match self {
            CatalogError::NoKeywords { entry }
            | CatalogError::BlankKeyword { entry }
            | CatalogError::DuplicateEntry { entry }
            | CatalogError::GeneratorFailed { entry, .. }
            | CatalogError::EmptyEnvelope { entry }
            | CatalogError::BlankIntent { entry }
            | CatalogError::ActiveComponentsMismatch { entry } => entry,
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::GeneratorFailed { .. } => ErrorCode::PayloadEncoding,
            _ => ErrorCode::InvalidCatalog,
        };
        DomainError::new(code, err.to_string()).with_detail("entry", err.entry())
    }
}

/// Outcome of resolving one input against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub envelope: ResponseEnvelope,
    /// Name of the entry that matched, `None` for the fallback.
    pub matched_entry: Option<String>,
}

impl Classification {
    pub fn is_fallback(&self) -> bool {
        self.matched_entry.is_none()
    }
}

/// Ordered, immutable set of response patterns plus a fallback.
///
/// Built once through [`CatalogBuilder`], which validates every entry.
#[derive(Clone)]
pub struct ResponseCatalog {
    entries: Vec<CatalogEntry>,
    fallback: Generator,
}

static STANDARD: Lazy<Result<Arc<ResponseCatalog>, CatalogError>> = Lazy::new(|| {
    patterns::standard_entries()
        .into_iter()
        .fold(CatalogBuilder::new(), CatalogBuilder::entry)
        .build()
        .map(Arc::new)
});

impl ResponseCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The process-wide standard catalog, validated on first use.
    pub fn standard() -> Result<Arc<ResponseCatalog>, CatalogError> {
        Lazy::force(&STANDARD).clone()
    }

    /// First-match-wins resolution.
    ///
    /// The text is case-folded once for matching; the winning generator
    /// receives the original text. Empty text resolves to the fallback.
    pub fn classify(&self, text: &str) -> Result<Classification, PayloadError> {
        let normalized = text.to_lowercase();

        match self.entries.iter().find(|entry| entry.matches(&normalized)) {
            Some(entry) => {
                debug!(entry = entry.name(), "Catalog entry matched");
                Ok(Classification {
                    envelope: entry.generate(text)?,
                    matched_entry: Some(entry.name().to_string()),
                })
            }
            None => {
                debug!("No catalog entry matched, using fallback");
                Ok(Classification {
                    envelope: (self.fallback)(text)?,
                    matched_entry: None,
                })
            }
        }
    }

    /// Entry names in registration order.
    pub fn entry_names(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ResponseCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCatalog")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Append-only builder for a [`ResponseCatalog`].
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
    fallback: Option<Generator>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after all previously registered ones.
    pub fn entry(mut self, entry: CatalogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Replaces the generic guidance fallback.
    pub fn fallback<F>(mut self, generator: F) -> Self
    where
        F: Fn(&str) -> Result<ResponseEnvelope, PayloadError> + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(generator));
        self
    }

    /// Validates every entry and the fallback, then freezes the catalog.
    ///
    /// Each generator is run once: entries with their first keyword as
    /// sample text, the fallback with empty text.
    pub fn build(self) -> Result<ResponseCatalog, CatalogError> {
        let fallback: Generator = match self.fallback {
            Some(generator) => generator,
            None => Arc::new(patterns::generic_guidance),
        };

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let name = entry.name().to_string();
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateEntry { entry: name });
            }
            let sample = match entry.keywords().first() {
                Some(keyword) => keyword.clone(),
                None => return Err(CatalogError::NoKeywords { entry: name }),
            };
            if entry.keywords().iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::BlankKeyword { entry: name });
            }
            let envelope = entry
                .generate(&sample)
                .map_err(|source| CatalogError::GeneratorFailed {
                    entry: name.clone(),
                    source,
                })?;
            validate_envelope(&name, &envelope)?;
        }

        let envelope = fallback("").map_err(|source| CatalogError::GeneratorFailed {
            entry: FALLBACK_ENTRY.to_string(),
            source,
        })?;
        validate_envelope(FALLBACK_ENTRY, &envelope)?;

        debug!(entries = self.entries.len(), "Response catalog validated");

        Ok(ResponseCatalog {
            entries: self.entries,
            fallback,
        })
    }
}

fn validate_envelope(entry: &str, envelope: &ResponseEnvelope) -> Result<(), CatalogError> {
    if envelope.actions.is_empty() {
        return Err(CatalogError::EmptyEnvelope {
            entry: entry.to_string(),
        });
    }
    if envelope.intent.as_str().trim().is_empty() {
        return Err(CatalogError::BlankIntent {
            entry: entry.to_string(),
        });
    }
    if let Some(active) = &envelope.state.active_components {
        let rendered = envelope.actions.iter().map(|a| &a.component);
        if !active.iter().eq(rendered) {
            return Err(CatalogError::ActiveComponentsMismatch {
                entry: entry.to_string(),
            });
        }
    }
    Ok(())
}
