//! A single keyword-triggered response pattern.

use std::fmt;
use std::sync::Arc;

use crate::domain::guidance::{PayloadError, ResponseEnvelope};

/// Builds a full envelope from the user's original text.
///
/// Must be deterministic: the same text always yields the same envelope.
pub type Generator = Arc<dyn Fn(&str) -> Result<ResponseEnvelope, PayloadError> + Send + Sync>;

/// Trigger keywords plus the generator they select.
#[derive(Clone)]
pub struct CatalogEntry {
    name: String,
    keywords: Vec<String>,
    generator: Generator,
}

impl CatalogEntry {
    /// Creates an entry. Keywords are case-folded once here.
    pub fn new<I, K, F>(name: impl Into<String>, keywords: I, generator: F) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
        F: Fn(&str) -> Result<ResponseEnvelope, PayloadError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            generator: Arc::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs in the already case-folded text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    /// Runs the generator on the original, non-normalized text.
    pub fn generate(&self, text: &str) -> Result<ResponseEnvelope, PayloadError> {
        (self.generator)(text)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guidance::{Intent, StateUpdate};

    fn echo_entry(keywords: &[&str]) -> CatalogEntry {
        CatalogEntry::new("echo", keywords.iter().copied(), |text: &str| {
            Ok(ResponseEnvelope::new(
                Intent::new(text),
                Vec::new(),
                StateUpdate::new(),
            ))
        })
    }

    #[test]
    fn keywords_are_case_folded() {
        let entry = echo_entry(&["Data Scientist", "ML"]);
        assert_eq!(entry.keywords(), &["data scientist".to_string(), "ml".to_string()]);
    }

    #[test]
    fn matches_on_substring_of_normalized_text() {
        let entry = echo_entry(&["Data Scientist"]);
        assert!(entry.matches("i want to be a data scientist someday"));
        assert!(!entry.matches("i want to be a data engineer"));
    }

    #[test]
    fn generator_receives_original_text() {
        let entry = echo_entry(&["anything"]);
        let envelope = entry.generate("Keep My Casing").unwrap();
        assert_eq!(envelope.intent.as_str(), "Keep My Casing");
    }

    #[test]
    fn debug_output_names_the_entry() {
        let entry = echo_entry(&["x"]);
        assert!(format!("{:?}", entry).contains("echo"));
    }
}
