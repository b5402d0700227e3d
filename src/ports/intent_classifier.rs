//! Intent Classifier Port - resolving free text to a response envelope.
//!
//! Classification stands in for an external inference call: it suspends
//! the caller and can fail transiently. Implementations must not serialize
//! concurrent calls; ordering is the caller's concern.
//!
//! # Example
//!
//! ```ignore
//! let envelope = classifier.classify("I want to become a developer").await?;
//! assert_eq!(envelope.intent, "set_career_goal");
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::guidance::{PayloadError, ResponseEnvelope};

/// Port for intent classification.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Resolve text to a complete envelope, or fail as a whole.
    ///
    /// Empty text is valid input and resolves to the fallback envelope.
    async fn classify(&self, text: &str) -> Result<ResponseEnvelope, ClassifyError>;

    /// Describe this classifier for logs.
    fn classifier_info(&self) -> ClassifierInfo;
}

/// Static description of a classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierInfo {
    /// Implementation name.
    pub name: String,
    /// Number of registered catalog entries, excluding the fallback.
    pub entries: usize,
}

impl ClassifierInfo {
    pub fn new(name: impl Into<String>, entries: usize) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// Errors from intent classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Inference service is unavailable.
    #[error("classifier unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network failure while reaching the service.
    #[error("network error: {0}")]
    Network(String),

    /// The call did not finish in time.
    #[error("classification timed out after {timeout_ms}ms")]
    Timeout {
        /// Elapsed budget.
        timeout_ms: u64,
    },

    /// The in-flight call was interrupted before completing.
    #[error("classification interrupted")]
    Interrupted,

    /// A catalog generator failed to produce its envelope.
    #[error("response generation failed: {0}")]
    Generator(#[from] PayloadError),
}

impl ClassifyError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// True for faults that a retry with the same input may clear.
    pub fn is_transient(&self) -> bool {
        !matches!(self, ClassifyError::Generator(_))
    }
}

impl From<ClassifyError> for DomainError {
    fn from(err: ClassifyError) -> Self {
        let code = match &err {
            ClassifyError::Generator(payload) => return payload.clone().into(),
            ClassifyError::Timeout { .. } => ErrorCode::ClassificationTimeout,
            _ => ErrorCode::ClassificationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
