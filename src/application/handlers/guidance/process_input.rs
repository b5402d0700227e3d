//! ProcessInputHandler - resolve user text to a response envelope.
//!
//! This is the asynchronous entry point of the engine. It never inspects
//! or mutates session state; a failure is reported as a whole and carries
//! a user-facing notice.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::guidance::ResponseEnvelope;
use crate::ports::{ClassifyError, IntentClassifier};

/// Command to process one user input.
#[derive(Debug, Clone)]
pub struct ProcessInputCommand {
    pub text: String,
}

impl ProcessInputCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Failure to produce an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessInputError {
    #[error(transparent)]
    Classification(#[from] ClassifyError),

    #[error("no response within {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },
}

impl ProcessInputError {
    /// Non-fatal message suitable for showing to the end user.
    pub fn notice(&self) -> &'static str {
        match self {
            ProcessInputError::TimedOut { .. }
            | ProcessInputError::Classification(ClassifyError::Timeout { .. }) => {
                "Guidance is taking longer than expected. Please try again."
            }
            ProcessInputError::Classification(ClassifyError::Generator(_)) => {
                "That request could not be answered. Try describing your career goal differently."
            }
            ProcessInputError::Classification(_) => {
                "Something went wrong while preparing your guidance. Please try again."
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProcessInputError::TimedOut { .. } => ErrorCode::ClassificationTimeout,
            ProcessInputError::Classification(err) => DomainError::from(err.clone()).code,
        }
    }

    /// True when re-submitting the same text may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProcessInputError::TimedOut { .. } => true,
            ProcessInputError::Classification(err) => err.is_transient(),
        }
    }
}

/// Handler for processing user input
pub struct ProcessInputHandler {
    classifier: Arc<dyn IntentClassifier>,
    timeout: Duration,
}

impl ProcessInputHandler {
    pub fn new(classifier: Arc<dyn IntentClassifier>, timeout: Duration) -> Self {
        Self {
            classifier,
            timeout,
        }
    }

    /// Classifies `cmd.text` under the configured deadline.
    ///
    /// The call runs as its own task. Missing the deadline detaches that
    /// task instead of cancelling it; its late result is dropped.
    pub async fn handle(
        &self,
        cmd: ProcessInputCommand,
    ) -> Result<ResponseEnvelope, ProcessInputError> {
        let classifier = Arc::clone(&self.classifier);
        let text = cmd.text;
        let task = tokio::spawn(async move { classifier.classify(&text).await });

        let result = match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => result.map_err(ProcessInputError::from),
            Ok(Err(join_err)) => {
                warn!(error = %join_err, "Classification task aborted");
                Err(ProcessInputError::from(ClassifyError::Interrupted))
            }
            Err(_) => Err(ProcessInputError::TimedOut {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        };

        match &result {
            Ok(envelope) => debug!(
                intent = %envelope.intent,
                actions = envelope.actions.len(),
                "Input processed"
            ),
            Err(err) => warn!(
                code = %err.code(),
                error = %err,
                retryable = err.is_retryable(),
                "Input processing failed"
            ),
        }

        result
    }
}
