//! SubmitInputHandler - classify, merge, and record one turn.

use tracing::{info, warn};

use crate::domain::foundation::SessionEpoch;
use crate::domain::session::{SessionError, TurnSummary};

use super::process_input::{ProcessInputCommand, ProcessInputError, ProcessInputHandler};
use super::session_handle::SessionHandle;

/// Command to submit user text to the session.
#[derive(Debug, Clone)]
pub struct SubmitInputCommand {
    pub text: String,
}

impl SubmitInputCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// What happened to a successfully classified input.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The turn was merged and its actions recorded.
    Applied(TurnSummary),
    /// The session was reset while classifying; the result was discarded.
    Superseded {
        started: SessionEpoch,
        current: SessionEpoch,
    },
}

impl SubmitOutcome {
    pub fn applied(&self) -> Option<&TurnSummary> {
        match self {
            SubmitOutcome::Applied(summary) => Some(summary),
            SubmitOutcome::Superseded { .. } => None,
        }
    }
}

/// Handler for submitting input
///
/// Overlapping submissions are not serialized: each one applies when its
/// classification completes.
pub struct SubmitInputHandler {
    processor: ProcessInputHandler,
    session: SessionHandle,
}

impl SubmitInputHandler {
    pub fn new(processor: ProcessInputHandler, session: SessionHandle) -> Self {
        Self { processor, session }
    }

    pub async fn handle(&self, cmd: SubmitInputCommand) -> Result<SubmitOutcome, ProcessInputError> {
        // 1. Fence the request to the current epoch
        let started = self.session.epoch().await;

        // 2. Classify; failures leave the session untouched
        let envelope = self
            .processor
            .handle(ProcessInputCommand::new(cmd.text))
            .await?;

        // 3. Merge and record atomically, unless a reset intervened
        match self.session.apply(started, &envelope).await {
            Ok(summary) => {
                info!(
                    intent = %summary.intent,
                    actions = summary.actions.len(),
                    progress = %summary.metrics.progress,
                    "Turn applied"
                );
                Ok(SubmitOutcome::Applied(summary))
            }
            Err(SessionError::StaleEpoch { started, current }) => {
                warn!(%started, %current, "Discarding result from before reset");
                Ok(SubmitOutcome::Superseded { started, current })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{SimulatedClassifier, SimulatedFault};
    use crate::domain::catalog::ResponseCatalog;
    use crate::domain::guidance::GuidanceState;
    use std::sync::Arc;
    use std::time::Duration;

    fn handler_with(classifier: SimulatedClassifier) -> (SubmitInputHandler, SessionHandle) {
        let session = SessionHandle::new();
        let processor = ProcessInputHandler::new(Arc::new(classifier), Duration::from_secs(5));
        (SubmitInputHandler::new(processor, session.clone()), session)
    }

    fn simulated() -> SimulatedClassifier {
        SimulatedClassifier::new(ResponseCatalog::standard().unwrap()).with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_submit_applies_turn() {
        let (handler, session) = handler_with(simulated());

        let outcome = handler
            .handle(SubmitInputCommand::new("software engineer"))
            .await
            .unwrap();

        let summary = outcome.applied().unwrap();
        assert_eq!(summary.actions.len(), 7);
        assert_eq!(session.metrics().await.actions_generated, 7);
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_session_untouched() {
        let (handler, session) = handler_with(simulated().with_fault(SimulatedFault::Network {
            message: "connection reset".to_string(),
        }));
        handler
            .handle(SubmitInputCommand::new("pm"))
            .await
            .unwrap_err();

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.state, GuidanceState::empty());
        assert!(snapshot.actions.is_empty());

        // Same input succeeds on retry.
        let outcome = handler.handle(SubmitInputCommand::new("pm")).await.unwrap();
        assert!(outcome.applied().is_some());
    }

    #[tokio::test]
    async fn test_submit_superseded_by_reset() {
        let (handler, session) =
            handler_with(simulated().with_delay(Duration::from_millis(100)));

        let submit = handler.handle(SubmitInputCommand::new("developer"));
        let reset = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            session.reset().await
        };
        let (outcome, epoch) = tokio::join!(submit, reset);

        assert_eq!(
            outcome.unwrap(),
            SubmitOutcome::Superseded {
                started: SessionEpoch::INITIAL,
                current: epoch,
            }
        );
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.state, GuidanceState::empty());
        assert_eq!(snapshot.metrics.actions_generated, 0);
    }
}
