//! ResetSessionHandler - return the session to its empty state.

use tracing::info;

use crate::domain::foundation::SessionEpoch;
use crate::domain::session::SessionMetrics;

use super::session_handle::SessionHandle;

/// Result of a reset
#[derive(Debug, Clone, PartialEq)]
pub struct ResetSessionResult {
    /// Epoch opened by the reset; results requested earlier are discarded.
    pub epoch: SessionEpoch,
    pub metrics: SessionMetrics,
}

/// Handler for session resets
pub struct ResetSessionHandler {
    session: SessionHandle,
}

impl ResetSessionHandler {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    pub async fn handle(&self) -> ResetSessionResult {
        let epoch = self.session.reset().await;
        let metrics = self.session.metrics().await;
        info!(%epoch, "Session reset");
        ResetSessionResult { epoch, metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ResponseCatalog;
    use crate::domain::foundation::Percentage;

    #[tokio::test]
    async fn test_reset_clears_log_and_progress() {
        let session = SessionHandle::new();
        let envelope = ResponseCatalog::standard()
            .unwrap()
            .classify("coding")
            .unwrap()
            .envelope;
        session.apply(SessionEpoch::INITIAL, &envelope).await.unwrap();

        let result = ResetSessionHandler::new(session.clone()).handle().await;

        assert_eq!(result.epoch, SessionEpoch::INITIAL.next());
        assert_eq!(result.metrics.actions_generated, 0);
        assert_eq!(result.metrics.progress, Percentage::ZERO);
    }

    #[tokio::test]
    async fn test_reset_on_empty_session_still_advances_epoch() {
        let session = SessionHandle::new();
        let handler = ResetSessionHandler::new(session);

        let first = handler.handle().await;
        let second = handler.handle().await;

        assert!(second.epoch > first.epoch);
    }
}
