//! SessionHandle - shared, lock-guarded access to one guidance session.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionEpoch, SessionId};
use crate::domain::guidance::ResponseEnvelope;
use crate::domain::session::{
    GuidanceSession, SessionError, SessionMetrics, SessionSnapshot, TurnSummary,
};

/// Cloneable handle to a session shared between handlers.
///
/// Every mutation takes the write lock for its whole duration, so a merge
/// and its log append are never observed apart, and a reset cannot land
/// between them.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    session: Arc<RwLock<GuidanceSession>>,
}

impl SessionHandle {
    /// Opens a fresh session.
    pub fn new() -> Self {
        Self::from_session(GuidanceSession::new(SessionId::new()))
    }

    pub fn from_session(session: GuidanceSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }

    pub async fn id(&self) -> SessionId {
        self.session.read().await.id()
    }

    /// Current epoch; capture it before starting work that may be superseded.
    pub async fn epoch(&self) -> SessionEpoch {
        self.session.read().await.epoch()
    }

    pub async fn apply(
        &self,
        epoch: SessionEpoch,
        envelope: &ResponseEnvelope,
    ) -> Result<TurnSummary, SessionError> {
        self.session.write().await.apply(epoch, envelope)
    }

    pub async fn reset(&self) -> SessionEpoch {
        self.session.write().await.reset()
    }

    pub async fn metrics(&self) -> SessionMetrics {
        self.session.read().await.metrics()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ResponseCatalog;

    fn envelope(text: &str) -> ResponseEnvelope {
        ResponseCatalog::standard().unwrap().classify(text).unwrap().envelope
    }

    #[tokio::test]
    async fn clones_share_the_same_session() {
        let handle = SessionHandle::new();
        let other = handle.clone();

        handle
            .apply(SessionEpoch::INITIAL, &envelope("developer"))
            .await
            .unwrap();

        assert_eq!(other.metrics().await.actions_generated, 7);
        assert_eq!(other.id().await, handle.id().await);
    }

    #[tokio::test]
    async fn reset_advances_epoch_for_all_clones() {
        let handle = SessionHandle::new();
        let other = handle.clone();

        let epoch = handle.reset().await;

        assert_eq!(other.epoch().await, epoch);
        assert!(other
            .apply(SessionEpoch::INITIAL, &envelope("pm"))
            .await
            .is_err());
    }
}
