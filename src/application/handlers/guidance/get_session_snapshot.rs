//! GetSessionSnapshotHandler - read model of the current session.

use crate::domain::session::SessionSnapshot;

use super::session_handle::SessionHandle;

/// Query handler for the session snapshot
pub struct GetSessionSnapshotHandler {
    session: SessionHandle,
}

impl GetSessionSnapshotHandler {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    pub async fn handle(&self) -> SessionSnapshot {
        self.session.snapshot().await
    }
}
