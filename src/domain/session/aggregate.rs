//! Guidance Session Aggregate
//!
//! Holds everything one user session accumulates: the merged guidance
//! state, the action log, and the epoch that fences stale results out
//! after a reset. State and log only ever change together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, Percentage, SessionEpoch, SessionId, Timestamp,
};
use crate::domain::guidance::{
    generate_ui_actions, merge_state, GuidanceState, Intent, ResponseEnvelope, UiAction,
};

use super::action_log::ActionLog;

/// Errors raised by the session aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Result from {started} arrived after the session moved to {current}")]
    StaleEpoch {
        started: SessionEpoch,
        current: SessionEpoch,
    },
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match &err {
            SessionError::StaleEpoch { .. } => DomainError::new(ErrorCode::StaleEpoch, err.to_string()),
        }
    }
}

/// Progress figures shown alongside the rendered guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetrics {
    pub actions_generated: usize,
    pub progress: Percentage,
    pub clarity: Percentage,
    pub confidence: Percentage,
    pub turns: u32,
}

/// What one applied envelope changed.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnSummary {
    pub epoch: SessionEpoch,
    pub intent: Intent,
    pub actions: Vec<UiAction>,
    pub state: GuidanceState,
    pub metrics: SessionMetrics,
}

/// Serializable read model of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub epoch: SessionEpoch,
    pub state: GuidanceState,
    pub actions: Vec<UiAction>,
    pub latest_actions: Vec<UiAction>,
    pub last_intent: Option<Intent>,
    pub metrics: SessionMetrics,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One user's guidance session.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceSession {
    id: SessionId,
    epoch: SessionEpoch,
    state: GuidanceState,
    log: ActionLog,
    latest_actions: Vec<UiAction>,
    last_intent: Option<Intent>,
    turn_count: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl GuidanceSession {
    /// Starts a session in the canonical empty state.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            epoch: SessionEpoch::INITIAL,
            state: GuidanceState::empty(),
            log: ActionLog::new(),
            latest_actions: Vec::new(),
            last_intent: None,
            turn_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    pub fn state(&self) -> &GuidanceState {
        &self.state
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Actions of the most recent turn only.
    pub fn latest_actions(&self) -> &[UiAction] {
        &self.latest_actions
    }

    /// Merges the envelope's state and records its actions.
    ///
    /// `epoch` is the epoch the envelope was requested in. A mismatch means
    /// a reset happened in between; the session is then left untouched.
    pub fn apply(
        &mut self,
        epoch: SessionEpoch,
        envelope: &ResponseEnvelope,
    ) -> Result<TurnSummary, SessionError> {
        if epoch != self.epoch {
            return Err(SessionError::StaleEpoch {
                started: epoch,
                current: self.epoch,
            });
        }

        let actions = generate_ui_actions(envelope);
        self.state = merge_state(&self.state, &envelope.state);
        self.log.record(&actions);
        self.latest_actions = actions.clone();
        self.last_intent = Some(envelope.intent.clone());
        self.turn_count = self.turn_count.saturating_add(1);
        self.updated_at = Timestamp::now();

        Ok(TurnSummary {
            epoch: self.epoch,
            intent: envelope.intent.clone(),
            actions,
            state: self.state.clone(),
            metrics: self.metrics(),
        })
    }

    /// Returns to the canonical empty state and opens a new epoch.
    pub fn reset(&mut self) -> SessionEpoch {
        self.epoch = self.epoch.next();
        self.state = GuidanceState::empty();
        self.log.reset();
        self.latest_actions.clear();
        self.last_intent = None;
        self.turn_count = 0;
        self.updated_at = Timestamp::now();
        self.epoch
    }

    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            actions_generated: self.log.len(),
            progress: self.log.progress(),
            clarity: self.state.clarity,
            confidence: self.state.confidence,
            turns: self.turn_count,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            epoch: self.epoch,
            state: self.state.clone(),
            actions: self.log.actions().to_vec(),
            latest_actions: self.latest_actions.clone(),
            last_intent: self.last_intent.clone(),
            metrics: self.metrics(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Default for GuidanceSession {
    fn default() -> Self {
        Self::new(SessionId::new())
    }
}
