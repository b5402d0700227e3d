//! The bundled result of one classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::UiAction;
use super::state::StateUpdate;

/// Intent labels produced by the standard catalog.
pub mod intents {
    pub const SET_CAREER_GOAL: &str = "set_career_goal";
    pub const GENERIC_CAREER_GUIDANCE: &str = "generic_career_guidance";
}

/// Classification label, kept for observability and tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intent(String);

impl Intent {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Intent {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered actions, an intent label and a partial state.
///
/// Action order is the render order and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub actions: Vec<UiAction>,
    pub intent: Intent,
    #[serde(default)]
    pub state: StateUpdate,
}

impl ResponseEnvelope {
    pub fn new(intent: Intent, actions: Vec<UiAction>, state: StateUpdate) -> Self {
        Self {
            actions,
            intent,
            state,
        }
    }
}

/// Projects the ordered actions out of an envelope.
pub fn generate_ui_actions(envelope: &ResponseEnvelope) -> Vec<UiAction> {
    envelope.actions.clone()
}
