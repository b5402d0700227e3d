//! Append-only log of every action produced in a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::guidance::UiAction;

/// Number of recorded actions at which progress reads 100%.
pub const PROGRESS_SATURATION: usize = 10;

/// Ordered record of generated actions, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    entries: Vec<UiAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn's actions, keeping their order.
    pub fn record(&mut self, actions: &[UiAction]) {
        self.entries.extend_from_slice(actions);
    }

    /// `min(100, round(100 * len / PROGRESS_SATURATION))`.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.entries.len(), PROGRESS_SATURATION)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn actions(&self) -> &[UiAction] {
        &self.entries
    }
}
