//! State merging.
//!
//! Shallow, top-level replacement: every key present in the update wins,
//! every absent key is kept. Nested values (the career goal, any collection)
//! are swapped wholesale, never deep-merged or unioned.

use super::state::{GuidanceState, StateUpdate};

/// Returns `current` overlaid with `update`. Neither input is modified.
pub fn merge_state(current: &GuidanceState, update: &StateUpdate) -> GuidanceState {
    GuidanceState {
        career_goal: update
            .career_goal
            .clone()
            .unwrap_or_else(|| current.career_goal.clone()),
        active_components: update
            .active_components
            .clone()
            .unwrap_or_else(|| current.active_components.clone()),
        clarity: update.clarity.unwrap_or(current.clarity),
        confidence: update.confidence.unwrap_or(current.confidence),
        extensions: current.extensions.overlaid_with(&update.extensions),
    }
}
