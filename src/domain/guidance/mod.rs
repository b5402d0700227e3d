//! Guidance module - the action/state value model.
//!
//! Shapes shared by every other part of the engine:
//!
//! - [`UiAction`] - one directive to the rendering layer
//! - [`ResponseEnvelope`] - ordered actions + intent + partial state
//! - [`GuidanceState`] / [`StateUpdate`] - cumulative state and its deltas
//!
//! plus the two pure operations over them, [`merge_state`] and
//! [`generate_ui_actions`].

mod action;
mod envelope;
mod merge;
mod payloads;
mod state;

pub use action::{components, ActionKind, ComponentName, Position, Props, UiAction};
pub use envelope::{generate_ui_actions, intents, Intent, ResponseEnvelope};
pub use merge::merge_state;
pub use payloads::{
    CareerGoal, ComponentPayload, JobRole, LearningGap, Milestone, MilestoneStatus, PayloadError,
    Relevance, Resource, ResourceKind, SkillLevel, SkillRating,
};
pub use state::{GuidanceState, StateExtensions, StateUpdate, RESERVED_STATE_KEYS};
