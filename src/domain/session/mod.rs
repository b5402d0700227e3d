//! Session module - the per-user accumulation of guidance.
//!
//! - [`ActionLog`] - append-only action accumulator with a progress metric
//! - [`GuidanceSession`] - state + log + epoch, updated as one unit

mod action_log;
mod aggregate;

pub use action_log::{ActionLog, PROGRESS_SATURATION};
pub use aggregate::{GuidanceSession, SessionError, SessionMetrics, SessionSnapshot, TurnSummary};
