//! Guidance Command and Query Handlers
//!
//! ## Commands
//! - `ProcessInput` - Resolve text to a response envelope
//! - `SubmitInput` - Process input and apply it to the session
//! - `ResetSession` - Return the session to its empty state
//!
//! ## Queries
//! - `GetSessionSnapshot` - Current state, action log, and metrics

mod get_session_snapshot;
mod process_input;
mod reset_session;
mod session_handle;
mod submit_input;

pub use get_session_snapshot::GetSessionSnapshotHandler;
pub use process_input::{ProcessInputCommand, ProcessInputError, ProcessInputHandler};
pub use reset_session::{ResetSessionHandler, ResetSessionResult};
pub use session_handle::SessionHandle;
pub use submit_input::{SubmitInputCommand, SubmitInputHandler, SubmitOutcome};
