//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod guidance;

pub use guidance::{
    GetSessionSnapshotHandler, ProcessInputCommand, ProcessInputError, ProcessInputHandler,
    ResetSessionHandler, ResetSessionResult, SessionHandle, SubmitInputCommand,
    SubmitInputHandler, SubmitOutcome,
};
