//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    GetSessionSnapshotHandler, ProcessInputCommand, ProcessInputError, ProcessInputHandler,
    ResetSessionHandler, ResetSessionResult, SessionHandle, SubmitInputCommand,
    SubmitInputHandler, SubmitOutcome,
};
