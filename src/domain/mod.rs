//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `guidance` - UI actions, guidance state, envelopes, and the state merge
//! - `catalog` - Keyword-triggered response patterns and their validation
//! - `session` - Action log and the guidance session aggregate

pub mod catalog;
pub mod foundation;
pub mod guidance;
pub mod session;
