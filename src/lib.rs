//! Career Navigator - Generative Career Guidance Engine
//!
//! Turns free-form career questions into an ordered list of UI render
//! instructions plus a partial state update, merges those updates into a
//! session's guidance state, and tracks the actions generated so far.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
