//! Adapters - implementations of the port traits.

pub mod classifier;

pub use classifier::{SimulatedClassifier, SimulatedFault, DEFAULT_LATENCY};
