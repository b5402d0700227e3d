//! Intent Classifier Adapters.
//!
//! - `SimulatedClassifier` - Catalog-backed classifier with simulated latency
//!   and fault injection

mod simulated;

pub use simulated::{SimulatedClassifier, SimulatedFault, DEFAULT_LATENCY};
