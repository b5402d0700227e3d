//! Ports - interfaces the application layer depends on.
//!
//! Adapters in `crate::adapters` implement these traits.

mod intent_classifier;

pub use intent_classifier::{ClassifierInfo, ClassifyError, IntentClassifier};
