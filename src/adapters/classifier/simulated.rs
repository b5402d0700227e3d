//! Simulated intent classifier.
//!
//! Resolves text against a [`ResponseCatalog`] after a configurable delay,
//! standing in for a remote inference call. Faults can be queued to
//! exercise failure handling without a real service.
//!
//! # Example
//!
//! ```ignore
//! let classifier = SimulatedClassifier::new(ResponseCatalog::standard()?)
//!     .with_delay(Duration::from_millis(800));
//!
//! let envelope = classifier.classify("product manager").await?;
//! assert_eq!(envelope.actions.len(), 6);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::catalog::ResponseCatalog;
use crate::domain::guidance::ResponseEnvelope;
use crate::ports::{ClassifierInfo, ClassifyError, IntentClassifier};

/// Latency used when none is configured.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Injectable failure, consumed by the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedFault {
    /// Simulate the service being down.
    Unavailable { message: String },
    /// Simulate a dropped connection.
    Network { message: String },
    /// Simulate a call that never answers in time.
    Timeout { timeout_ms: u64 },
    /// Simulate an interrupted call.
    Interrupted,
}

impl From<SimulatedFault> for ClassifyError {
    fn from(fault: SimulatedFault) -> Self {
        match fault {
            SimulatedFault::Unavailable { message } => ClassifyError::unavailable(message),
            SimulatedFault::Network { message } => ClassifyError::network(message),
            SimulatedFault::Timeout { timeout_ms } => ClassifyError::Timeout { timeout_ms },
            SimulatedFault::Interrupted => ClassifyError::Interrupted,
        }
    }
}

/// Catalog-backed classifier with simulated latency.
#[derive(Debug, Clone)]
pub struct SimulatedClassifier {
    catalog: Arc<ResponseCatalog>,
    /// Latency applied to every call without an override.
    delay: Duration,
    /// Per-input latency overrides, keyed by exact text.
    delay_overrides: HashMap<String, Duration>,
    /// Queued faults (consumed in order).
    faults: Arc<Mutex<VecDeque<SimulatedFault>>>,
    /// Inputs seen, in call order.
    calls: Arc<Mutex<Vec<String>>>,
}

impl SimulatedClassifier {
    /// Creates a classifier over `catalog` with the default latency.
    pub fn new(catalog: Arc<ResponseCatalog>) -> Self {
        Self {
            catalog,
            delay: DEFAULT_LATENCY,
            delay_overrides: HashMap::new(),
            faults: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the latency for one exact input.
    pub fn with_delay_for(mut self, text: impl Into<String>, delay: Duration) -> Self {
        self.delay_overrides.insert(text.into(), delay);
        self
    }

    /// Queues a fault for a future call.
    pub fn with_fault(self, fault: SimulatedFault) -> Self {
        self.push_fault(fault);
        self
    }

    /// Queues a fault on a shared classifier.
    pub fn push_fault(&self, fault: SimulatedFault) {
        lock(&self.faults).push_back(fault);
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Inputs received, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn delay_for(&self, text: &str) -> Duration {
        self.delay_overrides.get(text).copied().unwrap_or(self.delay)
    }

    fn next_fault(&self) -> Option<SimulatedFault> {
        lock(&self.faults).pop_front()
    }
}

// A panicked test thread must not wedge the remaining calls.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl IntentClassifier for SimulatedClassifier {
    async fn classify(&self, text: &str) -> Result<ResponseEnvelope, ClassifyError> {
        lock(&self.calls).push(text.to_string());

        let delay = self.delay_for(text);
        if !delay.is_zero() {
            sleep(delay).await;
        }

        if let Some(fault) = self.next_fault() {
            debug!(?fault, "Injecting classifier fault");
            return Err(fault.into());
        }

        let classification = self.catalog.classify(text)?;
        Ok(classification.envelope)
    }

    fn classifier_info(&self) -> ClassifierInfo {
        ClassifierInfo::new("simulated", self.catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guidance::intents;

    fn classifier() -> SimulatedClassifier {
        SimulatedClassifier::new(ResponseCatalog::standard().unwrap()).with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn classifies_through_the_catalog() {
        let envelope = classifier()
            .classify("I want to become a software engineer")
            .await
            .unwrap();

        assert_eq!(envelope.intent, intents::SET_CAREER_GOAL);
        assert_eq!(envelope.actions.len(), 7);
    }

    #[tokio::test]
    async fn empty_input_resolves_to_fallback() {
        let envelope = classifier().classify("").await.unwrap();

        assert_eq!(envelope.intent, intents::GENERIC_CAREER_GUIDANCE);
        assert_eq!(envelope.actions.len(), 2);
    }

    #[tokio::test]
    async fn returns_queued_faults_in_order() {
        let classifier = classifier()
            .with_fault(SimulatedFault::Unavailable {
                message: "maintenance".to_string(),
            })
            .with_fault(SimulatedFault::Interrupted);

        let first = classifier.classify("developer").await.unwrap_err();
        let second = classifier.classify("developer").await.unwrap_err();
        let third = classifier.classify("developer").await;

        assert!(matches!(first, ClassifyError::Unavailable { .. }));
        assert_eq!(second, ClassifyError::Interrupted);
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn tracks_calls() {
        let classifier = classifier();
        assert_eq!(classifier.call_count(), 0);

        classifier.classify("pm").await.unwrap();
        classifier.classify("astronaut").await.unwrap();

        assert_eq!(classifier.calls(), vec!["pm", "astronaut"]);

        classifier.clear_calls();
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_fault_queue_and_history() {
        let classifier = classifier();
        let shared = classifier.clone();

        shared.push_fault(SimulatedFault::Network {
            message: "reset".to_string(),
        });

        assert!(classifier.classify("coding").await.is_err());
        assert_eq!(shared.call_count(), 1);
    }

    #[tokio::test]
    async fn respects_delay_and_overrides() {
        let classifier = classifier()
            .with_delay(Duration::from_millis(20))
            .with_delay_for("slow", Duration::from_millis(150));

        let start = std::time::Instant::now();
        classifier.classify("fast").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));

        let start = std::time::Instant::now();
        classifier.classify("slow").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[test]
    fn faults_convert_to_classify_errors() {
        let err: ClassifyError = SimulatedFault::Timeout { timeout_ms: 30 }.into();
        assert_eq!(err, ClassifyError::Timeout { timeout_ms: 30 });

        let err: ClassifyError = SimulatedFault::Network {
            message: "down".to_string(),
        }
        .into();
        assert!(err.is_transient());
    }

    #[test]
    fn info_reports_catalog_size() {
        let info = classifier().classifier_info();
        assert_eq!(info.name, "simulated");
        assert_eq!(info.entries, 2);
    }
}
