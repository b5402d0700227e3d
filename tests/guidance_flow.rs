//! Integration tests for the guidance flow.
//!
//! These tests drive the public handlers end to end:
//! 1. Text is classified by the simulated classifier
//! 2. The envelope's state update is merged into the session
//! 3. The envelope's actions are appended to the action log
//! 4. Resets fence out results requested before them
//!
//! Latencies are kept small; ordering scenarios use per-input delays.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use career_navigator::adapters::{SimulatedClassifier, SimulatedFault};
use career_navigator::application::{
    GetSessionSnapshotHandler, ProcessInputCommand, ProcessInputError, ProcessInputHandler,
    ResetSessionHandler, SessionHandle, SubmitInputCommand, SubmitInputHandler, SubmitOutcome,
};
use career_navigator::domain::catalog::{ResponseCatalog, PRODUCT_MANAGEMENT, SOFTWARE_ENGINEERING};
use career_navigator::domain::foundation::{Percentage, SessionEpoch};
use career_navigator::domain::guidance::{components, intents, GuidanceState, Position, UiAction};
use career_navigator::ports::ClassifyError;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    session: SessionHandle,
    submit: SubmitInputHandler,
    reset: ResetSessionHandler,
    snapshot: GetSessionSnapshotHandler,
}

impl Harness {
    fn with(classifier: SimulatedClassifier) -> Self {
        let session = SessionHandle::new();
        let processor = ProcessInputHandler::new(Arc::new(classifier), Duration::from_secs(5));
        Self {
            submit: SubmitInputHandler::new(processor, session.clone()),
            reset: ResetSessionHandler::new(session.clone()),
            snapshot: GetSessionSnapshotHandler::new(session.clone()),
            session,
        }
    }

    fn instant() -> Self {
        Self::with(simulated())
    }

    async fn submit(&self, text: &str) -> SubmitOutcome {
        self.submit
            .handle(SubmitInputCommand::new(text))
            .await
            .expect("submission should succeed")
    }
}

fn simulated() -> SimulatedClassifier {
    SimulatedClassifier::new(ResponseCatalog::standard().expect("standard catalog is valid"))
        .with_delay(Duration::ZERO)
}

fn component_names(actions: &[UiAction]) -> Vec<&str> {
    actions.iter().map(|a| a.component.as_str()).collect()
}

// =============================================================================
// Classification
// =============================================================================

#[tokio::test]
async fn software_engineer_input_sets_career_goal() {
    let harness = Harness::instant();

    let outcome = harness.submit("I want to become a software engineer").await;
    let turn = outcome.applied().expect("turn applied");

    assert_eq!(turn.intent, intents::SET_CAREER_GOAL);
    assert_eq!(turn.actions.len(), 7);

    let first = &turn.actions[0];
    assert_eq!(first.component, components::CAREER_GOAL_CARD);
    assert_eq!(first.position, Some(Position::Top));
    assert_eq!(first.props["timeline"], json!("2-3 years"));
    assert_eq!(first.props["goal"], json!("I want to become a software engineer"));

    assert_eq!(turn.state.clarity, Percentage::new(75));
    assert_eq!(turn.state.confidence, Percentage::new(62));
    assert_eq!(
        turn.state
            .active_components
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>(),
        component_names(&turn.actions)
    );
}

#[tokio::test]
async fn product_manager_input_sets_its_own_metrics() {
    let harness = Harness::instant();

    let outcome = harness.submit("How do I become a Product Manager?").await;
    let turn = outcome.applied().expect("turn applied");

    assert_eq!(turn.intent, intents::SET_CAREER_GOAL);
    assert_eq!(turn.actions.len(), 6);
    assert_eq!(turn.state.clarity, Percentage::new(82));
    assert_eq!(turn.state.confidence, Percentage::new(75));
    assert!(!component_names(&turn.actions).contains(&components::ROADMAP_TIMELINE));
}

#[tokio::test]
async fn unmatched_input_falls_back_to_generic_guidance() {
    let harness = Harness::instant();

    let outcome = harness.submit("I want to be an astronaut").await;
    let turn = outcome.applied().expect("turn applied");

    assert_eq!(turn.intent, intents::GENERIC_CAREER_GUIDANCE);
    assert_eq!(turn.state.active_components.len(), 2);
    assert_eq!(turn.state.clarity, Percentage::new(45));
    assert_eq!(turn.state.confidence, Percentage::new(40));
}

#[test]
fn first_registered_entry_wins_when_several_match() {
    let catalog = ResponseCatalog::standard().unwrap();

    let classification = catalog
        .classify("Should I be a developer or a product manager?")
        .unwrap();

    assert_eq!(classification.matched_entry.as_deref(), Some(SOFTWARE_ENGINEERING));
    assert_eq!(
        catalog.entry_names(),
        vec![SOFTWARE_ENGINEERING, PRODUCT_MANAGEMENT]
    );
}

#[tokio::test]
async fn classification_is_deterministic() {
    let processor = ProcessInputHandler::new(Arc::new(simulated()), Duration::from_secs(5));

    let first = processor
        .handle(ProcessInputCommand::new("I enjoy coding"))
        .await
        .unwrap();
    let second = processor
        .handle(ProcessInputCommand::new("I enjoy coding"))
        .await
        .unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Accumulation and Reset
// =============================================================================

#[tokio::test]
async fn progress_tracks_accumulated_actions() {
    let harness = Harness::instant();

    harness.submit("astronaut").await;
    assert_eq!(harness.session.metrics().await.progress, Percentage::new(20));

    harness.submit("developer").await;
    let metrics = harness.session.metrics().await;
    assert_eq!(metrics.actions_generated, 9);
    assert_eq!(metrics.progress, Percentage::new(90));

    harness.submit("pm").await;
    let metrics = harness.session.metrics().await;
    assert_eq!(metrics.actions_generated, 15);
    assert_eq!(metrics.progress, Percentage::HUNDRED);
    assert_eq!(metrics.turns, 3);
}

#[tokio::test]
async fn reset_returns_to_canonical_empty_state() {
    let harness = Harness::instant();
    harness.submit("software engineer").await;
    harness.submit("product manager").await;

    let result = harness.reset.handle().await;
    let snapshot = harness.snapshot.handle().await;

    assert_eq!(result.epoch, SessionEpoch::INITIAL.next());
    assert!(snapshot.actions.is_empty());
    assert_eq!(snapshot.metrics.progress, Percentage::ZERO);
    assert_eq!(snapshot.state, GuidanceState::empty());

    let value = serde_json::to_value(&snapshot.state).unwrap();
    assert_eq!(
        value,
        json!({
            "careerGoal": { "goal": "", "timeline": "", "priority": "" },
            "activeComponents": [],
            "clarity": 0,
            "confidence": 0,
            "skills": [],
            "learningGaps": [],
            "roadmap": [],
            "jobRoles": [],
            "resources": [],
            "insights": []
        })
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn overlapping_submissions_apply_in_completion_order() {
    let classifier = simulated()
        .with_delay_for("software engineer", Duration::from_millis(150))
        .with_delay_for("astronaut", Duration::from_millis(10));
    let harness = Harness::with(classifier);

    let (slow, fast) = tokio::join!(
        harness.submit("software engineer"),
        harness.submit("astronaut")
    );

    assert!(slow.applied().is_some());
    assert!(fast.applied().is_some());

    let snapshot = harness.snapshot.handle().await;
    // The slower response lands last and wins every field it sets.
    assert_eq!(snapshot.state.clarity, Percentage::new(75));
    assert_eq!(snapshot.state.career_goal.goal, "software engineer");
    assert_eq!(snapshot.actions.len(), 9);
    assert_eq!(snapshot.actions[0].component, components::CAREER_GOAL_CARD);
    assert_eq!(snapshot.actions[1].component, components::CONFIDENCE_METER);
    assert_eq!(snapshot.latest_actions.len(), 7);
}

#[tokio::test]
async fn reset_while_classifying_discards_the_late_result() {
    let harness = Harness::with(simulated().with_delay(Duration::from_millis(120)));

    let (outcome, reset) = tokio::join!(harness.submit("developer"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        harness.reset.handle().await
    });

    assert_eq!(
        outcome,
        SubmitOutcome::Superseded {
            started: SessionEpoch::INITIAL,
            current: reset.epoch,
        }
    );
    let snapshot = harness.snapshot.handle().await;
    assert_eq!(snapshot.state, GuidanceState::empty());
    assert_eq!(snapshot.metrics.actions_generated, 0);

    // Inputs submitted after the reset apply normally.
    assert!(harness.submit("developer").await.applied().is_some());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn transient_failure_leaves_session_usable() {
    let classifier = simulated();
    let faults = classifier.clone();
    let harness = Harness::with(classifier);
    harness.submit("astronaut").await;
    let before = harness.snapshot.handle().await;

    faults.push_fault(SimulatedFault::Unavailable {
        message: "inference backend restarting".to_string(),
    });

    let err = harness
        .submit
        .handle(SubmitInputCommand::new("product manager"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProcessInputError::Classification(ClassifyError::Unavailable { .. })
    ));
    assert!(err.is_retryable());
    assert!(!err.notice().is_empty());

    let after = harness.snapshot.handle().await;
    assert_eq!(after.state, before.state);
    assert_eq!(after.actions, before.actions);

    let retry = harness.submit("product manager").await;
    assert_eq!(
        retry.applied().map(|turn| turn.state.clarity),
        Some(Percentage::new(82))
    );
}

#[tokio::test]
async fn slow_classification_times_out_without_side_effects() {
    let session = SessionHandle::new();
    let processor = ProcessInputHandler::new(
        Arc::new(simulated().with_delay(Duration::from_millis(300))),
        Duration::from_millis(25),
    );
    let submit = SubmitInputHandler::new(processor, session.clone());

    let err = submit
        .handle(SubmitInputCommand::new("coding"))
        .await
        .unwrap_err();

    assert_eq!(err, ProcessInputError::TimedOut { timeout_ms: 25 });
    assert_eq!(session.metrics().await.actions_generated, 0);
}
