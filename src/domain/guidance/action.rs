//! UI directives handed to the rendering layer.
//!
//! A [`UiAction`] names a widget family, a placement hint and an opaque
//! property bag. The engine threads props through untouched; whether they
//! fit the named component is a contract between catalog authors and the
//! renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Component identifiers emitted by the standard catalog.
///
/// The set is open: any string is a valid [`ComponentName`].
pub mod components {
    pub const CAREER_GOAL_CARD: &str = "CareerGoalCard";
    pub const SKILL_ASSESSMENT_PANEL: &str = "SkillAssessmentPanel";
    pub const LEARNING_GAP_VISUALIZER: &str = "LearningGapVisualizer";
    pub const ROADMAP_TIMELINE: &str = "RoadmapTimeline";
    pub const JOB_FIT_EXPLORER: &str = "JobFitExplorer";
    pub const RESOURCE_RECOMMENDATIONS: &str = "ResourceRecommendations";
    pub const CONFIDENCE_METER: &str = "ConfidenceMeter";
}

/// Untyped, component-specific properties.
pub type Props = Map<String, Value>;

/// Name of a widget family in the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ComponentName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ComponentName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical placement hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    #[default]
    Main,
    Bottom,
}

/// Directive kind. Only rendering exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ActionKind {
    #[default]
    Render,
}

/// One directive to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiAction {
    #[serde(rename = "type", default)]
    pub kind: ActionKind,
    pub component: ComponentName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default)]
    pub props: Props,
}

impl UiAction {
    /// Creates a render directive with no placement hint.
    pub fn new(component: impl Into<ComponentName>, props: Props) -> Self {
        Self {
            kind: ActionKind::Render,
            component: component.into(),
            position: None,
            props,
        }
    }

    /// Sets the placement hint.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Placement with the implied default applied.
    pub fn effective_position(&self) -> Position {
        self.position.unwrap_or_default()
    }
}
