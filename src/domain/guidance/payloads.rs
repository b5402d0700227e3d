//! Typed payloads for the widgets the standard catalog renders.
//!
//! Catalog authors describe a widget with a [`ComponentPayload`]; it knows
//! its component name and encodes itself into the untyped [`Props`] bag
//! that crosses into the rendering layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Percentage};

use super::action::{components, ComponentName, Position, Props, UiAction};

/// The career goal the user most recently stated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareerGoal {
    pub goal: String,
    pub timeline: String,
    pub priority: String,
}

impl CareerGoal {
    pub fn new(
        goal: impl Into<String>,
        timeline: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            timeline: timeline.into(),
            priority: priority.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub level: SkillLevel,
    pub proficiency: Percentage,
}

impl SkillRating {
    pub fn new(name: impl Into<String>, level: SkillLevel, proficiency: u8) -> Self {
        Self {
            name: name.into(),
            level,
            proficiency: Percentage::new(proficiency),
        }
    }
}

/// Distance between where a skill is and where the goal needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGap {
    pub skill: String,
    pub current_level: Percentage,
    pub required_level: Percentage,
    pub gap_size: u8,
}

impl LearningGap {
    /// Builds a gap; `gap_size` is derived from the two levels.
    pub fn new(skill: impl Into<String>, current_level: u8, required_level: u8) -> Self {
        let current_level = Percentage::new(current_level);
        let required_level = Percentage::new(required_level);
        Self {
            skill: skill.into(),
            current_level,
            required_level,
            gap_size: required_level.value().saturating_sub(current_level.value()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Upcoming,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub status: MilestoneStatus,
}

impl Milestone {
    /// A milestone that has not started yet.
    pub fn upcoming(
        title: impl Into<String>,
        description: impl Into<String>,
        timeframe: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            timeframe: timeframe.into(),
            status: MilestoneStatus::Upcoming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    pub title: String,
    pub fit_score: Percentage,
    pub description: String,
    pub matched_skills: Vec<String>,
}

impl JobRole {
    pub fn new(
        title: impl Into<String>,
        fit_score: u8,
        description: impl Into<String>,
        matched_skills: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            fit_score: Percentage::new(fit_score),
            description: description.into(),
            matched_skills: matched_skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Book,
    Course,
    Tool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub provider: String,
    pub description: String,
    pub estimated_time: String,
    pub relevance: Relevance,
}

impl Resource {
    pub fn new(
        title: impl Into<String>,
        kind: ResourceKind,
        provider: impl Into<String>,
        description: impl Into<String>,
        estimated_time: impl Into<String>,
        relevance: Relevance,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            provider: provider.into(),
            description: description.into(),
            estimated_time: estimated_time.into(),
            relevance,
        }
    }
}

/// Failure to turn a typed payload into props.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Failed to encode props for component '{component}': {reason}")]
    Encode {
        component: ComponentName,
        reason: String,
    },

    #[error("Props for component '{component}' did not encode to an object")]
    NotAnObject { component: ComponentName },
}

impl PayloadError {
    pub fn component(&self) -> &ComponentName {
        match self {
            PayloadError::Encode { component, .. } | PayloadError::NotAnObject { component } => {
                component
            }
        }
    }
}

impl From<PayloadError> for DomainError {
    fn from(err: PayloadError) -> Self {
        DomainError::new(ErrorCode::PayloadEncoding, err.to_string())
            .with_detail("component", err.component().as_str())
    }
}

/// Typed props for the known widget families, keyed by component.
///
/// Serializes untagged, so each variant's fields become the props object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentPayload {
    CareerGoalCard(CareerGoal),
    SkillAssessmentPanel {
        skills: Vec<SkillRating>,
    },
    LearningGapVisualizer {
        gaps: Vec<LearningGap>,
    },
    RoadmapTimeline {
        milestones: Vec<Milestone>,
    },
    JobFitExplorer {
        roles: Vec<JobRole>,
    },
    ResourceRecommendations {
        resources: Vec<Resource>,
    },
    ConfidenceMeter {
        clarity: Percentage,
        confidence: Percentage,
        insights: Vec<String>,
    },
}

impl ComponentPayload {
    /// The widget family this payload is shaped for.
    pub fn component(&self) -> ComponentName {
        let name = match self {
            ComponentPayload::CareerGoalCard(_) => components::CAREER_GOAL_CARD,
            ComponentPayload::SkillAssessmentPanel { .. } => components::SKILL_ASSESSMENT_PANEL,
            ComponentPayload::LearningGapVisualizer { .. } => components::LEARNING_GAP_VISUALIZER,
            ComponentPayload::RoadmapTimeline { .. } => components::ROADMAP_TIMELINE,
            ComponentPayload::JobFitExplorer { .. } => components::JOB_FIT_EXPLORER,
            ComponentPayload::ResourceRecommendations { .. } => {
                components::RESOURCE_RECOMMENDATIONS
            }
            ComponentPayload::ConfidenceMeter { .. } => components::CONFIDENCE_METER,
        };
        ComponentName::new(name)
    }

    /// Encodes the payload into an untyped props object.
    pub fn to_props(&self) -> Result<Props, PayloadError> {
        let value = serde_json::to_value(self).map_err(|e| PayloadError::Encode {
            component: self.component(),
            reason: e.to_string(),
        })?;
        match value {
            serde_json::Value::Object(props) => Ok(props),
            _ => Err(PayloadError::NotAnObject {
                component: self.component(),
            }),
        }
    }

    /// Builds the render directive for this payload.
    pub fn render_at(&self, position: Position) -> Result<UiAction, PayloadError> {
        Ok(UiAction::new(self.component(), self.to_props()?).at(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn learning_gap_derives_gap_size() {
        let gap = LearningGap::new("System Design", 35, 80);
        assert_eq!(gap.gap_size, 45);

        let inverted = LearningGap::new("Already There", 90, 60);
        assert_eq!(inverted.gap_size, 0);
    }

    #[test]
    fn goal_card_props_are_the_goal_fields() {
        let payload = ComponentPayload::CareerGoalCard(CareerGoal::new(
            "Become a Data Engineer",
            "1 year",
            "high",
        ));
        let action = payload.render_at(Position::Top).unwrap();

        assert_eq!(action.component, components::CAREER_GOAL_CARD);
        assert_eq!(action.position, Some(Position::Top));
        assert_eq!(
            serde_json::Value::Object(action.props),
            json!({ "goal": "Become a Data Engineer", "timeline": "1 year", "priority": "high" })
        );
    }

    #[test]
    fn gap_visualizer_props_use_camel_case() {
        let payload = ComponentPayload::LearningGapVisualizer {
            gaps: vec![LearningGap::new("Database Design", 45, 75)],
        };
        let props = payload.to_props().unwrap();

        assert_eq!(
            props["gaps"][0],
            json!({ "skill": "Database Design", "currentLevel": 45, "requiredLevel": 75, "gapSize": 30 })
        );
    }

    #[test]
    fn resource_kind_serializes_as_type() {
        let payload = ComponentPayload::ResourceRecommendations {
            resources: vec![Resource {
                title: "LeetCode Premium".to_string(),
                kind: ResourceKind::Tool,
                provider: "LeetCode".to_string(),
                description: "Practice coding problems".to_string(),
                estimated_time: "Ongoing".to_string(),
                relevance: Relevance::High,
            }],
        };
        let props = payload.to_props().unwrap();

        assert_eq!(props["resources"][0]["type"], json!("tool"));
        assert_eq!(props["resources"][0]["estimatedTime"], json!("Ongoing"));
    }

    #[test]
    fn confidence_meter_props_carry_scores() {
        let payload = ComponentPayload::ConfidenceMeter {
            clarity: Percentage::new(45),
            confidence: Percentage::new(40),
            insights: vec!["Tell us more".to_string()],
        };
        let props = payload.to_props().unwrap();

        assert_eq!(props["clarity"], json!(45));
        assert_eq!(props["confidence"], json!(40));
        assert_eq!(payload.component(), components::CONFIDENCE_METER);
    }

    #[test]
    fn job_role_matched_skills_are_kept_in_order() {
        let role = JobRole::new("Product Lead", 88, "Lead teams", &["Leadership", "Strategy"]);
        let value = serde_json::to_value(&role).unwrap();
        assert_eq!(value["fitScore"], json!(88));
        assert_eq!(value["matchedSkills"], json!(["Leadership", "Strategy"]));
    }
}
