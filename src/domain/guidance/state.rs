//! Cumulative guidance state and the partial updates applied to it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::foundation::{Percentage, ValidationError};

use super::action::ComponentName;
use super::payloads::{CareerGoal, JobRole, LearningGap, Milestone, Resource, SkillRating};

/// Wire names owned by the state core and the typed collections.
///
/// A custom key with one of these names would serialize as a duplicate
/// JSON key, so [`StateUpdate::with_custom`] refuses them.
pub const RESERVED_STATE_KEYS: [&str; 10] = [
    "careerGoal",
    "activeComponents",
    "clarity",
    "confidence",
    "skills",
    "learningGaps",
    "roadmap",
    "jobRoles",
    "resources",
    "insights",
];

/// Named collections layered on top of the fixed state core.
///
/// The six known collections are typed; anything else lives in `custom`
/// and round-trips through JSON untouched. An absent entry means "not
/// set", which matters when this is part of a [`StateUpdate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillRating>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_gaps: Option<Vec<LearningGap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<Milestone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_roles: Option<Vec<JobRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<String>>,
    #[serde(flatten)]
    pub custom: BTreeMap<String, Value>,
}

impl StateExtensions {
    /// Every known collection present and empty.
    pub fn empty_collections() -> Self {
        Self {
            skills: Some(Vec::new()),
            learning_gaps: Some(Vec::new()),
            roadmap: Some(Vec::new()),
            job_roles: Some(Vec::new()),
            resources: Some(Vec::new()),
            insights: Some(Vec::new()),
            custom: BTreeMap::new(),
        }
    }

    /// True when no key is set.
    pub fn is_empty(&self) -> bool {
        self.skills.is_none()
            && self.learning_gaps.is_none()
            && self.roadmap.is_none()
            && self.job_roles.is_none()
            && self.resources.is_none()
            && self.insights.is_none()
            && self.custom.is_empty()
    }

    /// Key-wise overlay: keys set in `update` win, the rest are kept.
    pub(crate) fn overlaid_with(&self, update: &StateExtensions) -> StateExtensions {
        let mut custom = self.custom.clone();
        custom.extend(update.custom.iter().map(|(k, v)| (k.clone(), v.clone())));

        StateExtensions {
            skills: update.skills.clone().or_else(|| self.skills.clone()),
            learning_gaps: update
                .learning_gaps
                .clone()
                .or_else(|| self.learning_gaps.clone()),
            roadmap: update.roadmap.clone().or_else(|| self.roadmap.clone()),
            job_roles: update.job_roles.clone().or_else(|| self.job_roles.clone()),
            resources: update.resources.clone().or_else(|| self.resources.clone()),
            insights: update.insights.clone().or_else(|| self.insights.clone()),
            custom,
        }
    }
}

/// Session-long guidance state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceState {
    pub career_goal: CareerGoal,
    /// Components rendered by the latest turn, latest-rendered last.
    pub active_components: Vec<ComponentName>,
    pub clarity: Percentage,
    pub confidence: Percentage,
    #[serde(flatten)]
    pub extensions: StateExtensions,
}

impl GuidanceState {
    /// The canonical reset state.
    pub fn empty() -> Self {
        Self {
            career_goal: CareerGoal::default(),
            active_components: Vec::new(),
            clarity: Percentage::ZERO,
            confidence: Percentage::ZERO,
            extensions: StateExtensions::empty_collections(),
        }
    }

    /// Looks up a custom extension value by key.
    pub fn custom(&self, key: &str) -> Option<&Value> {
        self.extensions.custom.get(key)
    }
}

impl Default for GuidanceState {
    fn default() -> Self {
        Self::empty()
    }
}

/// A partial [`GuidanceState`]: present fields replace, absent fields keep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goal: Option<CareerGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_components: Option<Vec<ComponentName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<Percentage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Percentage>,
    #[serde(flatten)]
    pub extensions: StateExtensions,
}

impl StateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_career_goal(mut self, goal: CareerGoal) -> Self {
        self.career_goal = Some(goal);
        self
    }

    pub fn with_active_components<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentName>,
    {
        self.active_components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_clarity(mut self, clarity: Percentage) -> Self {
        self.clarity = Some(clarity);
        self
    }

    pub fn with_confidence(mut self, confidence: Percentage) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillRating>) -> Self {
        self.extensions.skills = Some(skills);
        self
    }

    pub fn with_learning_gaps(mut self, gaps: Vec<LearningGap>) -> Self {
        self.extensions.learning_gaps = Some(gaps);
        self
    }

    pub fn with_roadmap(mut self, milestones: Vec<Milestone>) -> Self {
        self.extensions.roadmap = Some(milestones);
        self
    }

    pub fn with_job_roles(mut self, roles: Vec<JobRole>) -> Self {
        self.extensions.job_roles = Some(roles);
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.extensions.resources = Some(resources);
        self
    }

    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.extensions.insights = Some(insights);
        self
    }

    /// Sets an extension key the engine has no typed slot for.
    ///
    /// Fails for any name in [`RESERVED_STATE_KEYS`].
    pub fn with_custom(
        mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Self, ValidationError> {
        let key = key.into();
        if RESERVED_STATE_KEYS.contains(&key.as_str()) {
            return Err(ValidationError::invalid_format(
                key,
                "name is reserved for a built-in state field",
            ));
        }
        self.extensions.custom.insert(key, value);
        Ok(self)
    }

    /// True for the `{}` update.
    pub fn is_empty(&self) -> bool {
        self.career_goal.is_none()
            && self.active_components.is_none()
            && self.clarity.is_none()
            && self.confidence.is_none()
            && self.extensions.is_empty()
    }
}
