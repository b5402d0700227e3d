//! Standard career patterns.
//!
//! Scores, role lists and resources are fixed per pattern; only the goal
//! text echoes the user's input.

use crate::domain::foundation::Percentage;
use crate::domain::guidance::{
    intents, CareerGoal, ComponentPayload, Intent, JobRole, LearningGap, Milestone, PayloadError,
    Position, Relevance, Resource, ResourceKind, ResponseEnvelope, SkillLevel, SkillRating,
    StateUpdate,
};

use super::entry::CatalogEntry;

pub const SOFTWARE_ENGINEERING: &str = "software_engineering";
pub const PRODUCT_MANAGEMENT: &str = "product_management";

/// The standard entries, in registration order.
pub fn standard_entries() -> Vec<CatalogEntry> {
    vec![software_engineering(), product_management()]
}

pub fn software_engineering() -> CatalogEntry {
    CatalogEntry::new(
        SOFTWARE_ENGINEERING,
        ["software engineer", "developer", "coding"],
        software_engineering_envelope,
    )
}

pub fn product_management() -> CatalogEntry {
    CatalogEntry::new(
        PRODUCT_MANAGEMENT,
        ["product manager", "pm", "product"],
        product_management_envelope,
    )
}

fn software_engineering_envelope(input: &str) -> Result<ResponseEnvelope, PayloadError> {
    let goal = CareerGoal::new(input, "2-3 years", "high");
    let clarity = Percentage::new(75);
    let confidence = Percentage::new(62);

    let skills = vec![
        SkillRating::new("JavaScript/TypeScript", SkillLevel::Intermediate, 65),
        SkillRating::new("React", SkillLevel::Intermediate, 60),
        SkillRating::new("System Design", SkillLevel::Beginner, 35),
        SkillRating::new("DevOps", SkillLevel::Beginner, 25),
    ];
    let gaps = vec![
        LearningGap::new("Advanced Algorithms", 35, 85),
        LearningGap::new("System Design", 35, 80),
        LearningGap::new("Database Design", 45, 75),
    ];
    let milestones = vec![
        Milestone::upcoming(
            "Master Core Fundamentals",
            "Deepen knowledge in data structures and algorithms",
            "Months 1-3",
        ),
        Milestone::upcoming(
            "Build Medium-Scale Projects",
            "Create full-stack applications with complexity",
            "Months 4-9",
        ),
        Milestone::upcoming(
            "System Design Focus",
            "Learn distributed systems and architecture",
            "Months 10-18",
        ),
        Milestone::upcoming(
            "Apply for Senior Roles",
            "Target senior engineer positions",
            "Month 24+",
        ),
    ];
    let roles = vec![
        JobRole::new(
            "Senior Full-Stack Engineer",
            72,
            "Lead development of core platform features",
            &["React", "Node.js", "PostgreSQL", "AWS"],
        ),
        JobRole::new(
            "Solutions Architect",
            58,
            "Design scalable system solutions",
            &["System Design", "Cloud Architecture"],
        ),
        JobRole::new(
            "Backend Engineer",
            85,
            "Build robust server-side systems",
            &["JavaScript", "System Design", "Databases"],
        ),
    ];
    let resources = vec![
        Resource::new(
            "The System Design Interview",
            ResourceKind::Book,
            "Alex Xu",
            "Master system design concepts for interviews",
            "40 hours",
            Relevance::High,
        ),
        Resource::new(
            "LeetCode Premium",
            ResourceKind::Tool,
            "LeetCode",
            "Practice coding problems and mock interviews",
            "Ongoing",
            Relevance::High,
        ),
        Resource::new(
            "Designing Data-Intensive Applications",
            ResourceKind::Book,
            "Martin Kleppmann",
            "Deep dive into distributed systems design",
            "60 hours",
            Relevance::High,
        ),
        Resource::new(
            "Advanced React Patterns",
            ResourceKind::Course,
            "Epic React",
            "Master advanced React patterns and hooks",
            "20 hours",
            Relevance::Medium,
        ),
    ];
    let insights = to_strings(&[
        "You have strong fundamentals in modern web development",
        "Focus on system design and architecture patterns",
        "Consider contributing to open source projects",
    ]);

    let layout = [
        (ComponentPayload::CareerGoalCard(goal.clone()), Position::Top),
        (
            ComponentPayload::SkillAssessmentPanel {
                skills: skills.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::LearningGapVisualizer { gaps: gaps.clone() },
            Position::Bottom,
        ),
        (
            ComponentPayload::RoadmapTimeline {
                milestones: milestones.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::JobFitExplorer {
                roles: roles.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::ResourceRecommendations {
                resources: resources.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::ConfidenceMeter {
                clarity,
                confidence,
                insights: insights.clone(),
            },
            Position::Bottom,
        ),
    ];

    let state = StateUpdate::new()
        .with_career_goal(goal)
        .with_clarity(clarity)
        .with_confidence(confidence)
        .with_skills(skills)
        .with_learning_gaps(gaps)
        .with_roadmap(milestones)
        .with_job_roles(roles)
        .with_resources(resources)
        .with_insights(insights);

    compose(intents::SET_CAREER_GOAL, &layout, state)
}

fn product_management_envelope(input: &str) -> Result<ResponseEnvelope, PayloadError> {
    let goal = CareerGoal::new(input, "18-24 months", "high");
    let clarity = Percentage::new(82);
    let confidence = Percentage::new(75);

    let skills = vec![
        SkillRating::new("Product Strategy", SkillLevel::Intermediate, 70),
        SkillRating::new("User Research", SkillLevel::Advanced, 80),
        SkillRating::new("Analytics", SkillLevel::Intermediate, 65),
        SkillRating::new("Stakeholder Management", SkillLevel::Intermediate, 75),
    ];
    let gaps = vec![
        LearningGap::new("Data Analysis & Metrics", 65, 90),
        LearningGap::new("Technical Fundamentals", 55, 80),
        LearningGap::new("Business Strategy", 70, 85),
    ];
    let roles = vec![
        JobRole::new(
            "Senior Product Manager",
            80,
            "Own product roadmap and strategy",
            &["Product Strategy", "User Research", "Storytelling"],
        ),
        JobRole::new(
            "Product Lead",
            88,
            "Lead cross-functional product teams",
            &["Leadership", "Communication", "Strategy"],
        ),
    ];
    let resources = vec![
        Resource::new(
            "Inspired: How to Create Products Customers Love",
            ResourceKind::Book,
            "Marty Cagan",
            "Essential PM mindset and methodology",
            "15 hours",
            Relevance::High,
        ),
        Resource::new(
            "Product Management by Practice",
            ResourceKind::Course,
            "Maven Analytics",
            "Learn data-driven product decisions",
            "25 hours",
            Relevance::High,
        ),
    ];
    let insights = to_strings(&[
        "You have strong product intuition and user empathy",
        "Develop deeper technical understanding for credibility",
        "Build a track record with metrics and data",
    ]);

    let layout = [
        (ComponentPayload::CareerGoalCard(goal.clone()), Position::Top),
        (
            ComponentPayload::SkillAssessmentPanel {
                skills: skills.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::LearningGapVisualizer { gaps: gaps.clone() },
            Position::Bottom,
        ),
        (
            ComponentPayload::JobFitExplorer {
                roles: roles.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::ResourceRecommendations {
                resources: resources.clone(),
            },
            Position::Bottom,
        ),
        (
            ComponentPayload::ConfidenceMeter {
                clarity,
                confidence,
                insights: insights.clone(),
            },
            Position::Bottom,
        ),
    ];

    let state = StateUpdate::new()
        .with_career_goal(goal)
        .with_clarity(clarity)
        .with_confidence(confidence)
        .with_skills(skills)
        .with_learning_gaps(gaps)
        .with_roadmap(Vec::new())
        .with_job_roles(roles)
        .with_resources(resources)
        .with_insights(insights);

    compose(intents::SET_CAREER_GOAL, &layout, state)
}

/// Envelope returned when no entry matches.
pub fn generic_guidance(input: &str) -> Result<ResponseEnvelope, PayloadError> {
    let goal = CareerGoal::new(input, "To be determined", "medium");
    let clarity = Percentage::new(45);
    let confidence = Percentage::new(40);
    let insights = to_strings(&[
        "Tell us more about your target role",
        "Share your current skills and experience",
        "Describe any specific challenges you face",
    ]);

    let layout = [
        (ComponentPayload::CareerGoalCard(goal.clone()), Position::Top),
        (
            ComponentPayload::ConfidenceMeter {
                clarity,
                confidence,
                insights: insights.clone(),
            },
            Position::Bottom,
        ),
    ];

    let state = StateUpdate::new()
        .with_career_goal(goal)
        .with_clarity(clarity)
        .with_confidence(confidence)
        .with_skills(Vec::new())
        .with_learning_gaps(Vec::new())
        .with_roadmap(Vec::new())
        .with_job_roles(Vec::new())
        .with_resources(Vec::new())
        .with_insights(insights);

    compose(intents::GENERIC_CAREER_GUIDANCE, &layout, state)
}

/// Renders the layout in order and records it as the active components.
///
/// Every pattern sets all known collections, empty when not rendered, so a
/// turn never inherits data from an earlier career.
fn compose(
    intent: &str,
    layout: &[(ComponentPayload, Position)],
    state: StateUpdate,
) -> Result<ResponseEnvelope, PayloadError> {
    let actions = layout
        .iter()
        .map(|(payload, position)| payload.render_at(*position))
        .collect::<Result<Vec<_>, _>>()?;
    let state = state.with_active_components(actions.iter().map(|a| a.component.clone()));

    Ok(ResponseEnvelope::new(Intent::new(intent), actions, state))
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
