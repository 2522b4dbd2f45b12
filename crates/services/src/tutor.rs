//! Tutor-mode plans and topic explanations.

use cfa_core::content::explanation_for;
use cfa_core::model::{Level, Topic};

use crate::views::{StudyPlanItem, TutorExplanation, TutorPlan};

pub const TUTOR_PLAN_WEEKS: u32 = 4;
pub const TUTOR_DAILY_HOURS: u32 = 2;

/// How many of the weakest topics a tutor plan covers at `level`.
#[must_use]
pub fn plan_topic_count(level: Level) -> usize {
    match level {
        Level::One => 4,
        Level::Two | Level::Three => 6,
    }
}

/// Build a tutor plan from a study plan already sorted weakest first.
#[must_use]
pub fn build_plan(level: Level, mut ranked: Vec<StudyPlanItem>) -> TutorPlan {
    ranked.truncate(plan_topic_count(level));
    TutorPlan {
        level,
        weeks: TUTOR_PLAN_WEEKS,
        topics: ranked,
        daily_hours: TUTOR_DAILY_HOURS,
        focus_strategy: level.focus_strategy().to_owned(),
    }
}

/// Curated explanation for `topic` at `level`, or a generic one.
///
/// `topic` is matched case-insensitively; the generic text echoes it as given.
#[must_use]
pub fn explain(topic: &str, level: Level) -> TutorExplanation {
    match Topic::from_name(topic).and_then(|t| explanation_for(t, level)) {
        Some(entry) => TutorExplanation::from(entry),
        None => generic_explanation(topic, level),
    }
}

fn generic_explanation(topic: &str, level: Level) -> TutorExplanation {
    let lower = topic.to_lowercase();
    TutorExplanation {
        title: format!("{topic} (Level {level})"),
        explanation: format!(
            "This topic covers fundamental concepts in {lower} at CFA Level {level}. \
             Focus on understanding core principles, key formulas, and their applications \
             in investment analysis."
        ),
        real_world_example: format!(
            "In practice, {lower} concepts are applied when making investment decisions, \
             conducting analysis, or managing portfolios."
        ),
        key_points: [
            "Review the fundamental concepts thoroughly",
            "Practice applying concepts to scenarios",
            "Understand the practical applications",
        ]
        .map(str::to_owned)
        .to_vec(),
    }
}
