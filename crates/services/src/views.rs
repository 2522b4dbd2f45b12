//! Read-only shapes handed to callers. All serialize in camelCase.

use serde::Serialize;

use cfa_core::content::ExplanationEntry;
use cfa_core::model::{Level, StudyProfile, Topic};

/// Round to two decimal places for display.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// Headline numbers for the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub current_level: Level,
    pub target_exam_date: Option<String>,
    pub study_hours: f64,
    pub streak: u32,
    pub completed_levels: Vec<Level>,
    pub tutor_mode: bool,
    /// Percentage correct, rounded to two decimals.
    pub overall_performance: f64,
}

impl From<&StudyProfile> for ProfileSummary {
    fn from(profile: &StudyProfile) -> Self {
        Self {
            current_level: profile.current_level(),
            target_exam_date: profile.target_exam_date().map(str::to_owned),
            study_hours: profile.study_hours(),
            streak: profile.streak(),
            completed_levels: profile.completed_levels(),
            tutor_mode: profile.tutor_mode(),
            overall_performance: round2(profile.overall_performance()),
        }
    }
}

/// Hours logged on one topic at the current level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgressView {
    pub topic: Topic,
    pub progress: f64,
    pub completed: bool,
}

/// One row of the study plan, weakest topics first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanItem {
    pub topic: Topic,
    pub progress: f64,
}

//
// ─── PRACTICE ──────────────────────────────────────────────────────────────────
//

/// Result of grading one practice answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeOutcome {
    pub correct: bool,
    pub correct_answer: String,
    /// Overall percentage correct after this answer, unrounded.
    pub performance: f64,
}

//
// ─── TUTOR ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorPlan {
    pub level: Level,
    pub weeks: u32,
    pub topics: Vec<StudyPlanItem>,
    pub daily_hours: u32,
    pub focus_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorExplanation {
    pub title: String,
    pub explanation: String,
    pub real_world_example: String,
    pub key_points: Vec<String>,
}

impl From<&ExplanationEntry> for TutorExplanation {
    fn from(entry: &ExplanationEntry) -> Self {
        Self {
            title: entry.title.to_owned(),
            explanation: entry.explanation.to_owned(),
            real_world_example: entry.real_world_example.to_owned(),
            key_points: entry.key_points.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfa_core::time::fixed_now;

    #[test]
    fn round2_keeps_two_decimals() {
        assert!((round2(66.666_666) - 66.67).abs() < f64::EPSILON);
        assert!((round2(50.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_of_fresh_profile() {
        let summary = ProfileSummary::from(&StudyProfile::new(fixed_now()));
        assert_eq!(summary.current_level, Level::One);
        assert!(summary.completed_levels.is_empty());
        assert!(summary.overall_performance.abs() < f64::EPSILON);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = ProfileSummary::from(&StudyProfile::new(fixed_now()));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["currentLevel"], serde_json::json!(1));
        assert_eq!(json["targetExamDate"], serde_json::Value::Null);
        assert_eq!(json["tutorMode"], serde_json::json!(false));
    }

    #[test]
    fn plan_item_serializes_topic_name() {
        let item = StudyPlanItem {
            topic: Topic::FinancialReportingAndAnalysis,
            progress: 1.5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json["topic"],
            serde_json::json!("Financial Reporting and Analysis")
        );
    }
}
