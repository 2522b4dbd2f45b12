use std::fs;
use std::sync::Arc;

use cfa_core::model::{Level, Topic};
use cfa_core::time::{fixed_clock, utc_offset};
use chrono::{FixedOffset, TimeZone, Utc};
use services::{Clock, StudyProfileTracker, TrackerError, TrackerOptions};
use storage::JsonFileRepository;
use tempfile::TempDir;

fn options() -> TrackerOptions {
    TrackerOptions::default()
        .with_clock(fixed_clock())
        .with_utc_offset(utc_offset())
        .with_seed(2024)
}

fn open(dir: &TempDir) -> StudyProfileTracker {
    let repo = JsonFileRepository::new(dir.path().join("cfa-data.json"));
    StudyProfileTracker::open_with(Arc::new(repo), options()).unwrap()
}

#[test]
fn first_session_scenario() {
    let dir = TempDir::new().unwrap();
    let mut tracker = open(&dir);
    tracker.log_study_session(2.5, "Ethics", 5, 4).unwrap();

    let reopened = open(&dir);
    let summary = reopened.profile_summary();
    assert!((summary.study_hours - 2.5).abs() < f64::EPSILON);
    assert_eq!(summary.streak, 1);
    assert!((summary.overall_performance - 80.0).abs() < f64::EPSILON);

    let ethics = reopened.profile().topic(Topic::Ethics);
    assert!((ethics.hours(Level::One) - 2.5).abs() < f64::EPSILON);
    assert!(!ethics.completed());
}

#[test]
fn topic_completes_at_ten_hours_and_leaves_the_plan() {
    let dir = TempDir::new().unwrap();
    let mut tracker = open(&dir);
    tracker.log_study_session(9.99, "Ethics", 0, 0).unwrap();
    assert!(!tracker.profile().topic(Topic::Ethics).completed());

    tracker.log_study_session(5.01, "Ethics", 0, 0).unwrap();
    assert!(tracker.profile().topic(Topic::Ethics).completed());
    assert!(tracker.study_plan().iter().all(|i| i.topic != Topic::Ethics));

    // Completion survives a level change that resets visible progress.
    tracker.set_level(2).unwrap();
    let reopened = open(&dir);
    assert!(reopened.profile().topic(Topic::Ethics).completed());
    assert_eq!(reopened.topic_progress()[0].progress, 0.0);
}

#[test]
fn practice_answers_update_performance() {
    let dir = TempDir::new().unwrap();
    let mut tracker = open(&dir);

    let right = tracker.record_practice_session("Ethics", 1, "B", "B", 60).unwrap();
    assert!(right.correct);
    assert!((right.performance - 100.0).abs() < f64::EPSILON);

    let wrong = tracker.record_practice_session("Ethics", 1, "A", "B", 60).unwrap();
    assert!(!wrong.correct);
    assert!((wrong.performance - 50.0).abs() < f64::EPSILON);

    let reopened = open(&dir);
    assert_eq!(reopened.profile().total_questions_answered(), 2);
    assert_eq!(reopened.profile().correct_answers(), 1);
    assert!((reopened.profile_summary().overall_performance - 50.0).abs() < f64::EPSILON);
}

#[test]
fn completing_a_level_twice_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut tracker = open(&dir);
    tracker.complete_level(1).unwrap();

    let mut reopened = open(&dir);
    assert_eq!(reopened.profile().current_level(), Level::Two);
    let err = reopened.complete_level(1).unwrap_err();
    assert!(matches!(err, TrackerError::LevelAlreadyCompleted(Level::One)));
    assert_eq!(reopened.profile().completed_levels(), vec![Level::One]);
}

#[test]
fn quiz_then_answer_across_processes_grades_the_same_question() {
    let dir = TempDir::new().unwrap();
    let shown = open(&dir).question_at("Economics", 1, 3).unwrap();

    let mut later = open(&dir);
    let graded = later.question_at("economics", 1, 3).unwrap();
    assert_eq!(shown, graded);

    let letter = graded.answer.to_string();
    let outcome = later
        .record_practice_session("Economics", 1, &letter, &letter, 60)
        .unwrap();
    assert!(outcome.correct);
}

#[test]
fn corrupt_file_is_moved_aside_and_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfa-data.json");
    fs::write(&path, "{\"studyHours\": \"lots\"").unwrap();

    let tracker = open(&dir);
    assert_eq!(tracker.profile().study_hours(), 0.0);

    let quarantined = dir.path().join("cfa-data.json.corrupt");
    assert_eq!(fs::read_to_string(quarantined).unwrap(), "{\"studyHours\": \"lots\"");
    let fresh: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(fresh["currentLevel"], serde_json::json!(1));
}

#[test]
fn tutor_plan_targets_weakest_topics() {
    let dir = TempDir::new().unwrap();
    let mut tracker = open(&dir);
    for topic in Topic::ALL.iter().take(6) {
        tracker.log_study_session(1.0, topic.name(), 0, 0).unwrap();
    }

    let plan = tracker.tutor_plan();
    assert_eq!(plan.level, Level::One);
    let topics: Vec<Topic> = plan.topics.iter().map(|item| item.topic).collect();
    assert_eq!(
        topics,
        vec![
            Topic::FixedIncome,
            Topic::Derivatives,
            Topic::AlternativeInvestments,
            Topic::PortfolioManagement,
        ]
    );
    assert_eq!(plan.weeks, 4);
    assert_eq!(plan.daily_hours, 2);
}

#[test]
fn legacy_local_timestamps_continue_the_streak() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfa-data.json");
    fs::write(
        &path,
        r#"{"currentLevel": 1, "lastStudyDate": "2023-11-14T23:30:00.000000", "streak": 3}"#,
    )
    .unwrap();

    let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
    let next_local_morning = plus_eight
        .with_ymd_and_hms(2023, 11, 15, 10, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let options = TrackerOptions::default()
        .with_clock(Clock::fixed(next_local_morning))
        .with_utc_offset(plus_eight);
    let mut tracker =
        StudyProfileTracker::open_with(Arc::new(JsonFileRepository::new(&path)), options).unwrap();

    tracker.log_study_session(1.0, "Ethics", 0, 0).unwrap();
    assert_eq!(tracker.profile().streak(), 4);
}
