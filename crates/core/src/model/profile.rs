use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

use crate::model::{Level, Topic};
use crate::streak::next_streak;

/// Hours at a single level after which a topic counts as completed.
pub const COMPLETION_THRESHOLD_HOURS: f64 = 10.0;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("study hours must be a finite, non-negative number (got {0})")]
    InvalidHours(f64),

    #[error("correct answers ({correct}) exceed questions answered ({answered})")]
    CorrectExceedsAnswered { correct: u32, answered: u32 },

    #[error("level {0} is already completed")]
    LevelAlreadyCompleted(Level),

    #[error("not an ISO-8601 date: {0:?}")]
    InvalidTargetDate(String),

    #[error("inconsistent persisted profile: {0}")]
    Inconsistent(String),
}

//
// ─── TOPIC RECORDS ─────────────────────────────────────────────────────────────
//

/// Hours logged against one topic, split by the level the profile was at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicProgress {
    #[serde(default)]
    level1: f64,
    #[serde(default)]
    level2: f64,
    #[serde(default)]
    level3: f64,
    #[serde(default)]
    completed: bool,
}

impl TopicProgress {
    #[must_use]
    pub fn hours(&self, level: Level) -> f64 {
        match level {
            Level::One => self.level1,
            Level::Two => self.level2,
            Level::Three => self.level3,
        }
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Adds hours at `level` and flips `completed` once that level reaches
    /// the threshold. Completion never reverts.
    fn add_hours(&mut self, level: Level, hours: f64) {
        let slot = match level {
            Level::One => &mut self.level1,
            Level::Two => &mut self.level2,
            Level::Three => &mut self.level3,
        };
        *slot += hours;
        if *slot >= COMPLETION_THRESHOLD_HOURS {
            self.completed = true;
        }
    }

    /// Resets negative level hours to zero. Returns whether anything changed.
    fn clamp_negative_hours(&mut self) -> bool {
        let mut changed = false;
        for slot in [&mut self.level1, &mut self.level2, &mut self.level3] {
            if *slot < 0.0 {
                *slot = 0.0;
                changed = true;
            }
        }
        changed
    }

    fn is_valid(&self) -> bool {
        [self.level1, self.level2, self.level3]
            .iter()
            .all(|h| h.is_finite() && *h >= 0.0)
    }
}

/// Practice statistics for one topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPerformance {
    #[serde(default)]
    attempts: u32,
    #[serde(default)]
    correct: u32,
    #[serde(default)]
    time_spent: u64,
}

impl TopicPerformance {
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Total seconds spent answering.
    #[must_use]
    pub fn time_spent(&self) -> u64 {
        self.time_spent
    }
}

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// One block of study to be applied to a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudySession {
    pub hours: f64,
    /// `None` when the caller named a topic outside the curriculum.
    pub topic: Option<Topic>,
    pub questions_answered: u32,
    pub correct_answers: u32,
}

impl StudySession {
    #[must_use]
    pub fn new(hours: f64, topic: Option<Topic>) -> Self {
        Self {
            hours,
            topic,
            questions_answered: 0,
            correct_answers: 0,
        }
    }

    #[must_use]
    pub fn with_questions(mut self, answered: u32, correct: u32) -> Self {
        self.questions_answered = answered;
        self.correct_answers = correct;
        self
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(ProfileError::InvalidHours(self.hours));
        }
        if self.correct_answers > self.questions_answered {
            return Err(ProfileError::CorrectExceedsAnswered {
                correct: self.correct_answers,
                answered: self.questions_answered,
            });
        }
        Ok(())
    }
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// The persisted study profile. One per store.
///
/// Field names serialize in camelCase and every field defaults when absent,
/// so profiles written by older tooling still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProfile {
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    current_level: Level,
    #[serde(default)]
    start_date: Option<RecordedAt>,
    #[serde(default)]
    target_exam_date: Option<String>,
    #[serde(default)]
    study_hours: f64,
    #[serde(default = "default_topics", deserialize_with = "deserialize_topics")]
    topics: BTreeMap<Topic, TopicProgress>,
    #[serde(default)]
    completed_levels: BTreeSet<Level>,
    #[serde(default)]
    last_study_date: Option<RecordedAt>,
    #[serde(default)]
    streak: u32,
    #[serde(default)]
    total_questions_answered: u32,
    #[serde(default)]
    correct_answers: u32,
    #[serde(default)]
    performance_by_topic: BTreeMap<String, TopicPerformance>,
    #[serde(default)]
    tutor_mode: bool,
}

impl StudyProfile {
    /// Fresh profile: level 1, every topic at zero, nothing completed.
    #[must_use]
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: Some(created_at.timestamp()),
            current_level: Level::One,
            start_date: Some(RecordedAt::Utc(created_at)),
            target_exam_date: None,
            study_hours: 0.0,
            topics: default_topics(),
            completed_levels: BTreeSet::new(),
            last_study_date: None,
            streak: 0,
            total_questions_answered: 0,
            correct_answers: 0,
            performance_by_topic: BTreeMap::new(),
            tutor_mode: false,
        }
    }

    /// Pull counters written by older tooling back inside the record's
    /// invariants, keeping everything else.
    ///
    /// Over-counted correct answers are clamped to the answered totals and
    /// negative hours are reset to zero. Returns one note per change.
    pub fn repair(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        if self.correct_answers > self.total_questions_answered {
            notes.push(format!(
                "correctAnswers {} clamped to totalQuestionsAnswered {}",
                self.correct_answers, self.total_questions_answered
            ));
            self.correct_answers = self.total_questions_answered;
        }
        for (topic, perf) in &mut self.performance_by_topic {
            if perf.correct > perf.attempts {
                notes.push(format!(
                    "performanceByTopic[{topic}].correct {} clamped to attempts {}",
                    perf.correct, perf.attempts
                ));
                perf.correct = perf.attempts;
            }
        }
        if self.study_hours < 0.0 {
            notes.push(format!("studyHours {} reset to 0", self.study_hours));
            self.study_hours = 0.0;
        }
        for (topic, progress) in &mut self.topics {
            if progress.clamp_negative_hours() {
                notes.push(format!("negative hours for {topic} reset to 0"));
            }
        }
        notes
    }

    /// Check the invariants a freshly deserialized profile must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Inconsistent` naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.study_hours.is_finite() || self.study_hours < 0.0 {
            return Err(ProfileError::Inconsistent(format!(
                "studyHours is {}",
                self.study_hours
            )));
        }
        if self.correct_answers > self.total_questions_answered {
            return Err(ProfileError::Inconsistent(format!(
                "correctAnswers {} > totalQuestionsAnswered {}",
                self.correct_answers, self.total_questions_answered
            )));
        }
        if let Some((topic, _)) = self.topics.iter().find(|(_, p)| !p.is_valid()) {
            return Err(ProfileError::Inconsistent(format!(
                "negative or non-finite hours for {topic}"
            )));
        }
        if let Some((topic, _)) = self
            .performance_by_topic
            .iter()
            .find(|(_, p)| p.correct > p.attempts)
        {
            return Err(ProfileError::Inconsistent(format!(
                "performanceByTopic[{topic}] has more correct answers than attempts"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    #[must_use]
    pub fn current_level(&self) -> Level {
        self.current_level
    }

    #[must_use]
    pub fn start_date(&self) -> Option<RecordedAt> {
        self.start_date
    }

    #[must_use]
    pub fn target_exam_date(&self) -> Option<&str> {
        self.target_exam_date.as_deref()
    }

    #[must_use]
    pub fn study_hours(&self) -> f64 {
        self.study_hours
    }

    /// Every known topic in enumeration order.
    pub fn topics(&self) -> impl Iterator<Item = (Topic, &TopicProgress)> {
        self.topics.iter().map(|(topic, progress)| (*topic, progress))
    }

    #[must_use]
    pub fn topic(&self, topic: Topic) -> TopicProgress {
        self.topics.get(&topic).copied().unwrap_or_default()
    }

    /// Completed levels, ascending.
    #[must_use]
    pub fn completed_levels(&self) -> Vec<Level> {
        self.completed_levels.iter().copied().collect()
    }

    #[must_use]
    pub fn last_study_date(&self) -> Option<RecordedAt> {
        self.last_study_date
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn total_questions_answered(&self) -> u32 {
        self.total_questions_answered
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn performance_by_topic(&self) -> &BTreeMap<String, TopicPerformance> {
        &self.performance_by_topic
    }

    #[must_use]
    pub fn tutor_mode(&self) -> bool {
        self.tutor_mode
    }

    /// Percentage of questions answered correctly; `0.0` before any answer.
    #[must_use]
    pub fn overall_performance(&self) -> f64 {
        if self.total_questions_answered == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_questions_answered) * 100.0
    }

    pub fn set_current_level(&mut self, level: Level) {
        self.current_level = level;
    }

    /// Store a target exam date after checking it parses as an ISO-8601 date.
    ///
    /// The raw string is kept as given.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidTargetDate` if `raw` does not parse.
    pub fn set_target_exam_date(&mut self, raw: &str) -> Result<(), ProfileError> {
        if parse_exam_date(raw).is_none() {
            return Err(ProfileError::InvalidTargetDate(raw.to_owned()));
        }
        self.target_exam_date = Some(raw.to_owned());
        Ok(())
    }

    pub fn set_tutor_mode(&mut self, enabled: bool) {
        self.tutor_mode = enabled;
    }

    /// Apply a study session: hours, topic progress, streak, question totals.
    ///
    /// `offset` decides where calendar days begin for the streak comparison.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidHours` or `ProfileError::CorrectExceedsAnswered`
    /// without touching the profile.
    pub fn log_study_session(
        &mut self,
        session: &StudySession,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Result<(), ProfileError> {
        session.validate()?;

        self.study_hours += session.hours;

        if let Some(topic) = session.topic {
            self.topics
                .entry(topic)
                .or_default()
                .add_hours(self.current_level, session.hours);
        }

        let last = self.last_study_date.map(|at| at.resolve(offset));
        self.streak = next_streak(self.streak, last, now, offset);
        self.last_study_date = Some(RecordedAt::Utc(now));

        self.total_questions_answered = self
            .total_questions_answered
            .saturating_add(session.questions_answered);
        self.correct_answers = self
            .correct_answers
            .saturating_add(session.correct_answers)
            .min(self.total_questions_answered);
        Ok(())
    }

    /// Mark `level` completed and advance to the next level when there is one.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::LevelAlreadyCompleted` if `level` was completed before.
    pub fn complete_level(&mut self, level: Level) -> Result<(), ProfileError> {
        if self.completed_levels.contains(&level) {
            return Err(ProfileError::LevelAlreadyCompleted(level));
        }
        self.completed_levels.insert(level);
        if let Some(next) = level.next() {
            self.current_level = next;
        }
        Ok(())
    }

    /// Count one answered practice question against the totals and `topic_key`.
    pub fn record_answer(&mut self, topic_key: &str, correct: bool, seconds: u64) {
        self.total_questions_answered = self.total_questions_answered.saturating_add(1);
        if correct {
            self.correct_answers = self.correct_answers.saturating_add(1);
        }

        let perf = self
            .performance_by_topic
            .entry(topic_key.to_owned())
            .or_default();
        perf.attempts = perf.attempts.saturating_add(1);
        if correct {
            perf.correct = perf.correct.saturating_add(1);
        }
        perf.time_spent = perf.time_spent.saturating_add(seconds);
    }
}

fn default_topics() -> BTreeMap<Topic, TopicProgress> {
    Topic::ALL
        .into_iter()
        .map(|topic| (topic, TopicProgress::default()))
        .collect()
}

/// Reads the topic map by name, keeping every known topic present.
///
/// Keys that are not curriculum topics are dropped.
fn deserialize_topics<'de, D>(deserializer: D) -> Result<BTreeMap<Topic, TopicProgress>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, TopicProgress> = BTreeMap::deserialize(deserializer)?;
    let mut topics = default_topics();
    for (name, progress) in raw {
        if let Some(topic) = Topic::from_name(&name) {
            topics.insert(topic, progress);
        }
    }
    Ok(topics)
}

/// Parses an exam date given as `YYYY-MM-DD`, a naive ISO date-time, or RFC 3339.
#[must_use]
pub fn parse_exam_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

//
// ─── TIMESTAMPS ────────────────────────────────────────────────────────────────
//

const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A stored point in time.
///
/// Files written by older tooling hold local wall-clock times with no
/// offset. Those stay `Local` until an offset is supplied by `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedAt {
    Utc(DateTime<Utc>),
    Local(NaiveDateTime),
}

impl RecordedAt {
    /// The instant this records, reading wall-clock values in `offset`.
    #[must_use]
    pub fn resolve(self, offset: FixedOffset) -> DateTime<Utc> {
        match self {
            RecordedAt::Utc(at) => at,
            RecordedAt::Local(naive) => offset
                .from_local_datetime(&naive)
                .single()
                .map_or_else(|| naive.and_utc(), |at| at.with_timezone(&Utc)),
        }
    }
}

impl From<DateTime<Utc>> for RecordedAt {
    fn from(at: DateTime<Utc>) -> Self {
        RecordedAt::Utc(at)
    }
}

impl fmt::Display for RecordedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedAt::Utc(at) => f.write_str(&at.to_rfc3339_opts(SecondsFormat::Micros, true)),
            RecordedAt::Local(naive) => write!(f, "{}", naive.format(LOCAL_TIMESTAMP_FORMAT)),
        }
    }
}

impl Serialize for RecordedAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses a stored timestamp: RFC 3339, or a naive ISO date-time kept as
/// local wall-clock time.
///
/// # Errors
///
/// Returns the chrono parse error when neither form matches.
pub fn parse_timestamp(raw: &str) -> Result<RecordedAt, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => Ok(RecordedAt::Utc(datetime.with_timezone(&Utc))),
        Err(_) => raw.parse::<NaiveDateTime>().map(RecordedAt::Local),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn new_profile_has_every_topic_at_zero() {
        let profile = StudyProfile::new(fixed_now());
        assert_eq!(profile.current_level(), Level::One);
        assert_eq!(profile.topics().count(), Topic::ALL.len());
        assert!(profile.topics().all(|(_, p)| p.hours(Level::One) == 0.0 && !p.completed()));
        assert_eq!(profile.streak(), 0);
        assert!(profile.completed_levels().is_empty());
        assert_eq!(profile.user_id(), Some(fixed_now().timestamp()));
    }

    #[test]
    fn session_accumulates_hours_and_questions() {
        let mut profile = StudyProfile::new(fixed_now());
        let session = StudySession::new(2.5, Some(Topic::Ethics)).with_questions(5, 4);
        profile.log_study_session(&session, fixed_now(), utc()).unwrap();

        assert_eq!(profile.study_hours(), 2.5);
        assert_eq!(profile.topic(Topic::Ethics).hours(Level::One), 2.5);
        assert_eq!(profile.total_questions_answered(), 5);
        assert_eq!(profile.correct_answers(), 4);
        assert_eq!(profile.streak(), 1);
        assert_eq!(profile.last_study_date(), Some(RecordedAt::Utc(fixed_now())));
    }

    #[test]
    fn completion_needs_ten_hours_at_current_level() {
        let mut profile = StudyProfile::new(fixed_now());
        let almost = StudySession::new(9.99, Some(Topic::Derivatives));
        profile.log_study_session(&almost, fixed_now(), utc()).unwrap();
        assert!(!profile.topic(Topic::Derivatives).completed());

        let rest = StudySession::new(0.01, Some(Topic::Derivatives));
        profile.log_study_session(&rest, fixed_now(), utc()).unwrap();
        assert!(profile.topic(Topic::Derivatives).completed());
    }

    #[test]
    fn completion_survives_a_level_change() {
        let mut profile = StudyProfile::new(fixed_now());
        let big = StudySession::new(15.0, Some(Topic::Ethics));
        profile.log_study_session(&big, fixed_now(), utc()).unwrap();
        assert!(profile.topic(Topic::Ethics).completed());

        profile.set_current_level(Level::Two);
        let small = StudySession::new(1.0, Some(Topic::Ethics));
        profile.log_study_session(&small, fixed_now(), utc()).unwrap();

        let ethics = profile.topic(Topic::Ethics);
        assert!(ethics.completed());
        assert_eq!(ethics.hours(Level::Two), 1.0);
        assert_eq!(ethics.hours(Level::One), 15.0);
    }

    #[test]
    fn unknown_topic_still_counts_hours_and_streak() {
        let mut profile = StudyProfile::new(fixed_now());
        profile
            .log_study_session(&StudySession::new(1.5, None), fixed_now(), utc())
            .unwrap();
        assert_eq!(profile.study_hours(), 1.5);
        assert!(profile.topics().all(|(_, p)| p.hours(Level::One) == 0.0));
        assert_eq!(profile.streak(), 1);
    }

    #[test]
    fn invalid_sessions_leave_profile_untouched() {
        let mut profile = StudyProfile::new(fixed_now());
        let before = profile.clone();

        let negative = StudySession::new(-1.0, Some(Topic::Ethics));
        assert_eq!(
            profile.log_study_session(&negative, fixed_now(), utc()),
            Err(ProfileError::InvalidHours(-1.0))
        );
        let lopsided = StudySession::new(1.0, None).with_questions(2, 3);
        assert!(matches!(
            profile.log_study_session(&lopsided, fixed_now(), utc()),
            Err(ProfileError::CorrectExceedsAnswered { correct: 3, answered: 2 })
        ));
        assert_eq!(profile, before);
    }

    #[test]
    fn completing_a_level_twice_fails() {
        let mut profile = StudyProfile::new(fixed_now());
        profile.complete_level(Level::One).unwrap();
        assert_eq!(profile.current_level(), Level::Two);
        assert_eq!(
            profile.complete_level(Level::One),
            Err(ProfileError::LevelAlreadyCompleted(Level::One))
        );
        assert_eq!(profile.completed_levels(), vec![Level::One]);
    }

    #[test]
    fn completing_level_three_stays_at_three() {
        let mut profile = StudyProfile::new(fixed_now());
        profile.set_current_level(Level::Three);
        profile.complete_level(Level::Three).unwrap();
        profile.complete_level(Level::Two).unwrap();
        assert_eq!(profile.current_level(), Level::Three);
        assert_eq!(profile.completed_levels(), vec![Level::Two, Level::Three]);
    }

    #[test]
    fn answers_update_totals_and_topic_stats() {
        let mut profile = StudyProfile::new(fixed_now());
        profile.record_answer("Ethics", true, 45);
        profile.record_answer("Ethics", false, 60);

        assert_eq!(profile.total_questions_answered(), 2);
        assert_eq!(profile.correct_answers(), 1);
        let ethics = profile.performance_by_topic()["Ethics"];
        assert_eq!(ethics.attempts(), 2);
        assert_eq!(ethics.correct(), 1);
        assert_eq!(ethics.time_spent(), 105);
        assert_eq!(profile.overall_performance(), 50.0);
    }

    #[test]
    fn overall_performance_is_zero_without_answers() {
        let profile = StudyProfile::new(fixed_now());
        assert_eq!(profile.overall_performance(), 0.0);
    }

    #[test]
    fn target_date_keeps_raw_string() {
        let mut profile = StudyProfile::new(fixed_now());
        profile.set_target_exam_date("2026-05-20").unwrap();
        assert_eq!(profile.target_exam_date(), Some("2026-05-20"));

        assert!(profile.set_target_exam_date("next may").is_err());
        assert!(profile.set_target_exam_date("2026-13-01").is_err());
        assert_eq!(profile.target_exam_date(), Some("2026-05-20"));

        profile.set_target_exam_date("2026-11-02T09:00:00").unwrap();
        assert_eq!(profile.target_exam_date(), Some("2026-11-02T09:00:00"));
    }

    #[test]
    fn serializes_camel_case_with_sorted_levels() {
        let mut profile = StudyProfile::new(fixed_now());
        profile.complete_level(Level::Two).unwrap();
        profile.complete_level(Level::One).unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["completedLevels"], serde_json::json!([1, 2]));
        assert_eq!(value["currentLevel"], serde_json::json!(2));
        assert_eq!(value["topics"]["Fixed Income"]["completed"], serde_json::json!(false));
        assert!(value["lastStudyDate"].is_null());
        assert!(value.get("tutorMode").is_some());
    }

    #[test]
    fn loads_sparse_legacy_document() {
        let json = r#"{
            "currentLevel": 2,
            "studyHours": 3,
            "topics": {
                "Ethics": {"level1": 12, "level2": 0, "level3": 0, "completed": true},
                "Basket Weaving": {"level1": 1, "level2": 0, "level3": 0, "completed": false}
            },
            "lastStudyDate": "2023-11-14T09:30:00.123456",
            "streak": 4
        }"#;
        let profile: StudyProfile = serde_json::from_str(json).unwrap();
        profile.validate().unwrap();

        assert_eq!(profile.current_level(), Level::Two);
        assert_eq!(profile.study_hours(), 3.0);
        assert_eq!(profile.topics().count(), Topic::ALL.len());
        assert!(profile.topic(Topic::Ethics).completed());
        assert!(!profile.tutor_mode());
        assert_eq!(profile.total_questions_answered(), 0);
        let last = profile.last_study_date().unwrap();
        assert_eq!(
            last,
            RecordedAt::Local("2023-11-14T09:30:00.123456".parse().unwrap())
        );
        assert_eq!(last.resolve(utc()).date_naive(), fixed_now().date_naive());
    }

    #[test]
    fn round_trips_last_study_date() {
        let mut profile = StudyProfile::new(fixed_now());
        let at = fixed_now() + Duration::milliseconds(1_234);
        profile
            .log_study_session(&StudySession::new(1.0, None), at, utc())
            .unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let back: StudyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_study_date(), Some(RecordedAt::Utc(at)));
        assert_eq!(back, profile);
    }

    #[test]
    fn validate_rejects_more_correct_than_answered() {
        let json = r#"{"totalQuestionsAnswered": 1, "correctAnswers": 2}"#;
        let profile: StudyProfile = serde_json::from_str(json).unwrap();
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::Inconsistent(_))
        ));
    }

    #[test]
    fn naive_last_study_date_is_local_wall_clock() {
        let json = r#"{"lastStudyDate": "2023-11-14T23:30:00.000000", "streak": 3}"#;
        let mut profile: StudyProfile = serde_json::from_str(json).unwrap();
        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        // 10:00 on 2023-11-15 at UTC+8, the local day after the last session.
        let now = plus_eight
            .with_ymd_and_hms(2023, 11, 15, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);

        profile
            .log_study_session(&StudySession::new(1.0, Some(Topic::Ethics)), now, plus_eight)
            .unwrap();
        assert_eq!(profile.streak(), 4);
    }

    #[test]
    fn local_timestamps_are_written_back_unchanged() {
        let json = r#"{"startDate": "2023-11-14T08:00:00.000001"}"#;
        let profile: StudyProfile = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["startDate"], serde_json::json!("2023-11-14T08:00:00.000001"));
    }

    #[test]
    fn resolve_shifts_local_times_by_offset() {
        let naive: NaiveDateTime = "2023-11-14T23:30:00".parse().unwrap();
        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(
            RecordedAt::Local(naive).resolve(plus_eight),
            Utc.with_ymd_and_hms(2023, 11, 14, 15, 30, 0).unwrap()
        );
        assert_eq!(RecordedAt::Local(naive).resolve(utc()), naive.and_utc());
    }

    #[test]
    fn repair_clamps_overcounted_answers_and_keeps_the_rest() {
        let json = r#"{
            "currentLevel": 3,
            "studyHours": 120.5,
            "streak": 9,
            "totalQuestionsAnswered": 2,
            "correctAnswers": 5,
            "performanceByTopic": {"Ethics": {"attempts": 1, "correct": 3, "timeSpent": 60}}
        }"#;
        let mut profile: StudyProfile = serde_json::from_str(json).unwrap();
        assert!(profile.validate().is_err());

        let notes = profile.repair();
        assert_eq!(notes.len(), 2);
        profile.validate().unwrap();
        assert_eq!(profile.correct_answers(), 2);
        assert_eq!(profile.performance_by_topic()["Ethics"].correct(), 1);
        assert_eq!(profile.current_level(), Level::Three);
        assert_eq!(profile.study_hours(), 120.5);
        assert_eq!(profile.streak(), 9);
    }

    #[test]
    fn repair_resets_negative_hours() {
        let json = r#"{
            "studyHours": -2,
            "topics": {"Ethics": {"level1": -2, "level2": 4, "level3": 0, "completed": false}}
        }"#;
        let mut profile: StudyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.repair().len(), 2);
        profile.validate().unwrap();
        assert_eq!(profile.study_hours(), 0.0);
        assert_eq!(profile.topic(Topic::Ethics).hours(Level::One), 0.0);
        assert_eq!(profile.topic(Topic::Ethics).hours(Level::Two), 4.0);
    }

    #[test]
    fn repair_leaves_consistent_profiles_alone() {
        let mut profile = StudyProfile::new(fixed_now());
        let before = profile.clone();
        assert!(profile.repair().is_empty());
        assert_eq!(profile, before);
    }
}
