use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info, warn};

use cfa_core::model::{Level, PracticeQuestion, StudyProfile, StudySession, Topic};
use cfa_core::time::{Clock, local_offset};
use storage::repository::{ProfileRepository, StorageError};

use crate::error::TrackerError;
use crate::practice::{QuestionPicker, question_pool};
use crate::tutor;
use crate::views::{
    PracticeOutcome, ProfileSummary, StudyPlanItem, TopicProgressView, TutorExplanation,
    TutorPlan,
};

/// Default seconds credited to a practice answer.
pub const DEFAULT_PRACTICE_SECONDS: u64 = 60;

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Knobs for opening a tracker.
#[derive(Debug, Clone, Copy)]
pub struct TrackerOptions {
    clock: Clock,
    utc_offset: FixedOffset,
    seed: Option<u64>,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            clock: Clock::default(),
            utc_offset: local_offset(),
            seed: None,
        }
    }
}

impl TrackerOptions {
    /// Override the clock (usually for deterministic testing).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Offset in which calendar days are counted for the streak.
    #[must_use]
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Make practice question shuffling reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

//
// ─── TRACKER ───────────────────────────────────────────────────────────────────
//

/// Owns the study profile and persists it after every change.
///
/// Mutations are applied to a copy, saved, and only then swapped in, so a
/// failed save leaves the in-memory profile as it was.
pub struct StudyProfileTracker {
    repo: Arc<dyn ProfileRepository>,
    clock: Clock,
    utc_offset: FixedOffset,
    profile: StudyProfile,
    picker: QuestionPicker,
}

impl StudyProfileTracker {
    /// Open the profile stored in `repo` with the system clock and local days.
    ///
    /// # Errors
    ///
    /// See [`StudyProfileTracker::open_with`].
    pub fn open(repo: Arc<dyn ProfileRepository>) -> Result<Self, TrackerError> {
        Self::open_with(repo, TrackerOptions::default())
    }

    /// Open the profile stored in `repo`, creating a default one if needed.
    ///
    /// A stored profile that cannot be parsed is moved aside and replaced by
    /// a default profile.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if the store cannot be read or the
    /// default profile cannot be saved.
    pub fn open_with(
        repo: Arc<dyn ProfileRepository>,
        options: TrackerOptions,
    ) -> Result<Self, TrackerError> {
        let profile = load_or_create(repo.as_ref(), options.clock.now())?;
        let picker = options
            .seed
            .map_or_else(QuestionPicker::new, QuestionPicker::seeded);
        Ok(Self {
            repo,
            clock: options.clock,
            utc_offset: options.utc_offset,
            profile,
            picker,
        })
    }

    /// Replace the clock used for subsequent operations.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Current time according to the tracker's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The full stored record.
    #[must_use]
    pub fn profile(&self) -> &StudyProfile {
        &self.profile
    }

    // ─── profile settings ─────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `TrackerError::InvalidLevel` outside 1..=3, or a storage error.
    pub fn set_level(&mut self, level: i64) -> Result<(), TrackerError> {
        let level = Level::from_number(level)?;
        self.update(|profile| {
            profile.set_current_level(level);
            Ok(())
        })?;
        debug!(%level, "current level set");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TrackerError::InvalidTargetDate` if `date` is not an ISO
    /// date, or a storage error.
    pub fn set_target_date(&mut self, date: &str) -> Result<(), TrackerError> {
        self.update(|profile| Ok(profile.set_target_exam_date(date)?))?;
        debug!(date, "target exam date set");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a storage error if the profile cannot be saved.
    pub fn set_tutor_mode(&mut self, enabled: bool) -> Result<(), TrackerError> {
        self.update(|profile| {
            profile.set_tutor_mode(enabled);
            Ok(())
        })?;
        debug!(enabled, "tutor mode set");
        Ok(())
    }

    // ─── study sessions ───────────────────────────────────────────────────

    /// Log `hours` of study on `topic`, with optional question counts.
    ///
    /// Topics outside the curriculum still count toward total hours, the
    /// streak and the question totals.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidHours` or
    /// `TrackerError::CorrectExceedsAnswered` without changing anything, or a
    /// storage error.
    pub fn log_study_session(
        &mut self,
        hours: f64,
        topic: &str,
        questions_answered: u32,
        correct_answers: u32,
    ) -> Result<(), TrackerError> {
        let session = StudySession::new(hours, Topic::from_name(topic))
            .with_questions(questions_answered, correct_answers);
        let now = self.clock.now();
        let offset = self.utc_offset;
        self.update(|profile| Ok(profile.log_study_session(&session, now, offset)?))?;
        debug!(
            hours,
            topic,
            questions_answered,
            correct_answers,
            streak = self.profile.streak(),
            "study session logged"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TrackerError::InvalidLevel`, `TrackerError::LevelAlreadyCompleted`,
    /// or a storage error.
    pub fn complete_level(&mut self, level: i64) -> Result<(), TrackerError> {
        let level = Level::from_number(level)?;
        self.update(|profile| Ok(profile.complete_level(level)?))?;
        debug!(%level, current = %self.profile.current_level(), "level completed");
        Ok(())
    }

    // ─── views ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn profile_summary(&self) -> ProfileSummary {
        ProfileSummary::from(&self.profile)
    }

    /// Progress at the current level for every topic, in curriculum order.
    #[must_use]
    pub fn topic_progress(&self) -> Vec<TopicProgressView> {
        let level = self.profile.current_level();
        self.profile
            .topics()
            .map(|(topic, progress)| TopicProgressView {
                topic,
                progress: progress.hours(level),
                completed: progress.completed(),
            })
            .collect()
    }

    /// Incomplete topics, least studied first. Ties keep curriculum order.
    #[must_use]
    pub fn study_plan(&self) -> Vec<StudyPlanItem> {
        let mut plan: Vec<StudyPlanItem> = self
            .topic_progress()
            .into_iter()
            .filter(|view| !view.completed)
            .map(|view| StudyPlanItem {
                topic: view.topic,
                progress: view.progress,
            })
            .collect();
        plan.sort_by(|a, b| a.progress.total_cmp(&b.progress));
        plan
    }

    // ─── practice ─────────────────────────────────────────────────────────

    /// Draw up to `count` shuffled questions not yet asked by this tracker.
    ///
    /// Returns `min(count, pool size)` questions; the pool is a single
    /// placeholder when nothing curated exists for the pair.
    pub fn practice_questions(
        &mut self,
        topic: &str,
        level: i64,
        count: usize,
    ) -> Vec<PracticeQuestion> {
        let key = topic_key(topic);
        let pool = question_pool(&key, level);
        let picked = self.picker.pick(&key, level, pool, count);
        debug!(topic = %key, level, requested = count, picked = picked.len(), "practice questions drawn");
        picked
    }

    /// Question `number` (1-based) of the pool for `topic` at `level`, in bank order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::QuestionOutOfRange` if `number` is 0 or past
    /// the end of the pool.
    pub fn question_at(
        &self,
        topic: &str,
        level: i64,
        number: usize,
    ) -> Result<PracticeQuestion, TrackerError> {
        let mut pool = question_pool(&topic_key(topic), level);
        let available = pool.len();
        if number == 0 || number > available {
            return Err(TrackerError::QuestionOutOfRange { number, available });
        }
        Ok(pool.swap_remove(number - 1))
    }

    /// Forget which questions of `topic` were already drawn.
    pub fn reset_asked_questions(&mut self, topic: &str) {
        let key = topic_key(topic);
        self.picker.reset_topic(&key);
        debug!(topic = %key, "asked questions reset");
    }

    /// Grade one answer and count it toward the totals and per-topic stats.
    ///
    /// Answers match case-insensitively, ignoring surrounding whitespace.
    /// `level` is only logged; per-topic stats are not split by level.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the profile cannot be saved.
    pub fn record_practice_session(
        &mut self,
        topic: &str,
        level: i64,
        user_answer: &str,
        correct_answer: &str,
        time_spent_seconds: u64,
    ) -> Result<PracticeOutcome, TrackerError> {
        let key = topic_key(topic);
        let correct = user_answer.trim().eq_ignore_ascii_case(correct_answer.trim());
        self.update(|profile| {
            profile.record_answer(&key, correct, time_spent_seconds);
            Ok(())
        })?;
        debug!(topic = %key, level, correct, "practice answer recorded");
        Ok(PracticeOutcome {
            correct,
            correct_answer: correct_answer.to_owned(),
            performance: self.profile.overall_performance(),
        })
    }

    // ─── tutor ────────────────────────────────────────────────────────────

    /// Multi-week plan over the weakest topics at the current level.
    #[must_use]
    pub fn tutor_plan(&self) -> TutorPlan {
        tutor::build_plan(self.profile.current_level(), self.study_plan())
    }

    /// Explanation of `topic` pitched at the current level.
    #[must_use]
    pub fn tutor_explanation(&self, topic: &str) -> TutorExplanation {
        tutor::explain(topic, self.profile.current_level())
    }

    // ─── persistence ──────────────────────────────────────────────────────

    fn update<F>(&mut self, apply: F) -> Result<(), TrackerError>
    where
        F: FnOnce(&mut StudyProfile) -> Result<(), TrackerError>,
    {
        let mut next = self.profile.clone();
        apply(&mut next)?;
        self.repo.save_profile(&next)?;
        self.profile = next;
        Ok(())
    }
}

/// Canonical topic name when known, otherwise the trimmed input.
fn topic_key(raw: &str) -> String {
    Topic::from_name(raw).map_or_else(|| raw.trim().to_owned(), |t| t.name().to_owned())
}

fn load_or_create(
    repo: &dyn ProfileRepository,
    now: DateTime<Utc>,
) -> Result<StudyProfile, TrackerError> {
    match repo.load_profile() {
        Ok(Some(profile)) => return Ok(profile),
        Ok(None) => info!("no study profile found; creating a new one"),
        Err(StorageError::Corrupt(reason)) => {
            warn!(%reason, "stored study profile is unreadable; starting from defaults");
            if let Some(moved) = repo.quarantine()? {
                warn!(path = %moved.display(), "unreadable profile moved aside");
            }
        }
        Err(err) => return Err(err.into()),
    }

    let profile = StudyProfile::new(now);
    repo.save_profile(&profile)?;
    Ok(profile)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
