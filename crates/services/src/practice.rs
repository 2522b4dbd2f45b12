//! Practice question selection without repeats.

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

use cfa_core::content::questions_for;
use cfa_core::model::{Level, PracticeQuestion, Topic};

/// Characters of question text that identify a question in the asked set.
const QUESTION_KEY_PREFIX_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AskedKey {
    topic: String,
    level: i64,
    prefix: String,
}

impl AskedKey {
    fn new(topic: &str, level: i64, question: &PracticeQuestion) -> Self {
        let prefix = question
            .question
            .chars()
            .take(QUESTION_KEY_PREFIX_CHARS)
            .map(|c| if c == ' ' { '_' } else { c })
            .collect();
        Self {
            topic: topic.to_owned(),
            level,
            prefix,
        }
    }
}

/// Questions a learner can draw for `topic` at `level`, in bank order.
///
/// Falls back to a single placeholder when the bank is empty, the topic is
/// unknown, or the level is out of range.
#[must_use]
pub fn question_pool(topic: &str, level: i64) -> Vec<PracticeQuestion> {
    let bank = match (Topic::from_name(topic), Level::from_number(level)) {
        (Some(topic), Ok(level)) => questions_for(topic, level),
        _ => &[],
    };
    if bank.is_empty() {
        vec![PracticeQuestion::placeholder(topic, level)]
    } else {
        bank.iter().map(PracticeQuestion::from).collect()
    }
}

/// Draws shuffled questions, avoiding ones already asked in this process.
///
/// The asked set lives only as long as the picker.
#[derive(Debug)]
pub struct QuestionPicker {
    asked: HashSet<AskedKey>,
    rng: StdRng,
}

impl Default for QuestionPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionPicker {
    /// Picker seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            asked: HashSet::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Picker with a reproducible shuffle order.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            asked: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of questions currently marked as asked.
    #[must_use]
    pub fn asked_count(&self) -> usize {
        self.asked.len()
    }

    /// Forget every asked question for `topic`, at all levels.
    pub fn reset_topic(&mut self, topic: &str) {
        self.asked.retain(|key| key.topic != topic);
    }

    /// Pick up to `count` questions from `pool`, preferring unasked ones.
    ///
    /// When the unasked questions run short the topic's asked set is cleared
    /// and the selection is topped up from the rest, so the result holds
    /// `min(count, pool.len())` distinct questions. Every returned question
    /// is marked asked.
    pub fn pick(
        &mut self,
        topic: &str,
        level: i64,
        pool: Vec<PracticeQuestion>,
        count: usize,
    ) -> Vec<PracticeQuestion> {
        let wanted = count.min(pool.len());
        let (mut fresh, mut seen): (Vec<_>, Vec<_>) = pool
            .into_iter()
            .partition(|q| !self.asked.contains(&AskedKey::new(topic, level, q)));

        fresh.shuffle(&mut self.rng);
        fresh.truncate(wanted);

        if fresh.len() < wanted {
            debug!(topic, level, "practice pool exhausted; resetting asked questions");
            self.reset_topic(topic);
            seen.shuffle(&mut self.rng);
            let missing = wanted - fresh.len();
            fresh.extend(seen.into_iter().take(missing));
        }

        for question in &fresh {
            self.asked.insert(AskedKey::new(topic, level, question));
        }
        fresh
    }
}
