//! Static study content: the practice-question bank and tutor explanations.

mod explanations;
mod questions;

pub use explanations::{ExplanationEntry, explanation_for};
pub use questions::{BankQuestion, questions_for};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, Topic};

    #[test]
    fn every_topic_has_an_explanation_at_every_level() {
        for topic in Topic::ALL {
            for level in Level::ALL {
                let entry = explanation_for(topic, level)
                    .unwrap_or_else(|| panic!("missing explanation for {topic} {level}"));
                assert!(!entry.key_points.is_empty());
            }
        }
    }

    #[test]
    fn explanation_titles_follow_level() {
        let entry = explanation_for(Topic::Ethics, Level::Two).unwrap();
        assert_eq!(entry.title, "Ethics in Asset Management Context (Level II)");
    }

    #[test]
    fn level_one_bank_covers_first_five_topics() {
        for topic in &Topic::ALL[..5] {
            assert_eq!(questions_for(*topic, Level::One).len(), 5, "{topic}");
        }
        assert!(questions_for(Topic::Derivatives, Level::One).is_empty());
        assert!(questions_for(Topic::Ethics, Level::Two).is_empty());
    }

    #[test]
    fn bank_question_texts_are_distinct_within_a_topic() {
        for topic in Topic::ALL {
            let bank = questions_for(topic, Level::One);
            for (i, a) in bank.iter().enumerate() {
                for b in &bank[i + 1..] {
                    assert_ne!(a.question, b.question);
                }
            }
        }
    }
}
