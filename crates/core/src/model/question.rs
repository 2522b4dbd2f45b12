use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::content::BankQuestion;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("answer must be one of A, B, C, D (got {0:?})")]
pub struct AnswerChoiceError(pub String);

/// Letter of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
}

impl AnswerChoice {
    pub const ALL: [AnswerChoice; 4] = [
        AnswerChoice::A,
        AnswerChoice::B,
        AnswerChoice::C,
        AnswerChoice::D,
    ];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            AnswerChoice::A => 'A',
            AnswerChoice::B => 'B',
            AnswerChoice::C => 'C',
            AnswerChoice::D => 'D',
        }
    }
}

impl FromStr for AnswerChoice {
    type Err = AnswerChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(AnswerChoiceError(s.to_owned())),
        }
    }
}

impl fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A multiple-choice practice question handed to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub question: String,
    pub options: [String; 4],
    pub answer: AnswerChoice,
    pub explanation: String,
}

impl PracticeQuestion {
    /// Generic stand-in used when the bank has nothing for a topic and level.
    #[must_use]
    pub fn placeholder(topic: &str, level: i64) -> Self {
        Self {
            question: format!("Sample question for {topic} at Level {level}"),
            options: ["Option A", "Option B", "Option C", "Option D"].map(str::to_owned),
            answer: AnswerChoice::B,
            explanation: "This is a sample explanation for the question.".to_owned(),
        }
    }

    /// Options paired with their letters, in display order.
    pub fn lettered_options(&self) -> impl Iterator<Item = (AnswerChoice, &str)> {
        AnswerChoice::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}

impl From<&BankQuestion> for PracticeQuestion {
    fn from(q: &BankQuestion) -> Self {
        Self {
            question: q.question.to_owned(),
            options: q.options.map(str::to_owned),
            answer: q.answer,
            explanation: q.explanation.to_owned(),
        }
    }
}
