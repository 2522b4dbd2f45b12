use std::path::PathBuf;

use cfa_core::model::AnswerChoice;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cfa-study", about = "CFA exam study tracker", version)]
pub struct Cli {
    /// Path to the profile JSON file [default: ~/.cfa-study/cfa-data.json]
    #[arg(long, env = "CFA_STUDY_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Print structured JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed for practice question shuffling
    #[arg(long, env = "CFA_STUDY_SEED", global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// View your study profile
    Profile,

    /// Set your current CFA level
    SetLevel {
        /// Level (1, 2 or 3)
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },

    /// Set your target exam date
    SetTargetDate {
        /// Date as YYYY-MM-DD
        date: String,
    },

    /// Enable tutor mode
    EnableTutor,

    /// Disable tutor mode
    DisableTutor,

    /// Personalized study plan (tutor mode)
    TutorPlan,

    /// Detailed topic explanation at your level (tutor mode)
    TutorExplain {
        /// Topic name, e.g. "Fixed Income"
        topic: String,
    },

    /// Show one practice question to answer
    Quiz {
        topic: String,
        #[arg(allow_negative_numbers = true)]
        level: i64,
        /// Question number, starting at 1
        #[arg(default_value_t = 1)]
        number: usize,
    },

    /// Submit an answer to a quiz question
    Answer {
        topic: String,
        #[arg(allow_negative_numbers = true)]
        level: i64,
        /// Question number shown by `quiz`
        number: usize,
        /// Your answer (A, B, C or D)
        answer: AnswerChoice,
    },

    /// Log a study session
    LogStudy {
        /// Hours studied
        #[arg(allow_negative_numbers = true)]
        hours: f64,
        topic: String,
        /// Questions answered during the session
        #[arg(default_value_t = 0)]
        questions: u32,
        /// Questions answered correctly
        #[arg(default_value_t = 0)]
        correct: u32,
    },

    /// View progress per topic at your current level
    Topics,

    /// View the suggested study plan
    Plan,

    /// Mark a level as completed
    CompleteLevel {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },

    /// Draw practice questions you have not seen in this run
    Practice {
        topic: String,
        #[arg(allow_negative_numbers = true)]
        level: i64,
        /// How many questions
        #[arg(default_value_t = 5)]
        count: usize,
    },
}
