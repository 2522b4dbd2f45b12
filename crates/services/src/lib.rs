#![forbid(unsafe_code)]

pub mod error;
pub mod practice;
pub mod tracker;
pub mod tutor;
pub mod views;

pub use cfa_core::Clock;

pub use error::TrackerError;
pub use practice::QuestionPicker;
pub use tracker::{StudyProfileTracker, TrackerOptions};
pub use views::{
    PracticeOutcome, ProfileSummary, StudyPlanItem, TopicProgressView, TutorExplanation,
    TutorPlan,
};
