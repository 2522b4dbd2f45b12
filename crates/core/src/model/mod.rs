mod level;
mod profile;
mod question;
mod topic;

pub use level::{Level, LevelError};
pub use profile::{
    COMPLETION_THRESHOLD_HOURS, ProfileError, RecordedAt, StudyProfile, StudySession,
    TopicPerformance, TopicProgress, parse_exam_date, parse_timestamp,
};
pub use question::{AnswerChoice, AnswerChoiceError, PracticeQuestion};
pub use topic::{Topic, TopicError};
