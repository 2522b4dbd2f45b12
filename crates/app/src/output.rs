use serde::Serialize;

use cfa_core::model::{AnswerChoice, Level, PracticeQuestion, Topic};
use services::{
    PracticeOutcome, ProfileSummary, StudyPlanItem, TopicProgressView, TutorExplanation,
    TutorPlan,
};

/// A quiz question as shown to the learner, without its answer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView<'a> {
    pub topic: &'a str,
    pub level: i64,
    pub number: usize,
    pub question: &'a str,
    pub options: &'a [String; 4],
}

impl<'a> QuizView<'a> {
    pub fn new(topic: &'a str, level: i64, number: usize, question: &'a PracticeQuestion) -> Self {
        Self {
            topic,
            level,
            number,
            question: &question.question,
            options: &question.options,
        }
    }
}

/// Result of `answer`, with the graded question's explanation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView<'a> {
    #[serde(flatten)]
    pub outcome: &'a PracticeOutcome,
    pub your_answer: AnswerChoice,
    pub explanation: &'a str,
}

pub fn format_profile(summary: &ProfileSummary) -> String {
    let completed = if summary.completed_levels.is_empty() {
        "None".to_owned()
    } else {
        summary
            .completed_levels
            .iter()
            .map(Level::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::from("CFA Study Profile:\n");
    out.push_str(&format!("Current Level: {}\n", summary.current_level));
    out.push_str(&format!(
        "Target Exam Date: {}\n",
        summary.target_exam_date.as_deref().unwrap_or("Not set")
    ));
    out.push_str(&format!("Study Hours: {}\n", summary.study_hours));
    out.push_str(&format!("Completed Levels: {completed}\n"));
    out.push_str(&format!("Current Streak: {} days\n", summary.streak));
    out.push_str(&format!(
        "Overall Performance: {}%\n",
        summary.overall_performance
    ));
    out.push_str(&format!(
        "Tutor Mode: {}\n",
        if summary.tutor_mode { "ON" } else { "OFF" }
    ));
    out
}

pub fn format_topics(progress: &[TopicProgressView]) -> String {
    let mut out = String::from("Topic Progress:\n");
    for view in progress {
        if view.completed {
            out.push_str(&format!("{}: COMPLETED\n", view.topic));
        } else {
            out.push_str(&format!("{}: Progress: {:.1}h\n", view.topic, view.progress));
        }
    }
    out
}

pub fn format_plan(plan: &[StudyPlanItem]) -> String {
    let mut out = String::from("Suggested Study Plan (Prioritized):\n");
    if plan.is_empty() {
        out.push_str("All topics completed for current level!\n");
    }
    for (i, item) in plan.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (Progress: {:.1}h)\n",
            i + 1,
            item.topic,
            item.progress
        ));
    }
    out
}

pub fn format_tutor_plan(plan: &TutorPlan) -> String {
    let mut out = format!(
        "Tutor Mode - Personalized Study Plan for Level {}:\n",
        plan.level
    );
    out.push_str(&format!("Focus Strategy: {}\n", plan.focus_strategy));
    out.push_str(&format!("Duration: {} weeks\n", plan.weeks));
    out.push_str(&format!("Daily Study Time: {} hours\n", plan.daily_hours));
    out.push_str("\nRecommended Topics to Focus On:\n");
    for (i, item) in plan.topics.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (Current Progress: {:.1}h)\n",
            i + 1,
            item.topic,
            item.progress
        ));
    }
    out
}

pub fn format_explanation(explanation: &TutorExplanation) -> String {
    let mut out = format!("{}\n", explanation.title);
    out.push_str(&"=".repeat(explanation.title.chars().count()));
    out.push('\n');
    out.push_str(&format!("\n{}\n", explanation.explanation));
    out.push_str(&format!(
        "\nReal-World Example:\n{}\n",
        explanation.real_world_example
    ));
    out.push_str("\nKey Points to Remember:\n");
    for (i, point) in explanation.key_points.iter().enumerate() {
        out.push_str(&format!("  {}. {point}\n", i + 1));
    }
    out
}

fn push_options(out: &mut String, question: &PracticeQuestion) {
    for (letter, option) in question.lettered_options() {
        out.push_str(&format!("  {letter}. {option}\n"));
    }
}

pub fn format_quiz(topic: &str, level: i64, number: usize, question: &PracticeQuestion) -> String {
    let mut out = format!("Question {number}: {}\n", question.question);
    push_options(&mut out, question);
    out.push_str(&format!(
        "\nSubmit your answer as: cfa-study answer \"{topic}\" {level} {number} <A/B/C/D>\n"
    ));
    out
}

pub fn format_answer(view: &AnswerView<'_>, correct_total: u32, answered_total: u32) -> String {
    let mut out = format!("Your answer: {}\n", view.your_answer);
    out.push_str(&format!("Correct answer: {}\n", view.outcome.correct_answer));
    if view.outcome.correct {
        out.push_str("Correct!\n");
    } else {
        out.push_str("Incorrect.\n");
        out.push_str(&format!("Explanation: {}\n", view.explanation));
    }
    out.push_str(&format!(
        "\nYour overall performance: {:.1}% ({correct_total}/{answered_total} correct)\n",
        view.outcome.performance
    ));
    out
}

pub fn format_practice(topic: &str, level: i64, questions: &[PracticeQuestion]) -> String {
    let mut out = format!("Practice Questions for {topic} (Level {level}):\n");
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("\n{}. {}\n", i + 1, question.question));
        push_options(&mut out, question);
    }
    out
}

pub fn format_level_completed(level: Level) -> String {
    let mut out = format!("Level {level} marked as completed!\n");
    match level.next() {
        Some(next) => out.push_str(&format!("Moved to Level {next}\n")),
        None => out.push_str("Congratulations! You have completed all CFA levels!\n"),
    }
    out
}

/// Display name for a topic argument: canonical when known, else as typed.
pub fn topic_label(raw: &str) -> String {
    Topic::from_name(raw).map_or_else(|| raw.trim().to_owned(), |t| t.name().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ProfileSummary {
        ProfileSummary {
            current_level: Level::Two,
            target_exam_date: None,
            study_hours: 12.5,
            streak: 3,
            completed_levels: vec![Level::One],
            tutor_mode: true,
            overall_performance: 66.67,
        }
    }

    #[test]
    fn profile_lists_every_field() {
        let out = format_profile(&summary());
        assert_eq!(
            out,
            "CFA Study Profile:\n\
             Current Level: 2\n\
             Target Exam Date: Not set\n\
             Study Hours: 12.5\n\
             Completed Levels: 1\n\
             Current Streak: 3 days\n\
             Overall Performance: 66.67%\n\
             Tutor Mode: ON\n"
        );
    }

    #[test]
    fn profile_without_completed_levels_says_none() {
        let mut s = summary();
        s.completed_levels.clear();
        assert!(format_profile(&s).contains("Completed Levels: None\n"));
    }

    #[test]
    fn topics_mark_completed() {
        let out = format_topics(&[
            TopicProgressView {
                topic: Topic::Ethics,
                progress: 12.0,
                completed: true,
            },
            TopicProgressView {
                topic: Topic::FixedIncome,
                progress: 2.3,
                completed: false,
            },
        ]);
        assert_eq!(
            out,
            "Topic Progress:\nEthics: COMPLETED\nFixed Income: Progress: 2.3h\n"
        );
    }

    #[test]
    fn empty_plan_congratulates() {
        assert!(format_plan(&[]).ends_with("All topics completed for current level!\n"));
    }

    #[test]
    fn explanation_is_underlined() {
        let out = format_explanation(&TutorExplanation {
            title: "Ethics".into(),
            explanation: "Body".into(),
            real_world_example: "Example".into(),
            key_points: vec!["One".into()],
        });
        assert!(out.starts_with("Ethics\n======\n\nBody\n"));
        assert!(out.ends_with("Key Points to Remember:\n  1. One\n"));
    }

    #[test]
    fn quiz_hides_the_answer() {
        let question = PracticeQuestion::placeholder("Derivatives", 1);
        let out = format_quiz("Derivatives", 1, 1, &question);
        assert!(out.contains("  D. Option D\n"));
        assert!(out.ends_with("cfa-study answer \"Derivatives\" 1 1 <A/B/C/D>\n"));

        let json = serde_json::to_value(QuizView::new("Derivatives", 1, 1, &question)).unwrap();
        assert!(json.get("answer").is_none());
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn wrong_answer_shows_explanation() {
        let outcome = PracticeOutcome {
            correct: false,
            correct_answer: "B".into(),
            performance: 50.0,
        };
        let view = AnswerView {
            outcome: &outcome,
            your_answer: AnswerChoice::A,
            explanation: "Because B.",
        };
        let out = format_answer(&view, 1, 2);
        assert!(out.contains("Incorrect.\nExplanation: Because B.\n"));
        assert!(out.ends_with("50.0% (1/2 correct)\n"));
    }

    #[test]
    fn last_level_congratulates() {
        assert!(format_level_completed(Level::Three).contains("Congratulations"));
        assert!(format_level_completed(Level::One).contains("Moved to Level 2"));
    }

    #[test]
    fn topic_label_canonicalizes_known_topics() {
        assert_eq!(topic_label("fixed income"), "Fixed Income");
        assert_eq!(topic_label(" Astrology "), "Astrology");
    }
}
