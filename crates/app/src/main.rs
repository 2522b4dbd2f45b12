mod cli;
mod config;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cfa_core::model::Level;
use cli::{Cli, Command};
use output::{AnswerView, QuizView};
use services::tracker::DEFAULT_PRACTICE_SECONDS;
use services::{StudyProfileTracker, TrackerOptions};
use storage::JsonFileRepository;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_tutor_mode(tracker: &StudyProfileTracker) -> Result<()> {
    if !tracker.profile().tutor_mode() {
        bail!("tutor mode is off; run `cfa-study enable-tutor` first");
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = config::resolve_data_path(cli.data)?;
    debug!(path = %path.display(), "using profile file");

    let mut options = TrackerOptions::default();
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }
    let repo = JsonFileRepository::new(&path);
    let mut tracker = StudyProfileTracker::open_with(Arc::new(repo), options)
        .with_context(|| format!("failed to open study profile at {}", path.display()))?;
    let json = cli.json;

    match cli.command {
        Command::Profile => {
            let summary = tracker.profile_summary();
            if json {
                print_json(&summary)?;
            } else {
                print!("{}", output::format_profile(&summary));
            }
        }

        Command::SetLevel { level } => {
            tracker.set_level(level)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                println!("Current level set to: {level}");
            }
        }

        Command::SetTargetDate { date } => {
            tracker.set_target_date(&date)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                println!("Target exam date set to: {date}");
            }
        }

        Command::EnableTutor => {
            tracker.set_tutor_mode(true)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                println!(
                    "Tutor mode enabled! You now have access to personalized tutoring features."
                );
            }
        }

        Command::DisableTutor => {
            tracker.set_tutor_mode(false)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                println!("Tutor mode disabled.");
            }
        }

        Command::TutorPlan => {
            require_tutor_mode(&tracker)?;
            let plan = tracker.tutor_plan();
            if json {
                print_json(&plan)?;
            } else {
                print!("{}", output::format_tutor_plan(&plan));
            }
        }

        Command::TutorExplain { topic } => {
            require_tutor_mode(&tracker)?;
            let explanation = tracker.tutor_explanation(&topic);
            if json {
                print_json(&explanation)?;
            } else {
                print!("{}", output::format_explanation(&explanation));
            }
        }

        Command::Quiz {
            topic,
            level,
            number,
        } => {
            let topic = output::topic_label(&topic);
            let question = tracker.question_at(&topic, level, number)?;
            if json {
                print_json(&QuizView::new(&topic, level, number, &question))?;
            } else {
                print!("{}", output::format_quiz(&topic, level, number, &question));
            }
        }

        Command::Answer {
            topic,
            level,
            number,
            answer,
        } => {
            let topic = output::topic_label(&topic);
            let question = tracker.question_at(&topic, level, number)?;
            let outcome = tracker.record_practice_session(
                &topic,
                level,
                &answer.to_string(),
                &question.answer.to_string(),
                DEFAULT_PRACTICE_SECONDS,
            )?;
            let view = AnswerView {
                outcome: &outcome,
                your_answer: answer,
                explanation: &question.explanation,
            };
            if json {
                print_json(&view)?;
            } else {
                let profile = tracker.profile();
                print!(
                    "{}",
                    output::format_answer(
                        &view,
                        profile.correct_answers(),
                        profile.total_questions_answered()
                    )
                );
            }
        }

        Command::LogStudy {
            hours,
            topic,
            questions,
            correct,
        } => {
            tracker.log_study_session(hours, &topic, questions, correct)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                println!("Study session logged: {hours} hours on {topic}");
            }
        }

        Command::Topics => {
            let progress = tracker.topic_progress();
            if json {
                print_json(&progress)?;
            } else {
                print!("{}", output::format_topics(&progress));
            }
        }

        Command::Plan => {
            let plan = tracker.study_plan();
            if json {
                print_json(&plan)?;
            } else {
                print!("{}", output::format_plan(&plan));
            }
        }

        Command::CompleteLevel { level } => {
            tracker.complete_level(level)?;
            if json {
                print_json(&tracker.profile_summary())?;
            } else {
                let level = Level::from_number(level)?;
                print!("{}", output::format_level_completed(level));
            }
        }

        Command::Practice {
            topic,
            level,
            count,
        } => {
            let topic = output::topic_label(&topic);
            let questions = tracker.practice_questions(&topic, level, count);
            if json {
                print_json(&questions)?;
            } else {
                print!("{}", output::format_practice(&topic, level, &questions));
            }
        }
    }

    Ok(())
}
