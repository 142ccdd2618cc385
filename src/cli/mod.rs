//! Command Line Interface module
//!
//! One module per subcommand, each exposing an `Args` struct and an
//! `execute` function taking the loaded configuration.

pub mod add;
pub mod get;
pub mod import;
pub mod init;
pub mod list;
pub mod render;
pub mod search;
pub mod stats;
pub mod update;
pub mod update_by_text;

use clap::Args;

use crate::core::Question;
use crate::error::{QuizbankError, Result};

const MAX_QUESTION_TEXT_LEN: usize = 1000;

/// Question fields shared by the add and update commands.
#[derive(Args)]
pub struct QuestionArgs {
    /// Question text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Answer option (repeat for each option)
    #[arg(short, long = "answer", value_name = "ANSWER")]
    pub answers: Vec<String>,

    /// Correct answer, by value (repeat for each; must be one of the options)
    #[arg(short, long = "correct", value_name = "ANSWER")]
    pub correct: Vec<String>,
}

impl QuestionArgs {
    /// Validate the raw arguments into a `Question`.
    pub fn into_question(self) -> Result<Question> {
        if self.text.trim().is_empty() {
            return Err(QuizbankError::Validation(
                "question text must not be empty".to_string(),
            ));
        }

        if self.text.chars().count() > MAX_QUESTION_TEXT_LEN {
            return Err(QuizbankError::Validation(format!(
                "question text exceeds {} characters",
                MAX_QUESTION_TEXT_LEN
            )));
        }

        for correct in &self.correct {
            if !self.answers.contains(correct) {
                return Err(QuizbankError::Validation(format!(
                    "correct answer {:?} is not among the answer options",
                    correct
                )));
            }
        }

        Ok(Question {
            question_text: self.text,
            answers: self.answers,
            correct_answers: self.correct,
        })
    }
}
