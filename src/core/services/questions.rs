//! Question service: business rules in front of the question store
//!
//! Enforces the duplicate guard on single inserts, orchestrates search and
//! update workflows, and performs the JSON seed import. The service borrows
//! a [`Database`] owned by the caller; it never manages the connection's
//! lifecycle itself.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::core::data::database::{Database, DatabaseQuestion, Question};
use crate::error::{QuizbankError, Result, SeedError};

/// The inner blob of one seed entry. Each element of the seed file is a
/// single-key mapping whose value is itself a JSON-encoded string of this
/// shape. Missing fields fall back to empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedQuestion {
    #[serde(default)]
    question_text: String,
    #[serde(default)]
    answer_text: Vec<String>,
    #[serde(default)]
    correct_answer_text: Vec<String>,
}

pub struct QuestionService<'a> {
    db: &'a Database,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// True iff a question with exactly this text is already stored.
    pub async fn question_exists(&self, text: &str) -> Result<bool> {
        let question = self.db.get_question_by_text(text).await?;
        Ok(question.is_some())
    }

    /// Insert a new question unless its text is already taken.
    ///
    /// The existence check and the insert are two separate statements;
    /// concurrent callers can both pass the check. The schema carries no
    /// uniqueness constraint because the import path must accept duplicates.
    pub async fn add_question(&self, question: Question) -> Result<DatabaseQuestion> {
        if self.question_exists(&question.question_text).await? {
            return Err(QuizbankError::DuplicateQuestion {
                text: question.question_text,
            });
        }

        self.db.insert_question(&question).await
    }

    /// Bulk-import every entry of the seed file, without duplicate checks.
    /// Returns the number of imported questions.
    pub async fn add_all_questions(&self, seed_path: &Path) -> Result<usize> {
        if !seed_path.exists() {
            return Err(SeedError::FileNotFound {
                path: seed_path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(seed_path).map_err(SeedError::Io)?;
        let entries: Vec<HashMap<String, String>> =
            serde_json::from_str(&content).map_err(SeedError::Parse)?;

        info!("Importing {} seed entries from {}", entries.len(), seed_path.display());

        let mut imported = 0;
        for (index, entry) in entries.iter().enumerate() {
            let blob = entry.values().next().ok_or(SeedError::InvalidEntry {
                index,
                reason: "entry has no value".to_string(),
            })?;

            let seed: SeedQuestion =
                serde_json::from_str(blob).map_err(|e| SeedError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;

            let question = Question {
                question_text: seed.question_text,
                answers: seed.answer_text,
                correct_answers: seed.correct_answer_text,
            };

            self.db.insert_question(&question).await?;
            imported += 1;
        }

        Ok(imported)
    }

    /// Fully overwrite the question at `id` with the new field values.
    pub async fn update_question(
        &self,
        id: i64,
        question: Question,
    ) -> Result<DatabaseQuestion> {
        let updated = self.db.update_question(id, &question).await?;
        if !updated {
            return Err(QuizbankError::QuestionNotFound { id });
        }

        Ok(DatabaseQuestion {
            id,
            question_text: question.question_text,
            answers: question.answers,
            correct_answers: question.correct_answers,
        })
    }

    /// Overwrite the first substring match for `query` (lowest id first).
    /// Returns `None` when nothing matches; that is not an error.
    pub async fn update_question_by_text(
        &self,
        query: &str,
        question: Question,
    ) -> Result<Option<DatabaseQuestion>> {
        let matches = self.search_questions(query).await?;

        let Some(first) = matches.into_iter().next() else {
            debug!("No question matches {:?}; nothing updated", query);
            return Ok(None);
        };

        let updated = self.update_question(first.id, question).await?;
        Ok(Some(updated))
    }

    pub async fn get_question(&self, id: i64) -> Result<DatabaseQuestion> {
        self.db
            .get_question(id)
            .await?
            .ok_or(QuizbankError::QuestionNotFound { id })
    }

    pub async fn get_questions(&self) -> Result<Vec<DatabaseQuestion>> {
        self.db.get_all_questions().await
    }

    pub async fn get_quantity(&self) -> Result<i64> {
        self.db.count_questions().await
    }

    /// Total number of redundant copies: every record in a text group of
    /// size > 1 counts, so groups of sizes {3,1,2} report 5.
    pub async fn get_duplicates(&self) -> Result<i64> {
        self.db.duplicate_count().await
    }

    /// Case-insensitive substring match on question text.
    pub async fn search_questions(&self, query: &str) -> Result<Vec<DatabaseQuestion>> {
        self.db.search_questions(query).await
    }
}
