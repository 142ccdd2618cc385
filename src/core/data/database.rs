//! SQLite database operations for the question bank
//!
//! This module handles all database operations for storing and retrieving
//! questions, including point lookups, substring search and the grouped
//! duplicate aggregation. Answer lists are stored as JSON-encoded TEXT
//! columns since SQLite has no array type.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DatabaseError, Result};

const CURRENT_DB_VERSION: u32 = 1;

pub struct Database {
    conn: Connection,
}

/// A question as supplied by a caller, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question_text: String,
    pub answers: Vec<String>,
    pub correct_answers: Vec<String>,
}

/// A persisted question with its system-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseQuestion {
    pub id: i64,
    pub question_text: String,
    pub answers: Vec<String>,
    pub correct_answers: Vec<String>,
}

/// Raw row shape before the JSON answer columns are decoded.
struct QuestionRow {
    id: i64,
    question_text: String,
    answers: String,
    correct_answers: String,
}

impl QuestionRow {
    fn decode(self) -> Result<DatabaseQuestion> {
        let answers =
            serde_json::from_str(&self.answers).map_err(DatabaseError::CorruptRecord)?;
        let correct_answers =
            serde_json::from_str(&self.correct_answers).map_err(DatabaseError::CorruptRecord)?;

        Ok(DatabaseQuestion {
            id: self.id,
            question_text: self.question_text,
            answers,
            correct_answers,
        })
    }
}

const SELECT_COLUMNS: &str = "id, question_text, answers, correct_answers";

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<QuestionRow> {
    Ok(QuestionRow {
        id: row.get(0)?,
        question_text: row.get(1)?,
        answers: row.get(2)?,
        correct_answers: row.get(3)?,
    })
}

impl Database {
    pub async fn new(db_path: &Path) -> Result<Self> {
        info!("Opening database at: {}", db_path.display());

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatabaseError::Schema(e.to_string()))?;
        }

        let mut conn = Connection::open(db_path).map_err(DatabaseError::Connection)?;

        // Enable WAL mode for better concurrent access
        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Check and upgrade database if needed
        let mut user_pragma = conn.prepare("PRAGMA user_version")?;
        let existing_user_version: u32 = user_pragma.query_row([], |row| row.get(0))?;
        drop(user_pragma);

        if existing_user_version < CURRENT_DB_VERSION {
            Self::upgrade_database(&mut conn, existing_user_version)?;
        }

        Ok(Database { conn })
    }

    fn upgrade_database(conn: &mut Connection, existing_version: u32) -> Result<()> {
        debug!(
            "Upgrading database from version {} to {}",
            existing_version, CURRENT_DB_VERSION
        );

        if existing_version == 0 {
            let tx = conn.transaction()?;

            tx.pragma_update(None, "user_version", CURRENT_DB_VERSION)?;

            tx.execute_batch(
                r#"
                CREATE TABLE questions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    question_text TEXT NOT NULL,
                    answers TEXT NOT NULL,
                    correct_answers TEXT NOT NULL
                );

                CREATE INDEX idx_questions_text ON questions(question_text);
            "#,
            )?;

            tx.commit()?;
        }

        info!("Database upgraded successfully");
        Ok(())
    }

    pub async fn insert_question(&self, question: &Question) -> Result<DatabaseQuestion> {
        let answers = serde_json::to_string(&question.answers)
            .map_err(DatabaseError::CorruptRecord)?;
        let correct_answers = serde_json::to_string(&question.correct_answers)
            .map_err(DatabaseError::CorruptRecord)?;

        self.conn.execute(
            "INSERT INTO questions (question_text, answers, correct_answers) VALUES (?1, ?2, ?3)",
            params![question.question_text, answers, correct_answers],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(DatabaseQuestion {
            id,
            question_text: question.question_text.clone(),
            answers: question.answers.clone(),
            correct_answers: question.correct_answers.clone(),
        })
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<DatabaseQuestion>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM questions WHERE id = ?1"
        ))?;

        match stmt.query_row(params![id], map_row) {
            Ok(row) => Ok(Some(row.decode()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Exact-text lookup. Returns the lowest-id match when duplicates exist.
    pub async fn get_question_by_text(&self, text: &str) -> Result<Option<DatabaseQuestion>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM questions WHERE question_text = ?1 ORDER BY id LIMIT 1"
        ))?;

        match stmt.query_row(params![text], map_row) {
            Ok(row) => Ok(Some(row.decode()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_all_questions(&self) -> Result<Vec<DatabaseQuestion>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM questions ORDER BY id"
        ))?;

        let rows = stmt
            .query_map([], map_row)?
            .collect::<rusqlite::Result<Vec<QuestionRow>>>()?;

        rows.into_iter().map(QuestionRow::decode).collect()
    }

    /// Case-insensitive substring search on question text, ascending id.
    pub async fn search_questions(&self, query: &str) -> Result<Vec<DatabaseQuestion>> {
        debug!("Searching questions for substring: {:?}", query);

        let pattern = format!("%{}%", query.to_lowercase());
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM questions WHERE LOWER(question_text) LIKE ?1 ORDER BY id"
        ))?;

        let rows = stmt
            .query_map(params![pattern], map_row)?
            .collect::<rusqlite::Result<Vec<QuestionRow>>>()?;

        rows.into_iter().map(QuestionRow::decode).collect()
    }

    /// Full overwrite of the record at `id`. Returns false when no row exists.
    pub async fn update_question(&self, id: i64, question: &Question) -> Result<bool> {
        let answers = serde_json::to_string(&question.answers)
            .map_err(DatabaseError::CorruptRecord)?;
        let correct_answers = serde_json::to_string(&question.correct_answers)
            .map_err(DatabaseError::CorruptRecord)?;

        let updated = self.conn.execute(
            "UPDATE questions SET question_text = ?1, answers = ?2, correct_answers = ?3 WHERE id = ?4",
            params![question.question_text, answers, correct_answers, id],
        )?;

        Ok(updated > 0)
    }

    pub async fn count_questions(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;

        Ok(count)
    }

    /// Total number of records sharing a question text with at least one
    /// other record: groups of sizes {3,1,2} yield 3+2=5, not the group
    /// count. 0 when every text is unique.
    pub async fn duplicate_count(&self) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            r#"
            SELECT COALESCE(SUM(c), 0) FROM (
                SELECT COUNT(*) AS c
                FROM questions
                GROUP BY question_text
                HAVING COUNT(*) > 1
            )
            "#,
            [],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}
