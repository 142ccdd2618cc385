//! Error handling for the quizbank application
//!
//! This module provides a hierarchical error system with proper error handling
//! and user-friendly error messages. All errors are typed and can be handled
//! appropriately by different parts of the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizbankError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Seed data error: {0}")]
    Seed(#[from] SeedError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("A question with this text already exists: {text}")]
    DuplicateQuestion { text: String },

    #[error("No question found with id {id}")]
    QuestionNotFound { id: i64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("Schema setup failed: {0}")]
    Schema(String),

    #[error("Stored answer data is not valid JSON: {0}")]
    CorruptRecord(serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed entry {index} is malformed: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    Environment(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, QuizbankError>;

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::Query(err)
    }
}

impl From<rusqlite::Error> for QuizbankError {
    fn from(err: rusqlite::Error) -> Self {
        QuizbankError::Database(DatabaseError::from(err))
    }
}

impl From<std::io::Error> for QuizbankError {
    fn from(err: std::io::Error) -> Self {
        QuizbankError::Seed(SeedError::Io(err))
    }
}

impl From<toml::de::Error> for QuizbankError {
    fn from(err: toml::de::Error) -> Self {
        QuizbankError::Config(ConfigError::InvalidFormat(err))
    }
}
