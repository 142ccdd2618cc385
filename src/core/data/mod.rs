//! Data layer modules
//!
//! This module contains all database-related functionality:
//! - SQLite database operations for the question bank

pub mod database;

// Re-export main types
pub use database::{Database, DatabaseQuestion, Question};
