//! Core functionality modules
//!
//! This module contains all core business logic organized into logical layers:
//! - `data`: Database operations and data persistence
//! - `services`: Business rules on top of the data layer

pub mod data;
pub mod services;

// Re-export commonly used types for convenience
pub use data::{Database, DatabaseQuestion, Question};
pub use services::QuestionService;
