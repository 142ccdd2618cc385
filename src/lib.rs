pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use config::Config;
pub use core::{Database, DatabaseQuestion, Question, QuestionService};
pub use error::{QuizbankError, Result};
