use quizbank::core::{Database, Question};

pub async fn create_test_db() -> Database {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizbank_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    Database::new(&path)
        .await
        .expect("failed to create test database")
}

pub fn question(text: &str) -> Question {
    Question {
        question_text: text.to_string(),
        answers: vec!["yes".to_string(), "no".to_string()],
        correct_answers: vec!["yes".to_string()],
    }
}
