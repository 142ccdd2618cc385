mod common;

use std::io::Write;

use common::{create_test_db, question};
use quizbank::core::{Question, QuestionService};
use quizbank::error::{QuizbankError, SeedError};

fn seed_entry(text: &str, answers: &[&str], correct: &[&str]) -> serde_json::Value {
    let blob = serde_json::json!({
        "questionText": text,
        "answerText": answers,
        "correctAnswerText": correct,
    })
    .to_string();
    serde_json::json!({ "question": blob })
}

fn write_seed_file(entries: &[serde_json::Value]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create seed file");
    let content = serde_json::to_string(&entries).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_add_then_get_roundtrip() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let q = Question {
        question_text: "Largest planet?".to_string(),
        answers: vec!["Mars".to_string(), "Jupiter".to_string()],
        correct_answers: vec!["Jupiter".to_string()],
    };
    let stored = service.add_question(q.clone()).await.unwrap();

    let fetched = service.get_question(stored.id).await.unwrap();
    assert_eq!(fetched.question_text, q.question_text);
    assert_eq!(fetched.answers, q.answers);
    assert_eq!(fetched.correct_answers, q.correct_answers);
}

#[tokio::test]
async fn test_question_exists() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    assert!(!service.question_exists("anything").await.unwrap());

    service.add_question(question("anything")).await.unwrap();
    assert!(service.question_exists("anything").await.unwrap());
    // Existence is exact-match, not substring
    assert!(!service.question_exists("any").await.unwrap());
}

#[tokio::test]
async fn test_add_rejects_duplicate_text() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    service.add_question(question("dupe")).await.unwrap();

    let result = service.add_question(question("dupe")).await;
    assert!(matches!(
        result,
        Err(QuizbankError::DuplicateQuestion { ref text }) if text == "dupe"
    ));

    // No second record was created
    assert_eq!(service.get_quantity().await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_question_missing_is_not_found() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let result = service.get_question(7).await;
    assert!(matches!(
        result,
        Err(QuizbankError::QuestionNotFound { id: 7 })
    ));
}

#[tokio::test]
async fn test_update_question_overwrites() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let stored = service.add_question(question("before")).await.unwrap();
    let updated = service
        .update_question(stored.id, question("after"))
        .await
        .unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.question_text, "after");

    let fetched = service.get_question(stored.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_question_missing_is_not_found() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let result = service.update_question(99, question("ghost")).await;
    assert!(matches!(
        result,
        Err(QuizbankError::QuestionNotFound { id: 99 })
    ));
}

#[tokio::test]
async fn test_update_by_text_no_match_returns_none() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    service.add_question(question("untouched")).await.unwrap();

    let result = service
        .update_question_by_text("missing", question("new"))
        .await
        .unwrap();
    assert!(result.is_none());

    // No writes happened
    let all = service.get_questions().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].question_text, "untouched");
}

#[tokio::test]
async fn test_update_by_text_updates_only_first_match() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let first = service.add_question(question("apple pie")).await.unwrap();
    let second = service.add_question(question("apple tart")).await.unwrap();

    let updated = service
        .update_question_by_text("apple", question("banana bread"))
        .await
        .unwrap()
        .unwrap();

    // The lowest-id match was overwritten, the other left untouched
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.question_text, "banana bread");

    let untouched = service.get_question(second.id).await.unwrap();
    assert_eq!(untouched.question_text, "apple tart");
}

#[tokio::test]
async fn test_search_matches_case_insensitive_substrings() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    service.add_question(question("Cat is here")).await.unwrap();
    service.add_question(question("concatenate")).await.unwrap();
    service.add_question(question("CATASTROPHE")).await.unwrap();
    service.add_question(question("dog")).await.unwrap();

    let results = service.search_questions("cat").await.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|q| !q.question_text.contains("dog")));
}

#[tokio::test]
async fn test_quantity_matches_listing_length() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    assert_eq!(service.get_quantity().await.unwrap(), 0);
    assert!(service.get_questions().await.unwrap().is_empty());

    for i in 0..4 {
        service
            .add_question(question(&format!("q{}", i)))
            .await
            .unwrap();
    }

    let all = service.get_questions().await.unwrap();
    assert_eq!(service.get_quantity().await.unwrap(), all.len() as i64);
}

#[tokio::test]
async fn test_duplicates_counts_redundant_copies() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    assert_eq!(service.get_duplicates().await.unwrap(), 0);

    // Seed import is the only path that can produce duplicates
    let entries = vec![
        seed_entry("thrice", &["a"], &["a"]),
        seed_entry("thrice", &["a"], &["a"]),
        seed_entry("thrice", &["a"], &["a"]),
        seed_entry("once", &["a"], &["a"]),
        seed_entry("twice", &["a"], &["a"]),
        seed_entry("twice", &["a"], &["a"]),
    ];
    let file = write_seed_file(&entries);
    service.add_all_questions(file.path()).await.unwrap();

    assert_eq!(service.get_duplicates().await.unwrap(), 5);
}

// --- Seed import tests ---

#[tokio::test]
async fn test_import_inserts_every_entry_including_duplicates() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let entries = vec![
        seed_entry("What is 1+1?", &["1", "2"], &["2"]),
        seed_entry("What is 1+1?", &["1", "2"], &["2"]),
        seed_entry("Capital of France?", &["Paris", "Rome"], &["Paris"]),
    ];
    let file = write_seed_file(&entries);

    let imported = service.add_all_questions(file.path()).await.unwrap();
    assert_eq!(imported, 3);

    // No duplicate rejection on the import path
    assert_eq!(service.get_quantity().await.unwrap(), 3);
    assert_eq!(service.get_duplicates().await.unwrap(), 2);
}

#[tokio::test]
async fn test_import_defaults_missing_fields() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let entries = vec![serde_json::json!({ "question": "{}" })];
    let file = write_seed_file(&entries);

    service.add_all_questions(file.path()).await.unwrap();

    let all = service.get_questions().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].question_text, "");
    assert!(all[0].answers.is_empty());
    assert!(all[0].correct_answers.is_empty());
}

#[tokio::test]
async fn test_import_missing_file_fails() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let result = service
        .add_all_questions(std::path::Path::new("/nonexistent/seed.json"))
        .await;
    assert!(matches!(
        result,
        Err(QuizbankError::Seed(SeedError::FileNotFound { .. }))
    ));
}

#[tokio::test]
async fn test_import_malformed_outer_json_fails() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json at all").unwrap();

    let result = service.add_all_questions(file.path()).await;
    assert!(matches!(
        result,
        Err(QuizbankError::Seed(SeedError::Parse(_)))
    ));
}

#[tokio::test]
async fn test_import_malformed_inner_blob_fails() {
    let db = create_test_db().await;
    let service = QuestionService::new(&db);

    let entries = vec![serde_json::json!({ "question": "{broken" })];
    let file = write_seed_file(&entries);

    let result = service.add_all_questions(file.path()).await;
    assert!(matches!(
        result,
        Err(QuizbankError::Seed(SeedError::InvalidEntry { index: 0, .. }))
    ));
}
