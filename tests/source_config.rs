use std::fs;

use quizline::config::{load_config, save_config, Config};
use quizline::source::{load_bank, resolve_source};
use quizline::QuizError;
use tempfile::tempdir;

#[test]
fn test_resolve_file_path() {
    let dir = tempdir().unwrap();
    let bank = dir.path().join("grammar.txt");
    fs::write(&bank, "Q {a, b}\n").unwrap();

    let resolved = resolve_source(bank.to_str().unwrap()).unwrap();
    assert_eq!(resolved, bank);
}

#[test]
fn test_resolve_directory_prefers_questions_txt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("questions.txt"), "Q {a, b}\n").unwrap();
    fs::write(dir.path().join("other.txt"), "Q {c, d}\n").unwrap();

    let resolved = resolve_source(dir.path().to_str().unwrap()).unwrap();
    assert_eq!(resolved.file_name().unwrap(), "questions.txt");
}

#[test]
fn test_resolve_directory_with_single_bank() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("verbs.txt"), "Q {a, b}\n").unwrap();
    fs::write(dir.path().join("notes.md"), "# not a bank\n").unwrap();

    let resolved = resolve_source(dir.path().to_str().unwrap()).unwrap();
    assert_eq!(resolved.file_name().unwrap(), "verbs.txt");
}

#[test]
fn test_resolve_directory_with_several_banks_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Q {a, b}\n").unwrap();
    fs::write(dir.path().join("b.txt"), "Q {c, d}\n").unwrap();

    let err = resolve_source(dir.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, QuizError::QuestionSourceUnavailable { .. }));
    assert!(err.to_string().contains("a.txt"));
}

#[test]
fn test_missing_source_is_unavailable() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = resolve_source(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, QuizError::QuestionSourceUnavailable { .. }));

    let err = load_bank(&missing).unwrap_err();
    assert!(matches!(err, QuizError::QuestionSourceUnavailable { .. }));
}

#[test]
fn test_load_fixture_bank() {
    let bank = load_bank(std::path::Path::new("fixtures/questions.txt")).unwrap();

    assert_eq!(bank.file_name(), "questions.txt");
    assert_eq!(bank.summary.questions.len(), 6);
    assert!(bank.hash.starts_with("sha256:"));
    assert_eq!(bank.hash.len(), "sha256:".len() + 64);
}

#[test]
fn test_missing_config_is_none() {
    let dir = tempdir().unwrap();
    let loaded = load_config(&dir.path().join("config.yaml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_config_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let cfg = Config {
        max_questions: 2,
        random_order: false,
        seed: Some(99),
    };

    save_config(&path, &cfg).unwrap();
    let loaded = load_config(&path).unwrap().unwrap();
    assert_eq!(loaded, cfg);

    let session = loaded.session_config();
    assert_eq!(session.max_questions, 2);
    assert!(!session.random_order);
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_questions: 5\n").unwrap();

    let loaded = load_config(&path).unwrap().unwrap();
    assert_eq!(loaded.max_questions, 5);
    assert_eq!(loaded.random_order, Config::default().random_order);
    assert_eq!(loaded.seed, None);
}

#[test]
fn test_corrupt_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "max_questions: [not, a, number\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, QuizError::Config { .. }));
}
