use std::fs;
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::QuizError;
use crate::model::{AnswerRecord, QuizResults};

/// Where a finished session came from and when it ran.
#[derive(Debug, Clone, Default)]
pub struct ReportMeta {
    pub source: String,
    pub hash: String,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    quiz: QuizSection<'a>,
    results: &'a QuizResults,
    answers: Vec<AnswerEntry<'a>>,
}

#[derive(Serialize)]
struct QuizSection<'a> {
    source: &'a str,
    hash: &'a str,
    started_at: &'a str,
    finished_at: &'a str,
    duration: String,
}

#[derive(Serialize)]
struct AnswerEntry<'a> {
    number: usize,
    phrase: &'a str,
    selected: &'a str,
    correct_option: &'a str,
    correct: bool,
}

pub fn build_report_yaml(
    meta: &ReportMeta,
    results: &QuizResults,
    answers: &[AnswerRecord],
) -> Result<String, QuizError> {
    let report = Report {
        quiz: QuizSection {
            source: &meta.source,
            hash: &meta.hash,
            started_at: meta.started_at.as_deref().unwrap_or("unknown"),
            finished_at: meta.finished_at.as_deref().unwrap_or("unknown"),
            duration: compute_duration(&meta.started_at, &meta.finished_at),
        },
        results,
        answers: answers
            .iter()
            .enumerate()
            .map(|(i, a)| AnswerEntry {
                number: i + 1,
                phrase: &a.phrase,
                selected: &a.selected,
                correct_option: &a.correct_option,
                correct: a.correct,
            })
            .collect(),
    };

    Ok(serde_yaml::to_string(&report)?)
}

pub fn export_report(
    path: &Path,
    meta: &ReportMeta,
    results: &QuizResults,
    answers: &[AnswerRecord],
) -> Result<(), QuizError> {
    let yaml = build_report_yaml(meta, results, answers)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| QuizError::Report {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    atomic_write(path, &yaml)
}

fn atomic_write(path: &Path, content: &str) -> Result<(), QuizError> {
    let report_err = |source| QuizError::Report {
        path: path.to_path_buf(),
        source,
    };
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(report_err)?;
    fs::rename(&tmp, path).map_err(report_err)
}

fn compute_duration(started: &Option<String>, finished: &Option<String>) -> String {
    if let (Some(s), Some(e)) = (started, finished) {
        if let (Ok(start), Ok(end)) = (
            chrono::DateTime::parse_from_rfc3339(s),
            chrono::DateTime::parse_from_rfc3339(e),
        ) {
            let secs = (end - start).num_seconds().max(0);
            let h = secs / 3600;
            let m = (secs % 3600) / 60;
            let s = secs % 60;
            return format!("{:02}:{:02}:{:02}", h, m, s);
        }
    }
    "unknown".to_string()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn compute_str_hash(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    format!("sha256:{}", hex_encode(&hasher.finalize()))
}
