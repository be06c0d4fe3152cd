use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::QuizError;
use crate::parser::{self, ParseSummary};
use crate::report::compute_str_hash;

/// File looked up first when a directory is given.
pub const DEFAULT_BANK_NAME: &str = "questions.txt";

fn not_found(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, msg)
}

/// Resolve a CLI argument to a question bank file.
///
/// A file is used as-is. A directory must hold `questions.txt` or exactly one
/// `.txt` file.
pub fn resolve_source(path: &str) -> Result<PathBuf, QuizError> {
    let path = Path::new(path).to_path_buf();
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| QuizError::source_unavailable(&path, e))?
            .join(path)
    } else {
        path
    };

    if path.is_file() {
        Ok(path)
    } else if path.is_dir() {
        find_bank_file(&path)
    } else {
        Err(QuizError::source_unavailable(
            &path,
            not_found("path not found".to_string()),
        ))
    }
}

fn find_bank_file(dir: &Path) -> Result<PathBuf, QuizError> {
    let default = dir.join(DEFAULT_BANK_NAME);
    if default.is_file() {
        return Ok(default);
    }

    let entries = fs::read_dir(dir).map_err(|e| QuizError::source_unavailable(dir, e))?;

    let mut txt_files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| QuizError::source_unavailable(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            txt_files.push(path);
        }
    }
    txt_files.sort();

    match txt_files.len() {
        0 => Err(QuizError::source_unavailable(
            dir,
            not_found("no .txt question bank in directory".to_string()),
        )),
        1 => Ok(txt_files.remove(0)),
        _ => {
            let names: Vec<String> = txt_files
                .iter()
                .map(|p| p.file_name().unwrap_or_default().to_string_lossy().to_string())
                .collect();
            Err(QuizError::source_unavailable(
                dir,
                not_found(format!(
                    "multiple question banks found, pick one of: {}",
                    names.join(", ")
                )),
            ))
        }
    }
}

pub fn read_bank(path: &Path) -> Result<String, QuizError> {
    debug!(path = %path.display(), "reading question bank");
    fs::read_to_string(path).map_err(|e| QuizError::source_unavailable(path, e))
}

/// A parsed question bank and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub path: PathBuf,
    /// `sha256:<hex>` of the file content.
    pub hash: String,
    pub summary: ParseSummary,
}

impl LoadedBank {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Read and parse a bank in one go.
pub fn load_bank(path: &Path) -> Result<LoadedBank, QuizError> {
    let content = read_bank(path)?;
    let summary = parser::parse_bank(&content);
    info!(
        path = %path.display(),
        questions = summary.questions.len(),
        skipped = summary.skipped,
        "question bank loaded"
    );
    Ok(LoadedBank {
        path: path.to_path_buf(),
        hash: compute_str_hash(&content),
        summary,
    })
}
