use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionStatus;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank could not be located or read.
    #[error("question source unavailable: {}: {source}", path.display())]
    QuestionSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A session operation was called in a state that does not allow it.
    #[error("cannot {operation} while the session is {status}")]
    InvalidSessionState {
        operation: &'static str,
        status: SessionStatus,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot format report: {0}")]
    ReportFormat(#[from] serde_yaml::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl QuizError {
    pub(crate) fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        QuizError::QuestionSourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
