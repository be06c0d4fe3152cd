use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::SessionConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_questions: usize,
    pub random_order: bool,
    /// Fixed RNG seed, for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            max_questions: session.max_questions,
            random_order: session.random_order,
            seed: None,
        }
    }
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_questions: self.max_questions,
            random_order: self.random_order,
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "quizline")
}

pub fn default_config_path() -> PathBuf {
    project_dirs()
        .map(|pd| pd.config_dir().join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from("quizline.yaml"))
}

pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|pd| pd.data_local_dir().join("quizline.log"))
        .unwrap_or_else(|| PathBuf::from("quizline.log"))
}

/// Load a config file. A missing file is not an error and yields `None`.
pub fn load_config(path: &Path) -> Result<Option<Config>, QuizError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| QuizError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let cfg = serde_yaml::from_str(&content).map_err(|e| QuizError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Some(cfg))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<(), QuizError> {
    let err = |message: String| QuizError::Config {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| err(e.to_string()))?;
    }
    let yaml = serde_yaml::to_string(cfg).map_err(|e| err(e.to_string()))?;
    fs::write(path, yaml).map_err(|e| err(e.to_string()))
}
