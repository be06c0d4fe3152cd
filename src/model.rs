use serde::{Deserialize, Serialize};

/// Marker inserted into a phrase where the option block was cut out.
pub const BLANK_MARKER: &str = "____";

/// A multiple-choice question. The first option is always the correct one,
/// so options must be shuffled before they are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    phrase: String,
    options: Vec<String>,
}

impl Question {
    /// Returns `None` when `options` is empty; a question needs a correct answer.
    pub fn new(phrase: impl Into<String>, options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            phrase: phrase.into(),
            options,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Options in bank order, correct answer first.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> &str {
        &self.options[0]
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option() == option
    }

    pub fn has_blank(&self) -> bool {
        self.phrase.contains(BLANK_MARKER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// 0 means every parsed question is asked.
    pub max_questions: usize,
    pub random_order: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_questions: 0,
            random_order: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResults {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score: u32,
}

impl QuizResults {
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 * 100.0 / self.total_questions as f64
    }
}

/// One submitted answer, kept for the results report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub phrase: String,
    pub selected: String,
    pub correct_option: String,
    pub correct: bool,
}
