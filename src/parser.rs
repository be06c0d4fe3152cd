use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Question, BLANK_MARKER};

fn question_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*)\{(.+)\}(.*)$").expect("question pattern is valid")
    })
}

/// Parse a single `prefix{correct, other, ...}suffix` line.
///
/// The prefix is greedy, so with several brace blocks the last one holds the
/// options. A non-empty suffix turns the question into a fill-in-the-blank.
pub fn parse_question(line: &str) -> Option<Question> {
    let caps = question_pattern().captures(line)?;

    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let block = caps.get(2).map_or("", |m| m.as_str());
    let suffix = caps.get(3).map_or("", |m| m.as_str());

    let phrase = if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{}{}{}", prefix, BLANK_MARKER, suffix)
    };

    // Trailing empty segments are dropped before trimming, so "a,b," has two
    // options and "," has none. Inner empty entries ("a,,b") are kept.
    let mut parts: Vec<&str> = block.split(',').collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    let options: Vec<String> = parts.iter().map(|o| o.trim().to_string()).collect();

    Question::new(phrase, options)
}

#[derive(Debug, Clone, Default)]
pub struct ParseSummary {
    pub questions: Vec<Question>,
    /// Non-blank lines that did not match the question format.
    pub skipped: usize,
}

pub fn parse_bank(content: &str) -> ParseSummary {
    let mut summary = ParseSummary::default();

    for (idx, line) in content.lines().enumerate() {
        match parse_question(line) {
            Some(q) => summary.questions.push(q),
            None => {
                if !line.trim().is_empty() {
                    debug!(line = idx + 1, text = line, "skipping malformed question line");
                    summary.skipped += 1;
                }
            }
        }
    }

    summary
}

pub fn parse_questions(content: &str) -> Vec<Question> {
    parse_bank(content).questions
}
