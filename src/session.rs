use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::QuizError;
use crate::model::{AnswerRecord, Question, QuizResults, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::NotStarted => "not started",
            SessionStatus::InProgress => "in progress",
            SessionStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// One attempt at a quiz.
///
/// Questions live in a fixed array; `consumed` marks the ones already asked,
/// so the pool is never reallocated and parse order stays available.
#[derive(Debug)]
pub struct QuizSession<R: Rng> {
    questions: Vec<Question>,
    consumed: Vec<bool>,
    remaining: usize,
    config: SessionConfig,
    total_questions: usize,
    asked: usize,
    score: u32,
    correct_answers: usize,
    current: Option<usize>,
    status: SessionStatus,
    answers: Vec<AnswerRecord>,
    rng: R,
}

impl<R: Rng> QuizSession<R> {
    pub fn new(questions: Vec<Question>, config: SessionConfig, rng: R) -> Self {
        // Fixed before anything leaves the pool.
        let total_questions = if config.max_questions > 0 {
            config.max_questions.min(questions.len())
        } else {
            questions.len()
        };

        let status = if total_questions == 0 {
            SessionStatus::Finished
        } else {
            SessionStatus::NotStarted
        };

        info!(
            pool = questions.len(),
            total = total_questions,
            random = config.random_order,
            "quiz session created"
        );

        Self {
            consumed: vec![false; questions.len()],
            remaining: questions.len(),
            questions,
            config,
            total_questions,
            asked: 0,
            score: 0,
            correct_answers: 0,
            current: None,
            status,
            answers: Vec::new(),
            rng,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Number of questions presented so far, including the current one.
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Questions still in the pool.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.map(|idx| &self.questions[idx])
    }

    /// `(position, total)` of the current question, 1-based.
    pub fn progress(&self) -> (usize, usize) {
        (self.asked, self.total_questions)
    }

    /// Move on to the next question, or finish once the limit is reached.
    pub fn advance(&mut self) {
        if self.status == SessionStatus::Finished {
            return;
        }

        if self.asked >= self.total_questions {
            self.finish();
            return;
        }

        let Some(idx) = self.take_next() else {
            self.finish();
            return;
        };

        self.asked += 1;
        self.current = Some(idx);
        self.status = SessionStatus::InProgress;
        debug!(
            position = self.asked,
            total = self.total_questions,
            index = idx,
            "presenting question"
        );
    }

    /// A fresh shuffle of the current question's options. The question keeps
    /// its own order.
    pub fn display_options(&mut self) -> Result<Vec<String>, QuizError> {
        let idx = self.current.ok_or(QuizError::InvalidSessionState {
            operation: "display options",
            status: self.status,
        })?;

        let mut options = self.questions[idx].options().to_vec();
        options.shuffle(&mut self.rng);
        Ok(options)
    }

    /// Record an answer for the current question and advance.
    /// Returns whether the answer was correct.
    pub fn submit_answer(&mut self, selected: &str) -> Result<bool, QuizError> {
        let idx = match (self.status, self.current) {
            (SessionStatus::InProgress, Some(idx)) => idx,
            _ => {
                return Err(QuizError::InvalidSessionState {
                    operation: "submit an answer",
                    status: self.status,
                })
            }
        };

        let question = &self.questions[idx];
        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
            self.correct_answers += 1;
        }

        self.answers.push(AnswerRecord {
            phrase: question.phrase().to_string(),
            selected: selected.to_string(),
            correct_option: question.correct_option().to_string(),
            correct,
        });
        debug!(position = self.asked, correct, "answer recorded");

        self.advance();
        Ok(correct)
    }

    pub fn results(&self) -> Result<QuizResults, QuizError> {
        if self.status != SessionStatus::Finished {
            return Err(QuizError::InvalidSessionState {
                operation: "read results",
                status: self.status,
            });
        }

        Ok(QuizResults {
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            score: self.score,
        })
    }

    fn take_next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        // The n-th unconsumed question in parse order.
        let nth = if self.config.random_order {
            self.rng.gen_range(0..self.remaining)
        } else {
            0
        };

        let idx = self
            .consumed
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(i, _)| i)
            .nth(nth)?;

        self.consumed[idx] = true;
        self.remaining -= 1;
        Some(idx)
    }

    fn finish(&mut self) {
        self.current = None;
        self.status = SessionStatus::Finished;
        info!(
            total = self.total_questions,
            correct = self.correct_answers,
            score = self.score,
            "quiz finished"
        );
    }
}
