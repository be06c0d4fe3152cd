use std::path::Path;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::error::QuizError;
use crate::model::{QuizResults, SessionConfig};
use crate::report::{self, ReportMeta};
use crate::session::QuizSession;
use crate::source::LoadedBank;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Welcome,
    Question,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    About,
    ConfirmQuit,
    Help,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub session: QuizSession<StdRng>,
    pub bank_name: String,
    pub bank_hash: String,
    pub skipped_lines: usize,
    /// Shuffled options of the current question, in display order.
    pub options: Vec<String>,
    pub choice_cursor: usize,
    /// Whether the previous answer was correct.
    pub last_answer: Option<bool>,
    pub dialog_stack: Vec<Dialog>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    /// Set when writing the results report failed; reported after the TUI exits.
    pub export_error: Option<QuizError>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(bank: LoadedBank, config: SessionConfig, rng: StdRng) -> Self {
        let bank_name = bank.file_name();
        Self {
            screen: Screen::Welcome,
            session: QuizSession::new(bank.summary.questions, config, rng),
            bank_name,
            bank_hash: bank.hash,
            skipped_lines: bank.summary.skipped,
            options: Vec::new(),
            choice_cursor: 0,
            last_answer: None,
            dialog_stack: Vec::new(),
            started_at: None,
            finished_at: None,
            export_error: None,
            should_quit: false,
        }
    }

    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        if self.screen != Screen::Welcome {
            return Ok(());
        }
        self.started_at = Some(chrono::Utc::now().to_rfc3339());
        self.session.advance();
        self.show_current()
    }

    /// Answer the current question with the option at `idx` in display order.
    pub fn select_choice(&mut self, idx: usize) -> Result<(), QuizError> {
        let Some(selected) = self.options.get(idx).cloned() else {
            return Ok(());
        };
        let correct = self.session.submit_answer(&selected)?;
        self.last_answer = Some(correct);
        self.show_current()
    }

    pub fn select_at_cursor(&mut self) -> Result<(), QuizError> {
        self.select_choice(self.choice_cursor)
    }

    pub fn cursor_up(&mut self) {
        self.choice_cursor = self.choice_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.choice_cursor + 1 < self.options.len() {
            self.choice_cursor += 1;
        }
    }

    /// Sync the screen and displayed options with the session.
    fn show_current(&mut self) -> Result<(), QuizError> {
        self.choice_cursor = 0;
        if self.session.is_finished() {
            self.options.clear();
            self.finished_at = Some(chrono::Utc::now().to_rfc3339());
            self.screen = Screen::Results;
            debug!("showing results");
        } else {
            self.options = self.session.display_options()?;
            self.screen = Screen::Question;
        }
        Ok(())
    }

    pub fn results(&self) -> Result<QuizResults, QuizError> {
        self.session.results()
    }

    pub fn report_meta(&self) -> ReportMeta {
        ReportMeta {
            source: self.bank_name.clone(),
            hash: self.bank_hash.clone(),
            started_at: self.started_at.clone(),
            finished_at: self.finished_at.clone(),
        }
    }

    /// Write the results report of a finished quiz to `path`.
    pub fn export_report(&self, path: &Path) -> Result<(), QuizError> {
        let results = self.results()?;
        report::export_report(path, &self.report_meta(), &results, self.session.answers())?;
        info!(path = %path.display(), "results exported");
        Ok(())
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
