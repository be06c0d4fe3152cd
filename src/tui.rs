use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::error;

use crate::error::QuizError;
use crate::report;
use crate::state::*;

/// Run the quiz until the user quits. Returns the final state so the caller
/// can print the tally.
pub fn run_tui(mut state: AppState, export: Option<PathBuf>) -> Result<AppState, QuizError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut state, export.as_deref());

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|_| state)
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    export: Option<&Path>,
) -> Result<(), QuizError> {
    let mut exported = false;

    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, state)?;
                }
            }
        }

        if state.screen == Screen::Results && !exported {
            exported = true;
            if let Some(path) = export {
                if let Err(e) = state.export_report(path) {
                    error!("{}", e);
                    state.export_error = Some(e);
                }
            }
        }
    }

    Ok(())
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Result<(), QuizError> {
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return Ok(());
    }

    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.push_dialog(Dialog::ConfirmQuit);
        return Ok(());
    }

    match state.screen {
        Screen::Welcome => handle_welcome_key(key, state),
        Screen::Question => handle_question_key(key, state),
        Screen::Results => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                state.should_quit = true;
            }
            Ok(())
        }
    }
}

fn handle_welcome_key(key: KeyEvent, state: &mut AppState) -> Result<(), QuizError> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => state.start_quiz()?,
        KeyCode::Char('a') => state.push_dialog(Dialog::About),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('q') | KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        _ => {}
    }
    Ok(())
}

fn handle_question_key(key: KeyEvent, state: &mut AppState) -> Result<(), QuizError> {
    match key.code {
        KeyCode::Up => state.cursor_up(),
        KeyCode::Down => state.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => state.select_at_cursor()?,
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        KeyCode::Char(c) if c.is_ascii_lowercase() => {
            let idx = (c as u8 - b'a') as usize;
            if idx < state.options.len() {
                state.choice_cursor = idx;
                state.select_choice(idx)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let dialog = state.top_dialog().cloned();
    match dialog {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::About) | Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}
