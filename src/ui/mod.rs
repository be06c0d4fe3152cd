pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod question;
pub mod result;
pub mod statusbar;
pub mod titlebar;
pub mod welcome;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.screen {
        Screen::Welcome => {
            let (main, bar) = layout::split_keybar(area);
            welcome::draw_welcome(f, main, state);
            keybar::draw_keybar(f, bar, state);
        }
        Screen::Question => {
            draw_question_screen(f, area, state);
        }
        Screen::Results => {
            let (main, bar) = layout::split_keybar(area);
            result::draw_results(f, main, state);
            keybar::draw_keybar(f, bar, state);
        }
    }

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_question_screen(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    question::draw_progress(f, layout.progress, state);
    question::draw_question(f, layout.main, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
