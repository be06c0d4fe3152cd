use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_welcome(f: &mut Frame, area: Rect, state: &AppState) {
    let total = state.session.total_questions();
    let order = if state.session.config().random_order {
        "random order"
    } else {
        "bank order"
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            state.bank_name.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} questions, {}", total, order)),
    ];

    if state.skipped_lines > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} malformed lines were skipped", state.skipped_lines),
            Style::default().fg(Color::Yellow),
        )));
    }


    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
