use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::BLANK_MARKER;
use crate::state::AppState;

pub fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let (position, total) = state.session.progress();
    let ratio = if total == 0 {
        0.0
    } else {
        position as f64 / total as f64
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(30, 30, 30)))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", position, total));
    f.render_widget(gauge, area);
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(question) = state.session.current_question() else {
        return;
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.push(phrase_line(question.phrase()));
    lines.push(Line::from(""));

    for (i, option) in state.options.iter().enumerate() {
        let label = (b'a' + (i % 26) as u8) as char;
        let selected = i == state.choice_cursor;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", marker)),
            Span::styled(format!("[{}] ", label), Style::default().fg(Color::Cyan)),
            Span::styled(option.clone(), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Question {} ", state.session.asked()));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Render the phrase, highlighting the blank marker if there is one.
fn phrase_line(phrase: &str) -> Line<'static> {
    let phrase_style = Style::default().add_modifier(Modifier::BOLD);
    match phrase.split_once(BLANK_MARKER) {
        Some((before, after)) => Line::from(vec![
            Span::raw("  "),
            Span::styled(before.to_string(), phrase_style),
            Span::styled(
                BLANK_MARKER.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(after.to_string(), phrase_style),
        ]),
        None => Line::from(vec![
            Span::raw("  "),
            Span::styled(phrase.to_string(), phrase_style),
        ]),
    }
}
