use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let answered = state.session.answers().len();
    let correct = state.session.correct_answers();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("✓ {} correct", correct),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✗ {} wrong", answered.saturating_sub(correct)),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            format!("· {} left", state.session.total_questions().saturating_sub(answered)),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    match state.last_answer {
        Some(true) => {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("last: right", Style::default().fg(Color::Green)));
        }
        Some(false) => {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("last: wrong", Style::default().fg(Color::Red)));
        }
        None => {}
    }

    let widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
