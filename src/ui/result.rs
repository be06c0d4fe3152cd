use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from(""), Line::from("")];

    match state.results() {
        Ok(results) => {
            let (headline, color) = if results.total_questions == 0 {
                ("No questions to ask", Color::Yellow)
            } else if results.correct_answers == results.total_questions {
                ("✓  Perfect Score", Color::Green)
            } else {
                ("Quiz Finished", Color::Cyan)
            };
            lines.push(Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "Questions: {}",
                results.total_questions
            )));
            lines.push(Line::from(format!(
                "Correct answers: {}",
                results.correct_answers
            )));
            lines.push(Line::from(format!("Score: {}", results.score)));
            lines.push(Line::from(format!(
                "({:.0}%)",
                results.percentage()
            )));
        }
        Err(e) => {
            lines.push(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
    }


    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
