use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::Explanation;
use crate::models::Question;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    correct: bool,
    explanation: Explanation,
) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_verdict(frame, chunks[0], question, correct);
    render_explanation(frame, chunks[1], question, explanation);
    render_controls(frame, chunks[2], explanation);
}

fn render_verdict(frame: &mut Frame, area: Rect, question: &Question, correct: bool) {
    let line = if correct {
        Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(Span::styled(
            format!("Wrong! The answer is {}.", question.correct_answer),
            Style::default().fg(Color::Red).bold(),
        ))
    };

    let widget = Paragraph::new(vec![
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        line,
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_explanation(frame: &mut Frame, area: Rect, question: &Question, explanation: Explanation) {
    let content = match explanation {
        Explanation::Offered => Line::from(Span::styled(
            "Show explanation? (Y/N)",
            Style::default().fg(Color::Yellow),
        )),
        Explanation::Shown if question.explanation.is_empty() => {
            Line::from("No explanation available.".fg(Color::DarkGray))
        }
        Explanation::Shown => Line::from(Span::styled(
            question.explanation.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Explanation::Hidden => return,
    };

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, explanation: Explanation) {
    let hint = match explanation {
        Explanation::Offered => "Y show  ·  any other key skip",
        Explanation::Shown | Explanation::Hidden => "enter continue",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
