use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::TITLE;

pub fn render(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from("1. Start quiz".fg(Color::White)),
        Line::from("2. Review wrong answers".fg(Color::White)),
        Line::from("3. Exit".fg(Color::White)),
        Line::from(""),
    ];

    match error {
        Some(message) => content.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from("press 1-3".fg(Color::DarkGray)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, super::centered(area, 12));
}
