use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Mode;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let mode_color = match session.mode() {
        Mode::Normal => Color::Cyan,
        Mode::Review => Color::Magenta,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            session.mode().label(),
            Style::default().fg(mode_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} questions", session.total_questions()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from("Tip: answer Q to stop the quiz early.".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, super::centered(area, 11));
}
