use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Mode;

pub fn render(frame: &mut Frame, area: Rect, app: &App, input: &str, error: Option<&str>) {
    let chunks = create_layout(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], app);
    render_input(frame, chunks[2], input, error);
    render_controls(frame, chunks[3], "type O or X  ·  enter submit  ·  Q quit");
}

pub fn render_confirm_quit(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = create_layout(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], app);

    let content = vec![
        Line::from(Span::styled(
            "Really stop the quiz? (Y/N)",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("The current question will not be counted.".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content), chunks[2]);

    render_controls(frame, chunks[3], "Y stop  ·  any other key keep going");
}

fn create_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area)
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let (number, total) = session.position();
    let prefix = match session.mode() {
        Mode::Review => "[Review] ",
        Mode::Normal => "",
    };
    let progress = format!("{prefix}Question {number} / {total}");

    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let (number, _) = session.position();
    let widget = Paragraph::new(format!("Q{number}. {}", question.prompt))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, error: Option<&str>) {
    let mut content = vec![Line::from(vec![
        Span::styled("Your answer (O/X): ", Style::default().fg(Color::White)),
        Span::styled(input.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ])];

    if let Some(message) = error {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_controls(frame: &mut Frame, area: Rect, hint: &'static str) {
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
