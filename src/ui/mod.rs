mod feedback;
mod intro;
mod menu;
mod notice;
mod question;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, AppState};

const TITLE: &str = "PYTHON O/X QUIZ";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.state {
        AppState::Menu { error } => menu::render(frame, area, error.as_deref()),
        AppState::Notice { message } => notice::render(frame, area, message, "ENTER to continue"),
        AppState::ConfirmSmallSet { questions } => notice::render(
            frame,
            area,
            &format!(
                "There are only {} question(s). Continue anyway?",
                questions.len()
            ),
            "Y to continue  ·  any other key to go back",
        ),
        AppState::Intro => intro::render(frame, area, app),
        AppState::Question { input, error } => {
            question::render(frame, area, app, input, error.as_deref())
        }
        AppState::ConfirmQuit => question::render_confirm_quit(frame, area, app),
        AppState::Feedback {
            question,
            correct,
            explanation,
        } => feedback::render(frame, area, question, *correct, *explanation),
        AppState::Result {
            result,
            persistence,
        } => result::render(frame, area, result, persistence.as_ref()),
    }
}

/// A centered box of fixed height, used by the short single-panel screens.
fn centered(area: Rect, height: u16) -> Rect {
    Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area)[1]
}
