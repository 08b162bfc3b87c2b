use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::Mode;
use crate::quiz::{PersistAction, QuizResult};

const QUESTION_PREVIEW_LENGTH: usize = 60;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    result: &QuizResult,
    persistence: Option<&Result<PersistAction, String>>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result);
    render_persistence(frame, chunks[2], result, persistence);
    render_wrong_list(frame, chunks[3], result);
    render_controls(frame, chunks[4]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let summary = if result.attempted == 0 {
        Line::from(Span::styled(
            "You stopped before answering any question.",
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                "{} / {} correct  ({:.1}%)",
                result.score, result.attempted, result.accuracy
            ),
            Style::default().fg(get_grade_color(result.accuracy)).bold(),
        ))
    };

    let title = if result.aborted {
        "QUIZ STOPPED"
    } else {
        "QUIZ COMPLETE"
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        summary,
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn persistence_message(
    result: &QuizResult,
    persistence: Option<&Result<PersistAction, String>>,
) -> Option<(String, Color)> {
    let message = match persistence? {
        Ok(PersistAction::Skipped | PersistAction::Untouched) => return None,
        Ok(PersistAction::Saved(count)) => {
            (format!("{count} wrong answer(s) saved for review."), Color::Cyan)
        }
        Ok(PersistAction::Remaining(count)) => (
            format!("{count} question(s) still left to review."),
            Color::Yellow,
        ),
        Ok(PersistAction::Cleared) => (
            "Every wrong answer has been mastered!".to_string(),
            Color::Green,
        ),
        Err(err) => {
            let what = match result.mode {
                Mode::Normal => "save",
                Mode::Review => "update",
            };
            (format!("Warning: could not {what} wrong answers: {err}"), Color::Red)
        }
    };
    Some(message)
}

fn render_persistence(
    frame: &mut Frame,
    area: Rect,
    result: &QuizResult,
    persistence: Option<&Result<PersistAction, String>>,
) {
    let Some((message, color)) = persistence_message(result, persistence) else {
        return;
    };

    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}

fn render_wrong_list(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let lines: Vec<Line> = result
        .wrong_list
        .iter()
        .enumerate()
        .map(|(index, question)| {
            Line::from(vec![
                Span::styled(" - ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.prompt),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  ({})", question.correct_answer),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter back to menu")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mode: Mode) -> QuizResult {
        QuizResult {
            mode,
            attempted: 4,
            score: 3,
            accuracy: 75.0,
            wrong_list: Vec::new(),
            aborted: false,
        }
    }

    #[test]
    fn grade_colors_follow_accuracy() {
        assert_eq!(get_grade_color(100.0), Color::Green);
        assert_eq!(get_grade_color(75.0), Color::Cyan);
        assert_eq!(get_grade_color(60.0), Color::Yellow);
        assert_eq!(get_grade_color(0.0), Color::Red);
    }

    #[test]
    fn truncates_long_prompts() {
        let long = "a".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let preview = truncate_question(&long);
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(truncate_question("short"), "short");
    }

    #[test]
    fn persistence_messages() {
        let normal = result(Mode::Normal);
        let review = result(Mode::Review);

        assert_eq!(persistence_message(&normal, None), None);
        assert_eq!(persistence_message(&normal, Some(&Ok(PersistAction::Untouched))), None);
        assert!(
            persistence_message(&normal, Some(&Ok(PersistAction::Saved(2))))
                .unwrap()
                .0
                .contains("2 wrong answer(s) saved")
        );
        assert!(
            persistence_message(&review, Some(&Ok(PersistAction::Cleared)))
                .unwrap()
                .0
                .contains("mastered")
        );
        assert!(
            persistence_message(&review, Some(&Err("disk full".to_string())))
                .unwrap()
                .0
                .contains("could not update wrong answers: disk full")
        );
    }
}
