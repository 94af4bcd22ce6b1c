//! Title screen and game-over screen.

use crate::core::game_state::{RoundSummary, Snapshot};
use crate::flappy::RoundEnd;
use crate::ui::game_common::{controls_line, render_centered_overlay, title_line};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let lines = vec![
        title_line("F L A P P Y", Color::Yellow),
        Line::from(""),
        Line::from(Span::styled(
            "Flap through the gaps. Don't touch the pipes or the ground.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Best score: {}", snapshot.best_score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        controls_line(&[("[Space/Enter]", "Start"), ("[Esc/q]", "Quit")]),
    ];

    render_centered_overlay(frame, area, Color::Cyan, lines);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let Some(summary) = snapshot.last_round.as_ref() else {
        render_menu(frame, area, snapshot);
        return;
    };

    render_centered_overlay(frame, area, Color::Red, game_over_lines(summary));
}

fn game_over_lines(summary: &RoundSummary) -> Vec<Line<'static>> {
    let cause = match summary.end {
        RoundEnd::Ground => "You hit the ground.",
        RoundEnd::Obstacle => "You hit a pipe.",
    };

    let mut lines = vec![
        title_line("Game over!", Color::Red),
        Line::from(Span::styled(cause, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {}", summary.score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Best score: {}", summary.best),
            Style::default().fg(Color::Cyan),
        )),
    ];

    if summary.new_best {
        lines.push(Line::from(Span::styled(
            "NEW BEST!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(err) = &summary.save_error {
        lines.push(Line::from(Span::styled(
            format!("Best score not saved: {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(controls_line(&[
        ("[Space/Enter]", "Restart"),
        ("[Esc]", "Menu"),
        ("[q]", "Quit"),
    ]));
    lines
}
