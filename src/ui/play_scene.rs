//! Play field rendering: bird, pipes, scrolling ground and the HUD.

use crate::core::game_state::{BirdView, ObstacleView, Snapshot};
use crate::ui::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width in world units of one ground texture stripe.
const GROUND_STRIPE: f64 = 24.0;

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe { oscillating: bool },
    PassageEdge,
    Ground { dark: bool },
}

pub fn render_play(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 18);

    render_play_area(frame, layout.content, snapshot);
    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}   Best score: {}", snapshot.score, snapshot.best_score),
        Color::Green,
        &[("[Space/Up]", "Flap"), ("[q]", "Quit")],
    );
    render_info_panel(frame, layout.info_panel, snapshot);
}

/// Draw the world scaled to the play area.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snapshot.viewport.width / width as f64;
    let y_scale = snapshot.viewport.height / height as f64;

    let bird_cell = snapshot.bird.map(|bird| {
        let col = ((bird.x / x_scale) as usize).min(width - 1);
        let row = ((bird.y / y_scale) as usize).min(height - 1);
        (col, row)
    });

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let world_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if bird_cell == Some((col, row)) {
                if let Some(bird) = snapshot.bird {
                    spans.push(bird_span(&bird));
                    continue;
                }
            }

            let world_x = (col as f64 + 0.5) * x_scale;
            let cell = classify(
                snapshot,
                world_x,
                world_y,
                row + 1 == height,
                y_scale,
            );
            spans.push(cell_span(cell));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn classify(snapshot: &Snapshot, world_x: f64, world_y: f64, bottom_row: bool, y_scale: f64) -> Cell {
    if let Some(obstacle) = snapshot
        .obstacles
        .iter()
        .find(|o| world_x >= o.x && world_x < o.x + o.width)
    {
        return pipe_cell(obstacle, world_y, y_scale);
    }

    if bottom_row {
        let stripe = ((world_x - snapshot.scenery_offset) / GROUND_STRIPE).floor() as i64;
        return Cell::Ground {
            dark: stripe.rem_euclid(2) == 0,
        };
    }

    Cell::Sky
}

fn pipe_cell(obstacle: &ObstacleView, world_y: f64, y_scale: f64) -> Cell {
    let passage_top = obstacle.reference_y;
    let passage_bottom = obstacle.reference_y + obstacle.gap;

    if world_y < passage_top || world_y > passage_bottom {
        Cell::Pipe {
            oscillating: obstacle.is_oscillating,
        }
    } else if world_y - passage_top < y_scale || passage_bottom - world_y < y_scale {
        Cell::PassageEdge
    } else {
        Cell::Sky
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Sky => Span::raw(" "),
        Cell::Pipe { oscillating: false } => Span::styled("█", Style::default().fg(Color::Green)),
        Cell::Pipe { oscillating: true } => {
            Span::styled("█", Style::default().fg(Color::LightGreen))
        }
        Cell::PassageEdge => Span::styled("░", Style::default().fg(Color::DarkGray)),
        Cell::Ground { dark: true } => Span::styled("▓", Style::default().fg(Color::Yellow)),
        Cell::Ground { dark: false } => Span::styled("▒", Style::default().fg(Color::Yellow)),
    }
}

fn bird_span(bird: &BirdView) -> Span<'static> {
    let glyph = if bird.wings_up {
        "▲" // Wings up
    } else if bird.velocity > 6.0 {
        "▼" // Falling fast
    } else {
        "►"
    };
    Span::styled(
        glyph,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let gap = snapshot.obstacles.first().map(|o| o.gap).unwrap_or_default();
    let moving = snapshot.obstacles.iter().filter(|o| o.is_oscillating).count();

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                snapshot.best_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(format!("{:.0}", gap), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Moving: ", label),
            Span::styled(moving.to_string(), Style::default().fg(Color::LightGreen)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
