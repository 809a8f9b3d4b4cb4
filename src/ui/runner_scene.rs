//! Rooftop Runner scene: runner, obstacles and a scrolling rooftop.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_start_prompt,
    render_status_bar, CellBuffer,
};
use arcade::games::runner::{
    RunnerGame, FIELD_WIDTH, OBSTACLE_WIDTH, PLAYER_LEFT, PLAYER_RIGHT,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Pixels of sky drawn above the roof line.
const SKY_HEIGHT_PX: f64 = 200.0;
const RUNNER_HEIGHT_PX: f64 = 50.0;
const OBSTACLE_HEIGHT_PX: f64 = 40.0;

const ROOF_CHAR: char = '\u{2593}'; // ▓
const RUNNER_COLOR: Color = Color::LightCyan;
const OBSTACLE_COLOR: Color = Color::Rgb(200, 90, 60);

pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let layout = create_game_layout(frame, area, " Rooftop Runner ", Color::LightCyan, 12, 20);

    render_play_field(frame, layout.content, game);
    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Start ]");
    }
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 6 || area.width < 20 {
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height);
    let roof_row = buffer.height() as i32 - 1;
    let x_scale = buffer.width() as f64 / FIELD_WIDTH;
    let y_scale = roof_row as f64 / SKY_HEIGHT_PX;

    // Roof, scrolling with the distance travelled
    let scroll = (game.tick_count as f64 * game.speed * x_scale) as i32;
    for col in 0..buffer.width() as i32 {
        let ch = if (col + scroll) % 6 == 0 { '\u{2592}' } else { ROOF_CHAR };
        buffer.put(col, roof_row, ch, Color::Rgb(90, 90, 100), Color::Reset);
    }

    // Obstacles
    let obstacle_rows = (OBSTACLE_HEIGHT_PX * y_scale).ceil().max(1.0) as i32;
    for obstacle in &game.obstacles {
        let start = (obstacle.x * x_scale).round() as i32;
        let end = (((obstacle.x + OBSTACLE_WIDTH) * x_scale).round() as i32).max(start + 1);
        for row in (roof_row - obstacle_rows)..roof_row {
            for col in start..end {
                buffer.put(col, row, '#', OBSTACLE_COLOR, Color::Reset);
            }
        }
    }

    // Runner
    let left = (PLAYER_LEFT * x_scale).round() as i32;
    let right = ((PLAYER_RIGHT * x_scale).round() as i32).max(left + 1);
    let foot_row = roof_row - 1 - (game.runner_y() * y_scale).round() as i32;
    let body_rows = (RUNNER_HEIGHT_PX * y_scale).ceil().max(2.0) as i32;
    for dy in 0..body_rows {
        let row = foot_row - dy;
        for col in left..right {
            let ch = if dy == 0 && !game.is_jumping() {
                // Alternating legs
                match (game.leg_frame, (col - left) % 2) {
                    (0, 0) | (1, 1) => '/',
                    _ => '\\',
                }
            } else {
                '\u{2588}'
            };
            buffer.put(col, row, ch, RUNNER_COLOR, Color::Reset);
        }
    }

    buffer.text_right(0, &format!("Score: {}", game.score), Color::White);

    buffer.render(frame, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightCyan,
            &[("[Space]", "Start"), ("[Esc]", "Leave")],
        );
        return;
    }

    let status = if game.score >= game.rules.win_score {
        "Tournament pace! Keep going"
    } else {
        "Run!"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightCyan,
        &[("[Space/Up]", "Jump"), ("[Esc]", "Leave")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_info_panel_frame(frame, area);

    let score_color = if game.score >= game.rules.win_score {
        Color::Green
    } else {
        Color::White
    };

    let lines: Vec<Line> = vec![
        info_line("Score", game.score.to_string(), score_color),
        info_line("Goal", game.rules.win_score.to_string(), Color::White),
        info_line("Speed", format!("{:.2}", game.speed), Color::White),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(RUNNER_COLOR)),
            Span::styled("Runner", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" # ", Style::default().fg(OBSTACLE_COLOR)),
            Span::styled("Obstacle", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
