//! Cake Stacker scene.
//!
//! The 600x500 pixel field is scaled onto the play area; each layer is drawn
//! as a run of block characters.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_start_prompt,
    render_status_bar, CellBuffer,
};
use arcade::games::stacker::{
    Segment, StackerGame, StackerPhase, FIELD_HEIGHT, SEGMENT_HEIGHT, SEGMENT_STEP,
};
use ratatui::{layout::Rect, style::Color, text::Line, widgets::Paragraph, Frame};

const LAYER_COLORS: [Color; 3] = [
    Color::Rgb(240, 130, 170),
    Color::Rgb(250, 230, 190),
    Color::Rgb(150, 90, 60),
];
const FALLING_COLOR: Color = Color::Rgb(255, 190, 90);
const PLATE_COLOR: Color = Color::Rgb(120, 120, 130);

pub fn render_stacker_scene(frame: &mut Frame, area: Rect, game: &StackerGame) {
    let layout = create_game_layout(frame, area, " Cake Stacker ", Color::LightRed, 13, 22);

    render_play_field(frame, layout.content, game);
    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Start ]");
    }
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Terminal row for a pixel height measured from the field top.
fn to_row(py: f64, y_scale: f64) -> i32 {
    (py * y_scale).floor() as i32
}

fn draw_segment(
    buffer: &mut CellBuffer,
    seg: &Segment,
    top_y: f64,
    x_scale: f64,
    y_scale: f64,
    color: Color,
) {
    let start = (seg.left() * x_scale).round() as i32;
    let end = ((seg.right() * x_scale).round() as i32).max(start + 1);
    let top = to_row(top_y, y_scale);
    let bottom = to_row(top_y + SEGMENT_HEIGHT, y_scale).max(top + 1);
    for row in top..bottom {
        for col in start..end {
            buffer.put(col, row, '\u{2588}', color, Color::Reset);
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &StackerGame) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height);
    let x_scale = area.width as f64 / game.rules.field_width;
    let y_scale = area.height as f64 / FIELD_HEIGHT;

    for (i, seg) in game.stack.iter().enumerate() {
        let top_y = FIELD_HEIGHT - (i as f64 * SEGMENT_STEP - game.camera_offset) - SEGMENT_HEIGHT;
        let color = if i == 0 {
            PLATE_COLOR
        } else {
            LAYER_COLORS[i % LAYER_COLORS.len()]
        };
        draw_segment(&mut buffer, seg, top_y, x_scale, y_scale, color);
    }

    if matches!(game.phase, StackerPhase::Swinging | StackerPhase::Dropping) {
        draw_segment(
            &mut buffer,
            &game.falling_segment(),
            game.falling_y,
            x_scale,
            y_scale,
            FALLING_COLOR,
        );
    }

    buffer.text_right(0, &format!("Score: {}", game.score), Color::White);
    buffer.text_right(
        1,
        &format!("Layers: {}/{}", game.layers_placed(), game.rules.target_layers),
        Color::DarkGray,
    );

    buffer.render(frame, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &StackerGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightRed,
            &[("[Space]", "Start"), ("[Esc]", "Leave")],
        );
        return;
    }

    let status = match game.phase {
        StackerPhase::Swinging => "Drop it on the cake!",
        StackerPhase::Dropping => "Falling...",
        StackerPhase::Settling => "Nice!",
        StackerPhase::Failed => "Toppled!",
        StackerPhase::Won => "Tower complete!",
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightRed,
        &[("[Space]", "Drop"), ("[Esc]", "Leave")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &StackerGame) {
    let inner = render_info_panel_frame(frame, area);

    let width_color = if game.falling_width < game.rules.min_overlap * 2.0 {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = vec![
        info_line("Score", game.score.to_string(), Color::White),
        info_line(
            "Layers",
            format!("{}/{}", game.layers_placed(), game.rules.target_layers),
            Color::White,
        ),
        info_line("Width", format!("{:.0}px", game.falling_width), width_color),
    ];
    if let Some(overlap) = game.last_overlap {
        lines.push(info_line("Last", format!("{:.0}px", overlap), Color::Yellow));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Overlap under {:.0}px topples the cake.",
        game.rules.min_overlap
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
