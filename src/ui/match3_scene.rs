//! Fruit Match scene: the board, cursor, selection and cascade progress.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar, CellBuffer,
};
use arcade::games::match3::{CascadeStage, Match3Game, Pos, Symbol};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns per board cell (`[●]`).
const CELL_W: i32 = 4;
/// Rows per board cell, including the gap row.
const CELL_H: i32 = 2;

fn symbol_glyph(symbol: Symbol) -> (char, Color) {
    match symbol {
        Symbol::Strawberry => ('\u{25CF}', Color::Red), // ●
        Symbol::Orange => ('\u{25C6}', Color::Rgb(255, 150, 40)), // ◆
        Symbol::Lemon => ('\u{25B2}', Color::Yellow), // ▲
        Symbol::Grape => ('\u{2663}', Color::Magenta), // ♣
        Symbol::Watermelon => ('\u{25A0}', Color::Green), // ■
    }
}

pub fn render_match3_scene(frame: &mut Frame, area: Rect, game: &Match3Game) {
    let layout = create_game_layout(frame, area, " Fruit Match ", Color::LightMagenta, 12, 24);

    render_board(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_board(frame: &mut Frame, area: Rect, game: &Match3Game) {
    let size = game.grid.size() as i32;
    let board_w = size * CELL_W;
    let board_h = size * CELL_H - 1;
    if (area.width as i32) < board_w || (area.height as i32) < board_h {
        frame.render_widget(
            Paragraph::new("Terminal too small").style(Style::default().fg(Color::Red)),
            area,
        );
        return;
    }

    let mut buffer = CellBuffer::new(board_w as u16, board_h as u16);
    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row as usize, col as usize);
            let x = col * CELL_W;
            let y = row * CELL_H;

            let selected = game.selected == Some(pos);
            let bg = if selected {
                Color::Rgb(70, 60, 20)
            } else {
                Color::Reset
            };

            let (ch, fg) = match game.grid.get(pos) {
                Some(symbol) => symbol_glyph(symbol),
                None => ('\u{00B7}', Color::DarkGray), // ·
            };
            buffer.put(x + 1, y, ch, fg, bg);

            if game.cursor == pos && !game.is_cascading() {
                buffer.put(x, y, '[', Color::White, bg);
                buffer.put(x + 2, y, ']', Color::White, bg);
            } else if selected {
                buffer.put(x, y, ' ', Color::Reset, bg);
                buffer.put(x + 2, y, ' ', Color::Reset, bg);
            }
        }
    }

    let x_pad = (area.width as i32 - board_w) / 2;
    let y_pad = (area.height as i32 - board_h) / 2;
    let board_area = Rect::new(
        area.x + x_pad as u16,
        area.y + y_pad as u16,
        board_w as u16,
        board_h as u16,
    );
    buffer.render(frame, board_area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Match3Game) {
    if let Some(stage) = game.cascade {
        let label = match stage {
            CascadeStage::Clear => "Matching...",
            CascadeStage::Gravity => "Falling...",
            CascadeStage::Refill => "Refilling...",
        };
        render_status_bar(frame, area, label, Color::Yellow, &[("[Esc]", "Leave")]);
        return;
    }

    let status = if game.selected.is_some() {
        "Pick a neighbour to swap"
    } else {
        "Select a fruit"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightMagenta,
        &[
            ("[Arrows]", "Move"),
            ("[Space]", "Select"),
            ("[Esc]", "Leave"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Match3Game) {
    let inner = render_info_panel_frame(frame, area);

    let score_color = if game.score >= game.rules.target_score {
        Color::Green
    } else {
        Color::White
    };
    let moves_color = if game.moves_left <= 3 {
        Color::Red
    } else {
        Color::White
    };

    let mut lines: Vec<Line> = vec![
        info_line(
            "Score",
            format!("{}/{}", game.score, game.rules.target_score),
            score_color,
        ),
        info_line("Moves", game.moves_left.to_string(), moves_color),
    ];
    if game.cascade_depth > 1 {
        lines.push(info_line(
            "Combo",
            format!("x{}", game.cascade_depth),
            Color::Yellow,
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Fruits:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    for &symbol in game.rules.alphabet() {
        let (ch, color) = symbol_glyph(symbol);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", ch), Style::default().fg(color)),
            Span::styled(symbol.name(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} pts per fruit", game.rules.points_per_cell),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
