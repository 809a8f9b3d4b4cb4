//! Site sections: home, game picker, tournament, contact and about pages.

use super::game_common::controls_line;
use arcade::core::constants::SITE_TITLE;
use arcade::games::GameKind;
use arcade::site::content::*;
use arcade::site::{Section, Site};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

const ACCENT: Color = Color::Rgb(180, 120, 255);

/// Header with section tabs. Returns the remaining body area.
pub fn render_header(frame: &mut Frame, area: Rect, site: &Site) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.name())))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == site.section)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(Span::styled(
                    format!(" {} ", SITE_TITLE),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            FOOTER,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    chunks[1]
}

pub fn render_section(frame: &mut Frame, area: Rect, site: &Site) {
    let lines = match site.section {
        Section::Home => home_lines(),
        Section::Games => games_lines(site.game_cursor),
        Section::Tournament => tournament_lines(),
        Section::Contact => contact_lines(),
        Section::About => about_lines(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", site.section.name()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    ))
}

fn home_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        heading(HERO_TITLE),
        Line::from(""),
        muted(HERO_TEXT),
        Line::from(""),
        controls_line(&[("[Enter]", "Play"), ("[T]", "Tournament"), ("[Q]", "Quit")]),
    ]
}

fn games_lines(cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), heading("Pick a game"), Line::from("")];
    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let selected = i == cursor;
        let marker = if selected { "\u{25B6} " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(kind.name(), name_style),
        ]));
        lines.push(muted(kind.tagline()));
        if selected {
            lines.push(Line::from(Span::styled(
                kind.controls(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(controls_line(&[("[Up/Down]", "Choose"), ("[Enter]", "Play")]));
    lines
}

fn tournament_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading(TOURNAMENT_TITLE),
        muted(TOURNAMENT_SUBTITLE),
        Line::from(""),
    ];
    for block in TOURNAMENT_BLOCKS.iter() {
        lines.push(Line::from(Span::styled(
            block.heading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for line in block.lines {
            lines.push(muted(line));
        }
        lines.push(Line::from(""));
    }
    lines.push(controls_line(&[("[Enter]", "Contact us")]));
    lines
}

fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), heading("Contacts"), Line::from("")];
    for entry in CONTACTS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", entry.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(entry.value, Style::default().fg(Color::White)),
        ]));
    }
    lines
}

fn about_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading(ABOUT_TITLE),
        muted(ABOUT_SUBTITLE),
        Line::from(""),
        Line::from(ABOUT_TEXT),
        Line::from(""),
        Line::from(Span::styled(
            "Our achievements",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for achievement in ACHIEVEMENTS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", achievement.year),
                Style::default().fg(ACCENT),
            ),
            Span::styled(achievement.title, Style::default().fg(Color::White)),
        ]));
    }
    lines
}
