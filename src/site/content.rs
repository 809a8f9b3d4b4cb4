//! Static copy for the site sections.

use crate::core::constants::SITE_TITLE;

pub const HERO_TITLE: &str = SITE_TITLE;
pub const HERO_TEXT: &str = "Try your hand at three mini-games and earn an invitation to a grand \
tournament hosted by the Elektrosila student power-engineering brigade.";

pub const TOURNAMENT_TITLE: &str = "Game Tournament";
pub const TOURNAMENT_SUBTITLE: &str = "An evening of console and board games";

/// A titled block of tournament information.
pub struct InfoBlock {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub const TOURNAMENT_BLOCKS: [InfoBlock; 3] = [
    InfoBlock {
        heading: "When and where?",
        lines: &["Date and venue will be announced later. Stay tuned!"],
    },
    InfoBlock {
        heading: "What's on?",
        lines: &[
            "Console game competitions",
            "Board game tournaments",
            "Prizes and gifts for the winners",
            "Great atmosphere and new friends",
        ],
    },
    InfoBlock {
        heading: "Who can take part?",
        lines: &[
            "Everyone is welcome! Skill level doesn't matter, only the wish to play and have fun.",
        ],
    },
];

pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACTS: [ContactEntry; 3] = [
    ContactEntry {
        label: "Email",
        value: "elektrosila@example.com",
    },
    ContactEntry {
        label: "Phone",
        value: "+7 (XXX) XXX-XX-XX",
    },
    ContactEntry {
        label: "Address",
        value: "1 Universitetskaya St., City",
    },
];

pub const ABOUT_TITLE: &str = "About us";
pub const ABOUT_SUBTITLE: &str = "Elektrosila student power-engineering brigade";
pub const ABOUT_TEXT: &str = "We are a team of active students who not only work on power \
facilities but also organise great events for students. Our goal is to bring people together \
through games, sport and a positive atmosphere.";

pub struct Achievement {
    pub year: &'static str,
    pub title: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        year: "2023",
        title: "Best power-engineering brigade in the region",
    },
    Achievement {
        year: "2023",
        title: "Worked on a power line construction site",
    },
    Achievement {
        year: "2024",
        title: "15+ game tournaments hosted",
    },
];

/// Shown in the result modal after every game.
pub const INVITE_TITLE: &str = "You're invited to the tournament!";
pub const INVITE_TEXT: &str =
    "An evening of console and board games from the Elektrosila student brigade.";

pub const FOOTER: &str = "Elektrosila student brigade \u{2022} 2024 \u{2022} Game Tournament";
