//! The site shell: section navigation, the game picker, the mounted game
//! session and the result modal.
//!
//! While a session is mounted the shell forwards every key to it. A finished
//! game is unmounted and its result shown in a modal; leaving a game with
//! Back returns to the game picker without a result.

pub mod content;

use crate::core::config::ArcadeConfig;
use crate::games::{GameEnd, GameInput, GameKind, GameSession, SessionEvent};
use rand::Rng;

/// Top-level site sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Games,
    Tournament,
    Contact,
    About,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Games,
        Section::Tournament,
        Section::Contact,
        Section::About,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Games => "Games",
            Self::Tournament => "Tournament",
            Self::Contact => "Contact",
            Self::About => "About",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Section for a 1-based number key.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// UI-agnostic input actions for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteInput {
    Up,
    Down,
    PrevSection, // Left
    NextSection, // Right / Tab
    Goto(usize), // 1-5
    Select,      // Enter / Space
    Tournament,  // t
    Close,       // Esc
    Quit,        // q
    Other,
}

/// Shell state.
#[derive(Debug)]
pub struct Site {
    pub config: ArcadeConfig,
    pub section: Section,
    /// Highlighted card in the Games section.
    pub game_cursor: usize,
    pub session: Option<GameSession>,
    /// Last finished game, shown as a modal until dismissed.
    pub result: Option<GameEnd>,
    pub should_quit: bool,
}

impl Site {
    pub fn new(config: ArcadeConfig) -> Self {
        Self {
            config,
            section: Section::Home,
            game_cursor: 0,
            session: None,
            result: None,
            should_quit: false,
        }
    }

    pub fn selected_game(&self) -> GameKind {
        GameKind::from_index(self.game_cursor)
    }

    pub fn is_playing(&self) -> bool {
        self.session.is_some()
    }

    fn goto(&mut self, section: Section) {
        if self.section != section {
            log::debug!("section: {} -> {}", self.section.name(), section.name());
            self.section = section;
        }
    }

    /// Mount a new session, replacing any current one.
    pub fn start_game<R: Rng>(&mut self, kind: GameKind, rng: &mut R) {
        self.result = None;
        self.session = Some(GameSession::start(kind, &self.config, rng));
    }

    /// Handle a shell key. Ignored while a game is mounted.
    pub fn process_input<R: Rng>(&mut self, input: SiteInput, rng: &mut R) {
        if self.is_playing() {
            return;
        }

        if self.result.is_some() {
            self.process_modal_input(input);
            return;
        }

        match input {
            SiteInput::PrevSection => self.goto(self.section.prev()),
            SiteInput::NextSection => self.goto(self.section.next()),
            SiteInput::Goto(n) => {
                if let Some(section) = Section::from_number(n) {
                    self.goto(section);
                }
            }
            SiteInput::Up if self.section == Section::Games => {
                self.game_cursor = self.game_cursor.saturating_sub(1);
            }
            SiteInput::Down if self.section == Section::Games => {
                self.game_cursor = (self.game_cursor + 1).min(GameKind::ALL.len() - 1);
            }
            SiteInput::Select => match self.section {
                Section::Home => self.goto(Section::Games),
                Section::Games => self.start_game(self.selected_game(), rng),
                Section::Tournament => self.goto(Section::Contact),
                Section::Contact | Section::About => {}
            },
            SiteInput::Tournament => self.goto(Section::Tournament),
            SiteInput::Quit => self.should_quit = true,
            _ => {}
        }
    }

    /// Result modal: Select plays again, Tournament shows the tournament, Close dismisses.
    fn process_modal_input(&mut self, input: SiteInput) {
        match input {
            SiteInput::Select => {
                self.result = None;
                self.goto(Section::Games);
            }
            SiteInput::Tournament => {
                self.result = None;
                self.goto(Section::Tournament);
            }
            SiteInput::Close => self.result = None,
            SiteInput::Quit => self.should_quit = true,
            _ => {}
        }
    }

    /// Forward a key to the mounted game.
    pub fn game_input(&mut self, input: GameInput) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(event) = session.handle_input(input) {
            self.on_session_event(event);
        }
    }

    /// Advance the mounted game. Returns true if a game is mounted.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if let Some(event) = session.tick(dt_ms, rng) {
            self.on_session_event(event);
        }
        true
    }

    fn on_session_event(&mut self, event: SessionEvent) {
        self.session = None;
        match event {
            SessionEvent::Ended(end) => {
                self.result = Some(end);
            }
            SessionEvent::Back => {
                self.goto(Section::Games);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{ActiveGame, GameOutcome};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    fn site() -> Site {
        Site::new(ArcadeConfig::default())
    }

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Home.prev(), Section::About);
        assert_eq!(Section::About.next(), Section::Home);
        assert_eq!(Section::from_number(3), Some(Section::Tournament));
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(6), None);
    }

    #[test]
    fn test_navigation() {
        let mut site = site();
        let mut rng = rng();
        site.process_input(SiteInput::NextSection, &mut rng);
        assert_eq!(site.section, Section::Games);
        site.process_input(SiteInput::Goto(5), &mut rng);
        assert_eq!(site.section, Section::About);
        site.process_input(SiteInput::Tournament, &mut rng);
        assert_eq!(site.section, Section::Tournament);
        site.process_input(SiteInput::Select, &mut rng);
        assert_eq!(site.section, Section::Contact);
    }

    #[test]
    fn test_game_picker_clamps() {
        let mut site = site();
        let mut rng = rng();
        site.process_input(SiteInput::Goto(2), &mut rng);
        site.process_input(SiteInput::Up, &mut rng);
        assert_eq!(site.game_cursor, 0);
        for _ in 0..5 {
            site.process_input(SiteInput::Down, &mut rng);
        }
        assert_eq!(site.selected_game(), GameKind::Runner);
    }

    #[test]
    fn test_start_and_back() {
        let mut site = site();
        let mut rng = rng();
        site.process_input(SiteInput::Select, &mut rng);
        assert_eq!(site.section, Section::Games);
        site.process_input(SiteInput::Down, &mut rng);
        site.process_input(SiteInput::Select, &mut rng);
        assert_eq!(site.session.as_ref().map(|s| s.kind()), Some(GameKind::Stacker));

        // Shell keys are ignored while playing
        site.process_input(SiteInput::Goto(4), &mut rng);
        assert_eq!(site.section, Section::Games);

        site.game_input(GameInput::Back);
        assert!(!site.is_playing());
        assert!(site.result.is_none());
    }

    #[test]
    fn test_finished_game_opens_modal() {
        let mut site = site();
        let mut rng = rng();
        site.start_game(GameKind::Runner, &mut rng);
        site.game_input(GameInput::Action);
        if let Some(ActiveGame::Runner(g)) = site.session.as_mut().map(|s| &mut s.game) {
            crate::games::runner::spawn_obstacle(g);
            g.obstacles[0].x = 100.0;
        }
        assert!(site.tick(crate::games::runner::TICK_MS, &mut rng));
        assert!(!site.is_playing());
        let end = site.result.expect("result modal should be open");
        assert_eq!(end.outcome, GameOutcome::Lose);
        assert_eq!(end.kind, GameKind::Runner);

        site.process_input(SiteInput::Tournament, &mut rng);
        assert!(site.result.is_none());
        assert_eq!(site.section, Section::Tournament);
    }

    #[test]
    fn test_modal_play_again_and_close() {
        let mut site = site();
        let mut rng = rng();
        let end = GameEnd {
            kind: GameKind::Match3,
            score: 120,
            outcome: GameOutcome::Lose,
        };

        site.result = Some(end);
        site.process_input(SiteInput::NextSection, &mut rng);
        assert_eq!(site.section, Section::Home, "modal swallows navigation");
        site.process_input(SiteInput::Select, &mut rng);
        assert!(site.result.is_none());
        assert_eq!(site.section, Section::Games);

        site.result = Some(end);
        site.process_input(SiteInput::Close, &mut rng);
        assert!(site.result.is_none());
        assert_eq!(site.section, Section::Games);
    }

    #[test]
    fn test_quit() {
        let mut site = site();
        site.process_input(SiteInput::Quit, &mut rng());
        assert!(site.should_quit);
    }
}
