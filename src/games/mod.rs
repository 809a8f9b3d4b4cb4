//! Mini-games: Fruit Match, Cake Stacker, Rooftop Runner.
//!
//! The three engines share nothing but the input enum. The site mounts at
//! most one of them at a time through [`GameSession`], which owns the
//! termination contract: a finished game is reported exactly once.

pub mod match3;
pub mod runner;
pub mod stacker;

pub use match3::{Match3Game, Match3Result, Match3Rules};
pub use runner::{RunnerGame, RunnerResult, RunnerRules};
pub use stacker::{StackerGame, StackerResult, StackerRules};

use crate::core::config::ArcadeConfig;
use crate::core::constants::MAX_FRAME_DT_MS;
use rand::Rng;

/// UI-agnostic input shared by all games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    /// Space/Enter: start, select, drop or jump depending on the game.
    Action,
    /// Esc: leave the game without reporting a result.
    Back,
    Other,
}

/// Which mini-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Match3,
    Stacker,
    Runner,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Match3, GameKind::Stacker, GameKind::Runner];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Match3)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Match3 => "Fruit Match",
            Self::Stacker => "Cake Stacker",
            Self::Runner => "Rooftop Runner",
        }
    }

    /// Short machine-friendly identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Match3 => "match3",
            Self::Stacker => "stacker",
            Self::Runner => "runner",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Match3 => "Swap neighbouring fruits to line up three or more.",
            Self::Stacker => "Drop the swinging layer squarely on the cake.",
            Self::Runner => "Jump the rooftop obstacles as the pace picks up.",
        }
    }

    pub fn controls(&self) -> &'static str {
        match self {
            Self::Match3 => "Arrows move, Space selects/swaps, Esc leaves",
            Self::Stacker => "Space drops the layer, Esc leaves",
            Self::Runner => "Space/Up jumps, Esc leaves",
        }
    }
}

/// Terminal label of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
}

impl GameOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Win => "You won!",
            Self::Lose => "Game over",
        }
    }
}

/// What a finished game reports to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEnd {
    pub kind: GameKind,
    pub score: u32,
    pub outcome: GameOutcome,
}

/// The currently mounted game.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Match3(Match3Game),
    Stacker(StackerGame),
    Runner(RunnerGame),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Match3(_) => GameKind::Match3,
            Self::Stacker(_) => GameKind::Stacker,
            Self::Runner(_) => GameKind::Runner,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Self::Match3(g) => g.score,
            Self::Stacker(g) => g.score,
            Self::Runner(g) => g.score,
        }
    }

    /// `Some` once the game reached a terminal state.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Self::Match3(g) => g.game_result.map(|r| match r {
                Match3Result::Win => GameOutcome::Win,
                Match3Result::Loss => GameOutcome::Lose,
            }),
            Self::Stacker(g) => g.game_result.map(|r| match r {
                StackerResult::Win => GameOutcome::Win,
                StackerResult::Loss => GameOutcome::Lose,
            }),
            Self::Runner(g) => g.game_result.map(|r| match r {
                RunnerResult::Win => GameOutcome::Win,
                RunnerResult::Loss => GameOutcome::Lose,
            }),
        }
    }

    fn process_input(&mut self, input: GameInput) {
        match self {
            Self::Match3(g) => match3::process_input(g, input),
            Self::Stacker(g) => stacker::process_input(g, input),
            Self::Runner(g) => runner::process_input(g, input),
        }
    }

    fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        match self {
            Self::Match3(g) => match3::tick_match3(g, dt_ms, rng),
            Self::Stacker(g) => stacker::tick_stacker(g, dt_ms, rng),
            Self::Runner(g) => runner::tick_runner(g, dt_ms),
        }
    }
}

/// Mount a fresh game of `kind` with the configured rules.
pub fn start_game<R: Rng>(kind: GameKind, config: &ArcadeConfig, rng: &mut R) -> ActiveGame {
    match kind {
        GameKind::Match3 => ActiveGame::Match3(match3::new_game(config.match3.clone(), rng)),
        GameKind::Stacker => ActiveGame::Stacker(stacker::new_game(config.stacker.clone())),
        GameKind::Runner => ActiveGame::Runner(runner::new_game(config.runner.clone())),
    }
}

/// Notification from a session to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The game finished. Emitted once per session.
    Ended(GameEnd),
    /// The player left. No result is reported.
    Back,
}

/// One mounted game plus the once-only end notification.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub game: ActiveGame,
    end_reported: bool,
}

impl GameSession {
    pub fn start<R: Rng>(kind: GameKind, config: &ArcadeConfig, rng: &mut R) -> Self {
        log::info!("session start: {}", kind.id());
        Self::from_game(start_game(kind, config, rng))
    }

    pub fn from_game(game: ActiveGame) -> Self {
        Self {
            game,
            end_reported: false,
        }
    }

    pub fn kind(&self) -> GameKind {
        self.game.kind()
    }

    pub fn end_reported(&self) -> bool {
        self.end_reported
    }

    /// Route a key to the game.
    pub fn handle_input(&mut self, input: GameInput) -> Option<SessionEvent> {
        if input == GameInput::Back {
            log::info!(
                "session back: {} (score {})",
                self.kind().id(),
                self.game.score()
            );
            return Some(SessionEvent::Back);
        }
        self.game.process_input(input);
        self.poll_end()
    }

    /// Advance the game by `dt_ms`, capped at `MAX_FRAME_DT_MS`.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Option<SessionEvent> {
        if self.end_reported {
            return None;
        }
        self.game.tick(dt_ms.min(MAX_FRAME_DT_MS), rng);
        self.poll_end()
    }

    fn poll_end(&mut self) -> Option<SessionEvent> {
        if self.end_reported {
            return None;
        }
        let outcome = self.game.outcome()?;
        self.end_reported = true;
        let end = GameEnd {
            kind: self.kind(),
            score: self.game.score(),
            outcome,
        };
        log::info!(
            "session end: {} score={} outcome={}",
            end.kind.id(),
            end.score,
            end.outcome.as_str()
        );
        Some(SessionEvent::Ended(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(3)
    }

    #[test]
    fn test_start_game_kinds() {
        let config = ArcadeConfig::default();
        for kind in GameKind::ALL {
            let game = start_game(kind, &config, &mut rng());
            assert_eq!(game.kind(), kind);
            assert_eq!(game.score(), 0);
            assert!(game.outcome().is_none());
        }
    }

    #[test]
    fn test_from_index_falls_back() {
        assert_eq!(GameKind::from_index(2), GameKind::Runner);
        assert_eq!(GameKind::from_index(9), GameKind::Match3);
    }

    #[test]
    fn test_back_reports_no_result() {
        let config = ArcadeConfig::default();
        let mut session = GameSession::start(GameKind::Stacker, &config, &mut rng());
        assert_eq!(session.handle_input(GameInput::Back), Some(SessionEvent::Back));
        assert!(!session.end_reported());
    }

    #[test]
    fn test_end_reported_once() {
        let config = ArcadeConfig::default();
        let mut session = GameSession::start(GameKind::Runner, &config, &mut rng());
        assert_eq!(session.handle_input(GameInput::Action), None);
        if let ActiveGame::Runner(g) = &mut session.game {
            runner::spawn_obstacle(g);
            g.obstacles[0].x = 100.0;
        }

        let event = session.tick(runner::TICK_MS, &mut rng());
        assert_eq!(
            event,
            Some(SessionEvent::Ended(GameEnd {
                kind: GameKind::Runner,
                score: 1,
                outcome: GameOutcome::Lose,
            }))
        );
        assert!(session.end_reported());
        assert_eq!(session.tick(runner::TICK_MS, &mut rng()), None);
        assert_eq!(session.handle_input(GameInput::Action), None);
    }

    #[test]
    fn test_tick_clamps_long_frames() {
        let config = ArcadeConfig::default();
        let mut session = GameSession::start(GameKind::Runner, &config, &mut rng());
        session.handle_input(GameInput::Action);
        session.tick(10_000, &mut rng());
        let ActiveGame::Runner(g) = &session.game else {
            panic!("expected runner");
        };
        assert_eq!(g.score, (MAX_FRAME_DT_MS / runner::TICK_MS) as u32);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(GameOutcome::Win.as_str(), "win");
        assert_eq!(GameOutcome::Lose.as_str(), "lose");
    }
}
