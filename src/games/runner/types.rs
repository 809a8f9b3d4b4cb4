//! Rooftop Runner data structures.
//!
//! An endless side-scroller: obstacles slide in from the right and the
//! runner jumps over them. Distances are pixels in a `FIELD_WIDTH`-wide
//! field; the runner's height is measured upward from the ground.

use crate::core::tick::FixedStep;
use serde::{Deserialize, Serialize};

/// Simulation tick.
pub const TICK_MS: u64 = 30;

/// Field width; obstacles spawn just inside the right edge.
pub const FIELD_WIDTH: f64 = 700.0;
pub const SPAWN_X: f64 = 650.0;
/// Obstacles at or left of this position are removed.
pub const DESPAWN_X: f64 = -60.0;

/// Horizontal band occupied by the runner.
pub const PLAYER_LEFT: f64 = 70.0;
pub const PLAYER_RIGHT: f64 = 120.0;
/// Collision width of an obstacle (a thin rooftop vent).
pub const OBSTACLE_WIDTH: f64 = 10.0;
/// Height the runner must be at to clear an obstacle.
pub const MIN_CLEARANCE: f64 = 25.0;

/// Jump arc: half a sine wave over the duration.
pub const JUMP_DURATION_MS: u64 = 600;
pub const JUMP_HEIGHT: f64 = 120.0;

/// Speed ramp (pixels per tick).
pub const INITIAL_SPEED: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.25;
pub const SPEED_UP_EVERY: u32 = 100;
pub const MAX_SPEED: f64 = 8.0;

/// Spawn cadence: `SPAWN_BASE_MS - speed * SPAWN_SPEED_FACTOR`, floored.
pub const SPAWN_BASE_MS: f64 = 2000.0;
pub const SPAWN_SPEED_FACTOR: f64 = 50.0;
pub const MIN_SPAWN_INTERVAL_MS: u64 = 600;

/// Score at or above which a crash still counts as a win.
pub const WIN_SCORE: u32 = 1000;
/// Ticks between leg animation frames.
pub const LEG_FRAME_TICKS: u64 = 4;

/// A single obstacle. `id` increases monotonically per game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: u64,
    pub x: f64,
}

impl Obstacle {
    pub fn right(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }
}

/// Tunable rules for a Rooftop Runner game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerRules {
    pub tick_ms: u64,
    pub initial_speed: f64,
    pub speed_step: f64,
    pub speed_up_every: u32,
    pub max_speed: f64,
    pub jump_duration_ms: u64,
    pub jump_height: f64,
    pub min_clearance: f64,
    pub min_spawn_interval_ms: u64,
    pub win_score: u32,
}

impl Default for RunnerRules {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            initial_speed: INITIAL_SPEED,
            speed_step: SPEED_STEP,
            speed_up_every: SPEED_UP_EVERY,
            max_speed: MAX_SPEED,
            jump_duration_ms: JUMP_DURATION_MS,
            jump_height: JUMP_HEIGHT,
            min_clearance: MIN_CLEARANCE,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            win_score: WIN_SCORE,
        }
    }
}

impl RunnerRules {
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_ms == 0 {
            return Err("tick_ms must be positive".to_string());
        }
        if self.initial_speed <= 0.0 || self.max_speed < self.initial_speed {
            return Err(format!(
                "speeds must satisfy 0 < initial_speed <= max_speed, got {} and {}",
                self.initial_speed, self.max_speed
            ));
        }
        if self.speed_step < 0.0 || self.speed_up_every == 0 {
            return Err("speed ramp must be non-negative with a positive period".to_string());
        }
        if self.jump_duration_ms == 0 || self.jump_height <= self.min_clearance {
            return Err("jump must last and rise above min_clearance".to_string());
        }
        if self.min_spawn_interval_ms == 0 {
            return Err("min_spawn_interval_ms must be positive".to_string());
        }
        Ok(())
    }

    /// Milliseconds between spawns at the given speed.
    pub fn spawn_interval_ms(&self, speed: f64) -> u64 {
        let interval = (SPAWN_BASE_MS - speed * SPAWN_SPEED_FACTOR).max(0.0) as u64;
        interval.max(self.min_spawn_interval_ms)
    }
}

/// Game outcome. The run always ends in a crash; the score decides the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerResult {
    Win,
    Loss,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub rules: RunnerRules,
    /// True until the player presses the action key. Nothing moves while waiting.
    pub waiting_to_start: bool,

    pub score: u32,
    /// Current obstacle speed, pixels per tick.
    pub speed: f64,

    pub obstacles: Vec<Obstacle>,
    pub next_obstacle_id: u64,
    pub since_spawn_ms: u64,

    /// Milliseconds into the current jump, `None` when on the ground.
    pub jump_elapsed_ms: Option<u64>,

    pub clock: FixedStep,
    pub tick_count: u64,
    /// 0 or 1, alternates while running on the ground.
    pub leg_frame: u8,
    pub game_result: Option<RunnerResult>,
}

impl RunnerGame {
    pub fn new(rules: RunnerRules) -> Self {
        Self {
            waiting_to_start: true,
            score: 0,
            speed: rules.initial_speed,
            obstacles: Vec::new(),
            next_obstacle_id: 0,
            since_spawn_ms: 0,
            jump_elapsed_ms: None,
            clock: FixedStep::new(rules.tick_ms),
            tick_count: 0,
            leg_frame: 0,
            game_result: None,
            rules,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_elapsed_ms.is_some()
    }

    /// Current height above the ground.
    pub fn runner_y(&self) -> f64 {
        match self.jump_elapsed_ms {
            Some(t) => jump_height_at(t, self.rules.jump_duration_ms, self.rules.jump_height),
            None => 0.0,
        }
    }
}

/// Height of a jump `t_ms` after take-off. Zero outside `[0, duration]`.
pub fn jump_height_at(t_ms: u64, duration_ms: u64, apex: f64) -> f64 {
    if duration_ms == 0 || t_ms > duration_ms {
        return 0.0;
    }
    let phase = std::f64::consts::PI * t_ms as f64 / duration_ms as f64;
    (phase.sin() * apex).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = RunnerGame::new(RunnerRules::default());
        assert!(game.waiting_to_start);
        assert_eq!(game.speed, INITIAL_SPEED);
        assert!(game.obstacles.is_empty());
        assert!(!game.is_jumping());
        assert_eq!(game.runner_y(), 0.0);
    }

    #[test]
    fn test_jump_arc_shape() {
        assert_eq!(jump_height_at(0, JUMP_DURATION_MS, JUMP_HEIGHT), 0.0);
        assert!((jump_height_at(300, JUMP_DURATION_MS, JUMP_HEIGHT) - JUMP_HEIGHT).abs() < 1e-9);
        assert!(jump_height_at(JUMP_DURATION_MS, JUMP_DURATION_MS, JUMP_HEIGHT) < 1e-9);
        assert_eq!(jump_height_at(700, JUMP_DURATION_MS, JUMP_HEIGHT), 0.0);
    }

    #[test]
    fn test_spawn_interval_shrinks_with_speed() {
        let rules = RunnerRules::default();
        assert_eq!(rules.spawn_interval_ms(5.0), 1750);
        assert_eq!(rules.spawn_interval_ms(8.0), 1600);
        assert_eq!(rules.spawn_interval_ms(40.0), MIN_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_default_rules_validate() {
        assert!(RunnerRules::default().validate().is_ok());
    }

    #[test]
    fn test_rules_reject_inverted_speeds() {
        let rules = RunnerRules {
            max_speed: 1.0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }
}
