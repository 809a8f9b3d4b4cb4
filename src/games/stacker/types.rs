//! Cake Stacker data structures.
//!
//! A timing game: a cake layer swings above the tower, the player drops it,
//! and only the part that lands on the layer below survives.
//!
//! Horizontal positions are pixels in a `FIELD_WIDTH`-wide field, except for
//! the swinging layer whose position is tracked as a percentage of the field
//! (the swing bounds are defined in percent). Vertical positions are pixels
//! from the top of a `FIELD_HEIGHT`-tall field.

use crate::core::tick::FixedStep;
use serde::{Deserialize, Serialize};

/// Play field dimensions in pixels.
pub const FIELD_WIDTH: f64 = 600.0;
pub const FIELD_HEIGHT: f64 = 500.0;

/// Drawn height of one layer.
pub const SEGMENT_HEIGHT: f64 = 35.0;
/// Vertical distance between the bottoms of two stacked layers.
pub const SEGMENT_STEP: f64 = 40.0;

/// Base layer width and position.
pub const INITIAL_WIDTH: f64 = 140.0;
pub const BASE_POSITION_PCT: f64 = 50.0;

/// Swing bounds and speed (percent of the field per tick).
pub const SWING_MIN_PCT: f64 = 15.0;
pub const SWING_MAX_PCT: f64 = 85.0;
pub const SWING_STEP_PCT: f64 = 0.8;
pub const SWING_TICK_MS: u64 = 20;

/// Range a fresh layer may appear in after a successful placement.
pub const RESPAWN_MIN_PCT: f64 = 20.0;
pub const RESPAWN_MAX_PCT: f64 = 80.0;

/// Falling layer starting height and speed.
pub const DROP_START_Y: f64 = 50.0;
pub const DROP_STEP_PX: f64 = 5.0;
pub const DROP_TICK_MS: u64 = 16;

/// Overlap below this many pixels topples the tower.
pub const MIN_OVERLAP: f64 = 15.0;
/// Points per pixel of overlap (floored).
pub const POINTS_PER_PX: f64 = 2.0;
/// Upper bound on `points_per_px`.
pub const MAX_POINTS_PER_PX: f64 = 100.0;
/// Layers to place on top of the base for a win.
pub const TARGET_LAYERS: u32 = 15;
/// Layers that fit on screen before the camera starts following the tower.
pub const VISIBLE_LAYERS: u32 = 8;
/// Pause after a successful placement before the next layer swings in.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Convert a field percentage to pixels.
pub fn pct_to_px(pct: f64, field_width: f64) -> f64 {
    pct / 100.0 * field_width
}

/// A placed (or falling) layer: horizontal center and width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub center: f64,
    pub width: f64,
}

impl Segment {
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

/// Tunable rules for a Cake Stacker game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackerRules {
    pub field_width: f64,
    pub initial_width: f64,
    pub min_overlap: f64,
    pub points_per_px: f64,
    pub target_layers: u32,
    pub visible_layers: u32,
    pub swing_step_pct: f64,
    pub swing_tick_ms: u64,
    pub drop_step_px: f64,
    pub drop_tick_ms: u64,
    pub settle_delay_ms: u64,
}

impl Default for StackerRules {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            initial_width: INITIAL_WIDTH,
            min_overlap: MIN_OVERLAP,
            points_per_px: POINTS_PER_PX,
            target_layers: TARGET_LAYERS,
            visible_layers: VISIBLE_LAYERS,
            swing_step_pct: SWING_STEP_PCT,
            swing_tick_ms: SWING_TICK_MS,
            drop_step_px: DROP_STEP_PX,
            drop_tick_ms: DROP_TICK_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl StackerRules {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width <= 0.0 {
            return Err("field_width must be positive".to_string());
        }
        if self.min_overlap <= 0.0 {
            return Err("min_overlap must be positive".to_string());
        }
        if self.initial_width < self.min_overlap || self.initial_width > self.field_width {
            return Err(format!(
                "initial_width must be between min_overlap ({}) and field_width ({}), got {}",
                self.min_overlap, self.field_width, self.initial_width
            ));
        }
        if !(self.points_per_px > 0.0 && self.points_per_px <= MAX_POINTS_PER_PX) {
            return Err(format!(
                "points_per_px must be in (0, {}], got {}",
                MAX_POINTS_PER_PX, self.points_per_px
            ));
        }
        if self.target_layers == 0 || self.visible_layers == 0 {
            return Err("target_layers and visible_layers must be positive".to_string());
        }
        if self.swing_step_pct <= 0.0 || self.drop_step_px <= 0.0 {
            return Err("swing and drop steps must be positive".to_string());
        }
        Ok(())
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackerResult {
    Win,
    Loss,
}

/// Where the current layer is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackerPhase {
    /// Layer oscillates above the tower, waiting for the drop.
    Swinging,
    /// Layer falls toward the top of the tower.
    Dropping,
    /// Layer landed; short pause before the next one appears.
    Settling,
    /// Overlap was too small. Terminal.
    Failed,
    /// Tower reached the target height. Terminal.
    Won,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct StackerGame {
    pub rules: StackerRules,
    pub phase: StackerPhase,
    /// True until the player presses the action key. Nothing moves while waiting.
    pub waiting_to_start: bool,

    // -- Falling layer --
    /// Center of the swinging/falling layer, percent of field width.
    pub swing_pct: f64,
    /// +1.0 moving right, -1.0 moving left.
    pub swing_direction: f64,
    /// Top of the falling layer, pixels from the top of the field.
    pub falling_y: f64,
    pub falling_width: f64,

    // -- Tower --
    /// Placed layers, base first. Never empty.
    pub stack: Vec<Segment>,
    /// Pixels the view has scrolled up to keep the tower top visible.
    pub camera_offset: f64,

    // -- Scoring --
    pub score: u32,
    /// Overlap of the most recent landing, for the HUD.
    pub last_overlap: Option<f64>,

    /// Drives the current phase: swing, drop or rest cadence.
    pub clock: FixedStep,
    pub tick_count: u64,
    pub game_result: Option<StackerResult>,
}

impl StackerGame {
    pub fn new(rules: StackerRules) -> Self {
        let base = Segment::new(
            pct_to_px(BASE_POSITION_PCT, rules.field_width),
            rules.initial_width,
        );
        Self {
            phase: StackerPhase::Swinging,
            waiting_to_start: true,
            swing_pct: BASE_POSITION_PCT,
            swing_direction: 1.0,
            falling_y: DROP_START_Y,
            falling_width: rules.initial_width,
            stack: vec![base],
            camera_offset: 0.0,
            score: 0,
            last_overlap: None,
            clock: FixedStep::new(rules.swing_tick_ms),
            tick_count: 0,
            game_result: None,
            rules,
        }
    }

    /// The top layer of the tower.
    pub fn top(&self) -> Segment {
        // The base layer is never removed.
        self.stack[self.stack.len() - 1]
    }

    /// Layers placed on top of the base.
    pub fn layers_placed(&self) -> u32 {
        (self.stack.len() - 1) as u32
    }

    /// The swinging/falling layer in pixel coordinates.
    pub fn falling_segment(&self) -> Segment {
        Segment::new(
            pct_to_px(self.swing_pct, self.rules.field_width),
            self.falling_width,
        )
    }

    /// Height (top edge, from the field top) where the falling layer comes to rest.
    pub fn target_y(&self) -> f64 {
        let next_bottom = self.stack.len() as f64 * SEGMENT_STEP - self.camera_offset;
        FIELD_HEIGHT - next_bottom - SEGMENT_HEIGHT
    }

    pub fn is_finished(&self) -> bool {
        self.game_result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = StackerGame::new(StackerRules::default());
        assert!(game.waiting_to_start);
        assert_eq!(game.phase, StackerPhase::Swinging);
        assert_eq!(game.stack.len(), 1);
        assert_eq!(game.top(), Segment::new(300.0, INITIAL_WIDTH));
        assert_eq!(game.layers_placed(), 0);
        assert_eq!(game.score, 0);
        assert!(game.game_result.is_none());
    }

    #[test]
    fn test_segment_edges() {
        let seg = Segment::new(300.0, 140.0);
        assert!((seg.left() - 230.0).abs() < f64::EPSILON);
        assert!((seg.right() - 370.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_y_accounts_for_stack_and_camera() {
        let mut game = StackerGame::new(StackerRules::default());
        assert!((game.target_y() - (FIELD_HEIGHT - SEGMENT_STEP - SEGMENT_HEIGHT)).abs() < 1e-9);

        game.stack.push(Segment::new(300.0, 100.0));
        game.camera_offset = SEGMENT_STEP;
        assert!((game.target_y() - (FIELD_HEIGHT - SEGMENT_STEP - SEGMENT_HEIGHT)).abs() < 1e-9);
    }

    #[test]
    fn test_default_rules_validate() {
        assert!(StackerRules::default().validate().is_ok());
    }

    #[test]
    fn test_rules_reject_width_below_threshold() {
        let rules = StackerRules {
            initial_width: 10.0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_pct_to_px() {
        assert!((pct_to_px(60.0, FIELD_WIDTH) - 360.0).abs() < 1e-9);
    }
}
