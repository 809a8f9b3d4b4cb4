//! Cake Stacker logic: swing, drop, landing and tower bookkeeping.

use super::types::*;
use crate::core::tick::FixedStep;
use crate::games::GameInput;
use rand::Rng;

/// Horizontal intersection of two layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub left: f64,
    pub right: f64,
}

impl Overlap {
    /// Width of the intersection, never negative.
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Intersect the horizontal extents of two layers.
pub fn overlap(a: &Segment, b: &Segment) -> Overlap {
    Overlap {
        left: a.left().max(b.left()),
        right: a.right().min(b.right()),
    }
}

/// Points for a landing with `width` pixels of overlap.
pub fn points_for(width: f64, rules: &StackerRules) -> u32 {
    (width * rules.points_per_px).floor().max(0.0) as u32
}

/// Start a new game. The first layer swings in above the base.
pub fn new_game(rules: StackerRules) -> StackerGame {
    StackerGame::new(rules)
}

/// Process player input.
pub fn process_input(game: &mut StackerGame, input: GameInput) {
    if game.is_finished() {
        return;
    }

    // Waiting screen: Action starts the swing
    if game.waiting_to_start {
        if input == GameInput::Action {
            game.waiting_to_start = false;
            game.clock.reset();
        }
        return;
    }

    if input == GameInput::Action {
        drop_layer(game);
    }
}

/// Release the swinging layer. Returns false if nothing is swinging.
pub fn drop_layer(game: &mut StackerGame) -> bool {
    if game.is_finished() || game.waiting_to_start || game.phase != StackerPhase::Swinging {
        return false;
    }
    game.phase = StackerPhase::Dropping;
    game.clock = FixedStep::new(game.rules.drop_tick_ms);
    true
}

/// Advance the game. `dt_ms` is milliseconds since the last call.
/// Returns true if anything moved.
pub fn tick_stacker<R: Rng>(game: &mut StackerGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.is_finished() || game.waiting_to_start {
        return false;
    }

    let steps = game.clock.advance(dt_ms);
    let mut changed = false;
    for _ in 0..steps {
        let phase = game.phase;
        match phase {
            StackerPhase::Swinging => step_swing(game),
            StackerPhase::Dropping => step_drop(game),
            StackerPhase::Settling => spawn_next(game, rng),
            StackerPhase::Failed | StackerPhase::Won => break,
        }
        game.tick_count += 1;
        changed = true;

        // A phase change swaps the clock; leftover steps belong to the old cadence.
        if game.phase != phase {
            break;
        }
    }
    changed
}

/// Move the swinging layer one step, bouncing at the swing bounds.
fn step_swing(game: &mut StackerGame) {
    game.swing_pct += game.rules.swing_step_pct * game.swing_direction;
    if game.swing_pct >= SWING_MAX_PCT {
        game.swing_pct = SWING_MAX_PCT;
        game.swing_direction = -1.0;
    } else if game.swing_pct <= SWING_MIN_PCT {
        game.swing_pct = SWING_MIN_PCT;
        game.swing_direction = 1.0;
    }
}

/// Move the falling layer down one step; land on reaching the tower.
fn step_drop(game: &mut StackerGame) {
    let target = game.target_y();
    game.falling_y += game.rules.drop_step_px;
    if game.falling_y >= target {
        game.falling_y = target;
        land(game);
    }
}

/// Resolve a landing against the top of the tower.
fn land(game: &mut StackerGame) {
    let falling = game.falling_segment();
    let ov = overlap(&falling, &game.top());
    let width = ov.width();
    game.last_overlap = Some(width);

    if width < game.rules.min_overlap {
        log::debug!(
            "stacker: layer {} missed (overlap {:.1}px)",
            game.layers_placed() + 1,
            width
        );
        game.phase = StackerPhase::Failed;
        game.game_result = Some(StackerResult::Loss);
        return;
    }

    game.stack.push(Segment::new(ov.center(), width));
    game.score = game.score.saturating_add(points_for(width, &game.rules));
    game.falling_width = width;

    if game.stack.len() > game.rules.visible_layers as usize {
        game.camera_offset += SEGMENT_STEP;
    }

    if game.layers_placed() >= game.rules.target_layers {
        game.phase = StackerPhase::Won;
        game.game_result = Some(StackerResult::Win);
        return;
    }

    game.phase = StackerPhase::Settling;
    game.clock = FixedStep::new(game.rules.settle_delay_ms);
}

/// Bring in the next layer at a random position.
fn spawn_next<R: Rng>(game: &mut StackerGame, rng: &mut R) {
    game.swing_pct = rng.gen_range(RESPAWN_MIN_PCT..=RESPAWN_MAX_PCT);
    game.swing_direction = 1.0;
    game.falling_y = DROP_START_Y;
    game.phase = StackerPhase::Swinging;
    game.clock = FixedStep::new(game.rules.swing_tick_ms);
}
