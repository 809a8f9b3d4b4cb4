//! Rooftop Runner logic: jump arc, obstacle spawning, collision, speed ramp.

use super::types::*;
use crate::games::GameInput;

/// Start a new game.
pub fn new_game(rules: RunnerRules) -> RunnerGame {
    RunnerGame::new(rules)
}

/// Process player input.
pub fn process_input(game: &mut RunnerGame, input: GameInput) {
    if game.game_result.is_some() {
        return;
    }

    // Waiting screen: Action starts the run
    if game.waiting_to_start {
        if input == GameInput::Action {
            game.waiting_to_start = false;
            game.clock.reset();
        }
        return;
    }

    if matches!(input, GameInput::Action | GameInput::Up) {
        jump(game);
    }
}

/// Take off. Ignored mid-jump. Returns true if a jump started.
pub fn jump(game: &mut RunnerGame) -> bool {
    if game.game_result.is_some() || game.waiting_to_start || game.is_jumping() {
        return false;
    }
    game.jump_elapsed_ms = Some(0);
    true
}

/// Advance the run. `dt_ms` is milliseconds since the last call.
/// Returns true if the game state changed.
pub fn tick_runner(game: &mut RunnerGame, dt_ms: u64) -> bool {
    if game.game_result.is_some() || game.waiting_to_start {
        return false;
    }

    let steps = game.clock.advance(dt_ms);
    for _ in 0..steps {
        step(game);
        if game.game_result.is_some() {
            break;
        }
    }
    steps > 0
}

/// Single simulation tick.
fn step(game: &mut RunnerGame) {
    let tick_ms = game.rules.tick_ms;
    game.tick_count += 1;

    // 1. Score and speed ramp
    game.score += 1;
    if game.score % game.rules.speed_up_every == 0 {
        game.speed = (game.speed + game.rules.speed_step).min(game.rules.max_speed);
    }

    // 2. Jump progress
    if let Some(elapsed) = game.jump_elapsed_ms {
        let elapsed = elapsed + tick_ms;
        game.jump_elapsed_ms = if elapsed >= game.rules.jump_duration_ms {
            None
        } else {
            Some(elapsed)
        };
    }

    // 3. Spawn on cadence
    game.since_spawn_ms += tick_ms;
    if game.since_spawn_ms >= game.rules.spawn_interval_ms(game.speed) {
        game.since_spawn_ms = 0;
        spawn_obstacle(game);
    }

    // 4. Advance and cull
    for obstacle in &mut game.obstacles {
        obstacle.x -= game.speed;
    }
    game.obstacles.retain(|o| o.x > DESPAWN_X);

    // 5. Leg animation
    if !game.is_jumping() && game.tick_count % LEG_FRAME_TICKS == 0 {
        game.leg_frame ^= 1;
    }

    // 6. Collision
    let y = game.runner_y();
    if game
        .obstacles
        .iter()
        .any(|o| collides(o, y, game.rules.min_clearance))
    {
        game.game_result = Some(if game.score >= game.rules.win_score {
            RunnerResult::Win
        } else {
            RunnerResult::Loss
        });
        log::debug!(
            "runner: crashed at score {} (speed {:.2})",
            game.score,
            game.speed
        );
    }
}

/// Append a new obstacle at the spawn line.
pub fn spawn_obstacle(game: &mut RunnerGame) {
    let id = game.next_obstacle_id;
    game.next_obstacle_id += 1;
    game.obstacles.push(Obstacle { id, x: SPAWN_X });
}

/// True if the runner at height `runner_y` hits `obstacle`: the horizontal
/// bands overlap and the runner is below the clearance height.
pub fn collides(obstacle: &Obstacle, runner_y: f64, min_clearance: f64) -> bool {
    let bands_overlap = obstacle.x < PLAYER_RIGHT && obstacle.right() > PLAYER_LEFT;
    bands_overlap && runner_y < min_clearance
}
