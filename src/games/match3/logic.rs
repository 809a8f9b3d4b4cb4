//! Fruit Match logic: board generation, run detection, cascade resolution,
//! input processing.

use super::types::*;
use crate::games::GameInput;
use rand::Rng;
use std::collections::BTreeSet;

/// Totals from resolving a board to rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub points: u32,
    /// Clear/gravity/refill iterations performed.
    pub steps: u32,
    pub cleared: u32,
}

/// Pick a random symbol from `alphabet`.
pub fn random_symbol<R: Rng>(alphabet: &[Symbol], rng: &mut R) -> Symbol {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Generate a board with no pre-existing run.
///
/// Fills randomly and retries while any run exists, up to
/// `MAX_GENERATION_ATTEMPTS`. The final attempt is kept even if it still
/// contains a run so generation always terminates.
pub fn generate_board<R: Rng>(size: usize, alphabet: &[Symbol], rng: &mut R) -> Grid {
    let mut grid = random_fill(size, alphabet, rng);
    let mut attempts = 1;
    while attempts < MAX_GENERATION_ATTEMPTS && !find_runs(&grid).is_empty() {
        grid = random_fill(size, alphabet, rng);
        attempts += 1;
    }
    if attempts > 1 {
        log::debug!("match3 board generated after {} attempts", attempts);
    }
    grid
}

fn random_fill<R: Rng>(size: usize, alphabet: &[Symbol], rng: &mut R) -> Grid {
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| Some(random_symbol(alphabet, rng)))
                .collect()
        })
        .collect();
    Grid::from_rows(rows)
}

/// Every cell that belongs to a horizontal or vertical run of at least
/// `MIN_RUN` identical non-empty symbols.
pub fn find_runs(grid: &Grid) -> BTreeSet<Pos> {
    let size = grid.size();
    let mut found = BTreeSet::new();

    for row in 0..size {
        collect_runs((0..size).map(|col| Pos::new(row, col)), grid, &mut found);
    }
    for col in 0..size {
        collect_runs((0..size).map(|row| Pos::new(row, col)), grid, &mut found);
    }

    found
}

/// Scan one line of positions and record every maximal run of length >= MIN_RUN.
fn collect_runs(line: impl Iterator<Item = Pos>, grid: &Grid, found: &mut BTreeSet<Pos>) {
    let mut run: Vec<Pos> = Vec::new();
    let mut run_symbol: Option<Symbol> = None;

    for pos in line {
        let symbol = grid.get(pos);
        if symbol.is_some() && symbol == run_symbol {
            run.push(pos);
            continue;
        }
        if run.len() >= MIN_RUN {
            found.extend(run.iter().copied());
        }
        run.clear();
        run.push(pos);
        run_symbol = symbol;
    }
    if run_symbol.is_some() && run.len() >= MIN_RUN {
        found.extend(run);
    }
}

/// Empty the given cells. Returns how many were actually cleared.
pub fn clear_runs(grid: &mut Grid, runs: &BTreeSet<Pos>) -> u32 {
    let mut cleared = 0;
    for &pos in runs {
        if grid.get(pos).is_some() {
            grid.set(pos, None);
            cleared += 1;
        }
    }
    cleared
}

/// Compact every column downward so empty cells end up on top.
pub fn apply_gravity(grid: &mut Grid) {
    let size = grid.size();
    for col in 0..size {
        let mut write_row = size;
        for row in (0..size).rev() {
            let pos = Pos::new(row, col);
            if let Some(symbol) = grid.get(pos) {
                write_row -= 1;
                if write_row != row {
                    grid.set(Pos::new(write_row, col), Some(symbol));
                    grid.set(pos, None);
                }
            }
        }
    }
}

/// Fill every empty cell with a random symbol.
pub fn refill<R: Rng>(grid: &mut Grid, alphabet: &[Symbol], rng: &mut R) {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row, col);
            if grid.get(pos).is_none() {
                grid.set(pos, Some(random_symbol(alphabet, rng)));
            }
        }
    }
}

/// Resolve the board to rest in one go: clear, compact and refill until no
/// run remains. A refill may create new runs; the next iteration clears them.
pub fn resolve<R: Rng>(
    grid: &mut Grid,
    alphabet: &[Symbol],
    points_per_cell: u32,
    rng: &mut R,
) -> CascadeReport {
    let mut report = CascadeReport::default();
    loop {
        let runs = find_runs(grid);
        if runs.is_empty() {
            return report;
        }
        let cleared = clear_runs(grid, &runs);
        report.cleared += cleared;
        report.points = report
            .points
            .saturating_add(cleared.saturating_mul(points_per_cell));
        report.steps += 1;
        apply_gravity(grid);
        refill(grid, alphabet, rng);
    }
}

/// Start a new game with a freshly generated board.
pub fn new_game<R: Rng>(rules: Match3Rules, rng: &mut R) -> Match3Game {
    let grid = generate_board(rules.grid_size, rules.alphabet(), rng);
    Match3Game::with_grid(rules, grid)
}

/// Process player input. Ignored while a cascade is running or after the game ended.
pub fn process_input(game: &mut Match3Game, input: GameInput) {
    if game.game_result.is_some() || game.is_cascading() {
        return;
    }

    match input {
        GameInput::Up => game.move_cursor(-1, 0),
        GameInput::Down => game.move_cursor(1, 0),
        GameInput::Left => game.move_cursor(0, -1),
        GameInput::Right => game.move_cursor(0, 1),
        GameInput::Action => {
            let cursor = game.cursor;
            select_cell(game, cursor);
        }
        GameInput::Back | GameInput::Other => {}
    }
}

/// Handle a click on `pos`. Returns true if a swap was performed.
///
/// First click selects, clicking the selection again clears it, clicking a
/// neighbour swaps (spending a move), clicking anywhere else moves the
/// selection.
pub fn select_cell(game: &mut Match3Game, pos: Pos) -> bool {
    if game.game_result.is_some() || game.is_cascading() || !game.grid.in_bounds(pos) {
        return false;
    }

    let Some(selected) = game.selected else {
        game.selected = Some(pos);
        return false;
    };

    if selected == pos {
        game.selected = None;
        return false;
    }

    if !game.grid.swap(selected, pos) {
        game.selected = Some(pos);
        return false;
    }

    game.selected = None;
    game.moves_left = game.moves_left.saturating_sub(1);

    if find_runs(&game.grid).is_empty() {
        finish_turn(game);
    } else {
        game.cascade = Some(CascadeStage::Clear);
        game.cascade_depth = 0;
        game.stage_clock.reset();
    }
    true
}

/// Advance the cascade animation. Returns true if the board changed.
pub fn tick_match3<R: Rng>(game: &mut Match3Game, dt_ms: u64, rng: &mut R) -> bool {
    if game.game_result.is_some() || !game.is_cascading() {
        return false;
    }

    let steps = game.stage_clock.advance(dt_ms);
    let mut changed = false;
    for _ in 0..steps {
        step_cascade(game, rng);
        changed = true;
        if !game.is_cascading() {
            break;
        }
    }
    changed
}

/// Apply one cascade stage and queue the next.
fn step_cascade<R: Rng>(game: &mut Match3Game, rng: &mut R) {
    let Some(stage) = game.cascade else {
        return;
    };

    match stage {
        CascadeStage::Clear => {
            let runs = find_runs(&game.grid);
            if runs.is_empty() {
                game.cascade = None;
                finish_turn(game);
                return;
            }
            let cleared = clear_runs(&mut game.grid, &runs);
            game.score = game
                .score
                .saturating_add(cleared.saturating_mul(game.rules.points_per_cell));
            game.cascade_depth += 1;
            game.cascade = Some(CascadeStage::Gravity);
        }
        CascadeStage::Gravity => {
            apply_gravity(&mut game.grid);
            game.cascade = Some(CascadeStage::Refill);
        }
        CascadeStage::Refill => {
            refill(&mut game.grid, game.rules.alphabet(), rng);
            game.cascade = Some(CascadeStage::Clear);
        }
    }
}

/// End the game once the last move has fully resolved.
fn finish_turn(game: &mut Match3Game) {
    if game.moves_left > 0 {
        return;
    }
    game.game_result = Some(if game.score >= game.rules.target_score {
        Match3Result::Win
    } else {
        Match3Result::Loss
    });
}
