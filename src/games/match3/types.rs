//! Fruit Match data structures.
//!
//! A turn-based tile-matching puzzle: swap neighbouring fruits to line up
//! three or more of a kind, within a fixed number of moves.

use crate::core::tick::FixedStep;
use serde::{Deserialize, Serialize};

/// Default board edge length.
pub const GRID_SIZE: usize = 6;
/// Moves available per game.
pub const MOVES_LIMIT: u32 = 20;
/// Score needed for a win when the moves run out.
pub const MATCH_TARGET: u32 = 500;
/// Points per cleared cell.
pub const POINTS_PER_CELL: u32 = 10;
/// Upper bound on `points_per_cell`.
pub const MAX_POINTS_PER_CELL: u32 = 1000;
/// Random fills tried before accepting a board that still contains a run.
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;
/// Pause between cascade stages (clear, gravity, refill).
pub const CASCADE_STAGE_MS: u64 = 200;
/// Shortest run that clears.
pub const MIN_RUN: usize = 3;

/// The fruit alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Strawberry,
    Orange,
    Lemon,
    Grape,
    Watermelon,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Strawberry,
        Symbol::Orange,
        Symbol::Lemon,
        Symbol::Grape,
        Symbol::Watermelon,
    ];

    /// The first `count` symbols of the alphabet (clamped to the full set).
    pub fn alphabet(count: usize) -> &'static [Symbol] {
        &Self::ALL[..count.min(Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strawberry => "Strawberry",
            Self::Orange => "Orange",
            Self::Lemon => "Lemon",
            Self::Grape => "Grape",
            Self::Watermelon => "Watermelon",
        }
    }
}

/// Grid coordinate, `row` counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is a 4-neighbour of `self`.
    pub fn is_adjacent(&self, other: &Pos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Square board of nullable symbols, indexed `cells[row][col]`.
///
/// `None` only appears between the clear and refill stages of a cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Option<Symbol>>>,
}

impl Grid {
    /// An all-empty board.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Build a board from explicit rows. Panics if the rows are not square.
    pub fn from_rows(rows: Vec<Vec<Option<Symbol>>>) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|r| r.len() == size),
            "grid rows must form a square"
        );
        Self { size, cells: rows }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Pos) -> Option<Symbol> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .flatten()
    }

    pub fn set(&mut self, pos: Pos, value: Option<Symbol>) {
        if self.in_bounds(pos) {
            self.cells[pos.row][pos.col] = value;
        }
    }

    pub fn rows(&self) -> &[Vec<Option<Symbol>>] {
        &self.cells
    }

    /// Exchange two cells. Only legal for in-bounds 4-neighbours; anything
    /// else leaves the grid untouched and returns false.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) || !a.is_adjacent(&b) {
            return false;
        }
        let tmp = self.cells[a.row][a.col];
        self.cells[a.row][a.col] = self.cells[b.row][b.col];
        self.cells[b.row][b.col] = tmp;
        true
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }
}

/// Tunable rules for a Fruit Match game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match3Rules {
    pub grid_size: usize,
    /// How many fruits of the alphabet are in play.
    pub symbol_count: usize,
    pub moves: u32,
    pub target_score: u32,
    pub points_per_cell: u32,
    pub cascade_stage_ms: u64,
}

impl Default for Match3Rules {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            symbol_count: Symbol::ALL.len(),
            moves: MOVES_LIMIT,
            target_score: MATCH_TARGET,
            points_per_cell: POINTS_PER_CELL,
            cascade_stage_ms: CASCADE_STAGE_MS,
        }
    }
}

impl Match3Rules {
    /// Reject rule sets that cannot produce a playable board.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < MIN_RUN {
            return Err(format!(
                "grid_size must be at least {}, got {}",
                MIN_RUN, self.grid_size
            ));
        }
        if self.symbol_count < 3 || self.symbol_count > Symbol::ALL.len() {
            return Err(format!(
                "symbol_count must be between 3 and {}, got {}",
                Symbol::ALL.len(),
                self.symbol_count
            ));
        }
        if self.moves == 0 {
            return Err("moves must be positive".to_string());
        }
        if self.points_per_cell == 0 || self.points_per_cell > MAX_POINTS_PER_CELL {
            return Err(format!(
                "points_per_cell must be between 1 and {}, got {}",
                MAX_POINTS_PER_CELL, self.points_per_cell
            ));
        }
        Ok(())
    }

    pub fn alphabet(&self) -> &'static [Symbol] {
        Symbol::alphabet(self.symbol_count)
    }
}

/// Game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match3Result {
    Win,
    Loss,
}

/// The three discrete steps of one cascade iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    /// Runs are about to be cleared.
    Clear,
    /// Cleared cells are about to be compacted downward.
    Gravity,
    /// Empty top cells are about to be refilled.
    Refill,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct Match3Game {
    pub rules: Match3Rules,
    pub grid: Grid,
    pub score: u32,
    pub moves_left: u32,
    pub cursor: Pos,
    pub selected: Option<Pos>,
    /// Next cascade stage to apply, `None` when the board is at rest.
    pub cascade: Option<CascadeStage>,
    /// Iterations of the current cascade (for the combo banner).
    pub cascade_depth: u32,
    /// Paces cascade stages so intermediate boards stay visible.
    pub stage_clock: FixedStep,
    pub game_result: Option<Match3Result>,
}

impl Match3Game {
    /// Mount a new game around an already generated board.
    pub fn with_grid(rules: Match3Rules, grid: Grid) -> Self {
        let center = grid.size() / 2;
        Self {
            moves_left: rules.moves,
            stage_clock: FixedStep::new(rules.cascade_stage_ms),
            rules,
            grid,
            score: 0,
            cursor: Pos::new(center, center),
            selected: None,
            cascade: None,
            cascade_depth: 0,
            game_result: None,
        }
    }

    pub fn is_cascading(&self) -> bool {
        self.cascade.is_some()
    }

    /// Move the cursor, clamping to the board.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = self.grid.size() as i32 - 1;
        let row = (self.cursor.row as i32 + d_row).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + d_col).clamp(0, max) as usize;
        self.cursor = Pos::new(row, col);
    }
}
