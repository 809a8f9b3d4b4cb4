//! Fruit Match minigame.
//!
//! A 6x6 tile-matching puzzle. Swapping two neighbouring fruits that line up
//! three or more of a kind clears them; the board then falls, refills and
//! keeps clearing until it settles. The game ends when the moves run out.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
