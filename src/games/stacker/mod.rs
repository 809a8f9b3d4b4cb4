//! Cake Stacker: drop swinging cake layers onto a growing tower.
//!
//! Each layer keeps only the part that overlaps the one below, so sloppy
//! drops make the tower narrower. A landing that overlaps by less than the
//! minimum topples the tower and ends the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
