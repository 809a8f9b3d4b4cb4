//! Rooftop Runner: jump over obstacles on an ever faster rooftop.
//!
//! The run only ends in a crash. Crashing after the win score still counts
//! as a win.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
