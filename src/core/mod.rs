//! Core plumbing shared by every game: timing, configuration, constants.

pub mod config;
pub mod constants;
pub mod tick;

pub use config::{ArcadeConfig, ConfigError};
pub use constants::*;
pub use tick::FixedStep;
