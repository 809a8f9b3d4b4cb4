//! Elektrosila Arcade: three terminal mini-games inside a small promo site.
//!
//! The library holds the game engines, the session contract, the site shell
//! and configuration. The binary owns the terminal and rendering.

pub mod core;
pub mod games;
pub mod input;
pub mod site;
pub mod utils;
