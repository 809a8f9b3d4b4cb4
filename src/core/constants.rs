// Frame loop
pub const FRAME_POLL_MS: u64 = 16;
/// Largest wall-clock delta a single frame may feed into a game clock.
/// Keeps a paused or lagging terminal from fast-forwarding a game.
pub const MAX_FRAME_DT_MS: u64 = 100;

// Files under ~/.arcade/
pub const ARCADE_DIR_NAME: &str = ".arcade";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "arcade.log";

// Site
pub const SITE_TITLE: &str = "Elektrosila Games";
