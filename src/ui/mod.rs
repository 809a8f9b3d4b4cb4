pub mod game_common;
pub mod match3_scene;
pub mod runner_scene;
pub mod site_scene;
pub mod stacker_scene;

use arcade::games::ActiveGame;
use arcade::site::Site;
use ratatui::Frame;

/// Draw one frame: the mounted game if any, otherwise the current section,
/// with the result modal on top.
pub fn draw_ui(frame: &mut Frame, site: &Site) {
    let area = frame.size();
    let body = site_scene::render_header(frame, area, site);

    match site.session.as_ref().map(|s| &s.game) {
        Some(ActiveGame::Match3(game)) => match3_scene::render_match3_scene(frame, body, game),
        Some(ActiveGame::Stacker(game)) => stacker_scene::render_stacker_scene(frame, body, game),
        Some(ActiveGame::Runner(game)) => runner_scene::render_runner_scene(frame, body, game),
        None => site_scene::render_section(frame, body, site),
    }

    if let Some(end) = site.result.as_ref() {
        game_common::render_result_modal(frame, area, end);
    }
}
