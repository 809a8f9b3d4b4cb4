//! Integration test: site navigation, game sessions and the result modal
//!
//! Drives `Site` the way the key handler does and checks that configured
//! rules reach the games.

use arcade::core::config::ArcadeConfig;
use arcade::games::{ActiveGame, GameInput, GameKind, GameOutcome};
use arcade::site::{Section, Site, SiteInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(9)
}

/// Open the games section and launch the game at `index`.
fn launch(site: &mut Site, index: usize, rng: &mut ChaCha8Rng) {
    site.process_input(SiteInput::Goto(2), rng);
    for _ in 0..index {
        site.process_input(SiteInput::Down, rng);
    }
    site.process_input(SiteInput::Select, rng);
    assert!(site.is_playing());
}

/// Tick until the mounted game ends.
fn play_out(site: &mut Site, rng: &mut ChaCha8Rng) {
    for _ in 0..5000 {
        if !site.is_playing() {
            return;
        }
        site.tick(16, rng);
    }
    panic!("game never ended");
}

fn set_stacker_position(site: &mut Site, pct: f64) {
    match site.session.as_mut().map(|s| &mut s.game) {
        Some(ActiveGame::Stacker(game)) => game.swing_pct = pct,
        _ => panic!("expected stacker"),
    }
}

#[test]
fn test_missed_layer_shows_loss_modal() {
    let mut site = Site::new(ArcadeConfig::default());
    let mut rng = rng();
    launch(&mut site, 1, &mut rng);

    site.game_input(GameInput::Action);
    set_stacker_position(&mut site, 85.0);
    site.game_input(GameInput::Action);
    play_out(&mut site, &mut rng);

    let end = site.result.expect("result modal");
    assert_eq!(end.kind, GameKind::Stacker);
    assert_eq!(end.outcome, GameOutcome::Lose);
    assert_eq!(end.score, 0);

    // Keys meant for the shell only affect the modal now
    site.process_input(SiteInput::NextSection, &mut rng);
    assert_eq!(site.section, Section::Games);
    site.process_input(SiteInput::Tournament, &mut rng);
    assert!(site.result.is_none());
    assert_eq!(site.section, Section::Tournament);
}

#[test]
fn test_play_again_returns_to_games() {
    let mut site = Site::new(ArcadeConfig::default());
    let mut rng = rng();
    launch(&mut site, 1, &mut rng);
    site.game_input(GameInput::Action);
    set_stacker_position(&mut site, 15.0);
    site.game_input(GameInput::Action);
    play_out(&mut site, &mut rng);
    assert!(site.result.is_some());

    site.process_input(SiteInput::Select, &mut rng);
    assert!(site.result.is_none());
    assert_eq!(site.section, Section::Games);
    assert!(!site.is_playing());

    site.process_input(SiteInput::Select, &mut rng);
    assert!(site.is_playing());
    assert_eq!(
        site.session.as_ref().map(|s| s.kind()),
        Some(GameKind::Stacker)
    );
}

#[test]
fn test_back_leaves_without_result() {
    let mut site = Site::new(ArcadeConfig::default());
    let mut rng = rng();
    launch(&mut site, 2, &mut rng);
    site.game_input(GameInput::Action);
    for _ in 0..20 {
        site.tick(30, &mut rng);
    }

    site.game_input(GameInput::Back);
    assert!(!site.is_playing());
    assert!(site.result.is_none());
    assert_eq!(site.section, Section::Games);
    assert_eq!(site.selected_game(), GameKind::Runner);
}

#[test]
fn test_shell_keys_ignored_while_playing() {
    let mut site = Site::new(ArcadeConfig::default());
    let mut rng = rng();
    launch(&mut site, 0, &mut rng);

    site.process_input(SiteInput::Goto(5), &mut rng);
    site.process_input(SiteInput::Quit, &mut rng);
    assert_eq!(site.section, Section::Games);
    assert!(!site.should_quit);
    assert!(site.is_playing());
}

#[test]
fn test_configured_rules_reach_games() {
    let config = ArcadeConfig::from_json(
        r#"{ "stacker": { "target_layers": 1 }, "runner": { "initial_speed": 6.0 } }"#,
    )
    .expect("valid config");
    let mut site = Site::new(config);
    let mut rng = rng();

    // One perfect layer wins a one-layer tower
    launch(&mut site, 1, &mut rng);
    site.game_input(GameInput::Action);
    set_stacker_position(&mut site, 50.0);
    site.game_input(GameInput::Action);
    play_out(&mut site, &mut rng);
    let end = site.result.expect("result modal");
    assert_eq!(end.outcome, GameOutcome::Win);
    assert_eq!(end.score, 280);

    site.process_input(SiteInput::Close, &mut rng);
    site.process_input(SiteInput::Down, &mut rng);
    site.process_input(SiteInput::Select, &mut rng);
    match site.session.as_ref().map(|s| &s.game) {
        Some(ActiveGame::Runner(game)) => assert_eq!(game.speed, 6.0),
        _ => panic!("expected runner"),
    }
}
