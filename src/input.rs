//! Key handling: map crossterm key events onto shell and game inputs and
//! dispatch them to the site.

use crate::games::GameInput;
use crate::site::{Site, SiteInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// What the frame loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Unified key → GameInput mapping used by every game.
pub fn map_game_key(key: KeyEvent) -> GameInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => GameInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameInput::Right,
        KeyCode::Char(' ') | KeyCode::Enter => GameInput::Action,
        KeyCode::Esc => GameInput::Back,
        _ => GameInput::Other,
    }
}

pub fn map_site_key(key: KeyEvent) -> SiteInput {
    match key.code {
        KeyCode::Up => SiteInput::Up,
        KeyCode::Down => SiteInput::Down,
        KeyCode::Left | KeyCode::BackTab => SiteInput::PrevSection,
        KeyCode::Right | KeyCode::Tab => SiteInput::NextSection,
        KeyCode::Char(c @ '1'..='5') => SiteInput::Goto(c as usize - '0' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => SiteInput::Select,
        KeyCode::Char('t') | KeyCode::Char('T') => SiteInput::Tournament,
        KeyCode::Esc => SiteInput::Close,
        KeyCode::Char('q') | KeyCode::Char('Q') => SiteInput::Quit,
        _ => SiteInput::Other,
    }
}

/// Dispatch one key press. A mounted game takes every key except Ctrl+C.
pub fn handle_key<R: Rng>(key: KeyEvent, site: &mut Site, rng: &mut R) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    if site.is_playing() {
        site.game_input(map_game_key(key));
    } else {
        site.process_input(map_site_key(key), rng);
    }

    if site.should_quit {
        InputResult::Quit
    } else {
        InputResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ArcadeConfig;
    use crate::games::GameKind;
    use crate::site::Section;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_key_mapping() {
        assert_eq!(map_game_key(key(KeyCode::Char(' '))), GameInput::Action);
        assert_eq!(map_game_key(key(KeyCode::Enter)), GameInput::Action);
        assert_eq!(map_game_key(key(KeyCode::Esc)), GameInput::Back);
        assert_eq!(map_game_key(key(KeyCode::Left)), GameInput::Left);
        assert_eq!(map_game_key(key(KeyCode::Char('x'))), GameInput::Other);
    }

    #[test]
    fn test_site_key_mapping() {
        assert_eq!(map_site_key(key(KeyCode::Char('3'))), SiteInput::Goto(3));
        assert_eq!(map_site_key(key(KeyCode::Char('6'))), SiteInput::Other);
        assert_eq!(map_site_key(key(KeyCode::Tab)), SiteInput::NextSection);
        assert_eq!(map_site_key(key(KeyCode::Char('t'))), SiteInput::Tournament);
    }

    #[test]
    fn test_keys_route_to_mounted_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut site = Site::new(ArcadeConfig::default());
        site.start_game(GameKind::Match3, &mut rng);

        // 'q' is a game key while playing, not a quit
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut site, &mut rng), InputResult::Continue);
        assert!(site.is_playing());

        handle_key(key(KeyCode::Esc), &mut site, &mut rng);
        assert!(!site.is_playing());
        assert_eq!(site.section, Section::Games);
    }

    #[test]
    fn test_quit_keys() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut site = Site::new(ArcadeConfig::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut site, &mut rng), InputResult::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut site, &mut rng), InputResult::Quit);
    }
}
