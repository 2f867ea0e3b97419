//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum and the mapping from raw key presses to actions.
//! The mapping depends on the current input mode and on which overlay is
//! open, so the same key can mean different things in different contexts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ui_state::{UIMode, UIOverlay};

/// A high-level command the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Terminal resized; only a redraw is needed.
    Resize(u16, u16),

    ToggleHelp,
    /// Close whatever overlay is on top.
    CloseOverlay,

    EnterSearchMode,
    /// Leave search mode, leaving the typed text in place.
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    /// Apply the typed search text now and leave search mode.
    CommitSearch,

    PrevCategory,
    NextCategory,
    CycleSort,
    ClearFilters,

    MoveSelectionUp,
    MoveSelectionDown,
    /// Open the detail overlay for the row under the cursor.
    OpenSelected,
}

/// Context needed to interpret a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub mode: UIMode,
    pub overlay: UIOverlay,
    pub detail_visible: bool,
}

impl Action {
    /// Maps a key press to an action, or `None` if the key is unbound here.
    pub fn from_key(key: KeyEvent, ctx: KeyContext) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        if ctx.overlay == UIOverlay::Help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Self::CloseOverlay),
                KeyCode::Char('q') => Some(Self::Quit),
                _ => None,
            };
        }

        if ctx.detail_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => Some(Self::CloseOverlay),
                KeyCode::Char('q') => Some(Self::Quit),
                _ => None,
            };
        }

        match ctx.mode {
            UIMode::Search => Self::from_search_key(key),
            UIMode::Browse => Self::from_browse_key(key),
        }
    }

    fn from_search_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Esc => Some(Self::ExitSearchMode),
            KeyCode::Enter => Some(Self::CommitSearch),
            KeyCode::Backspace => Some(Self::SearchBackspace),
            KeyCode::Up => Some(Self::MoveSelectionUp),
            KeyCode::Down => Some(Self::MoveSelectionDown),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::SearchInput(c))
            }
            _ => None,
        }
    }

    fn from_browse_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('?') => Some(Self::ToggleHelp),
            KeyCode::Char('/') => Some(Self::EnterSearchMode),

            KeyCode::Left | KeyCode::Char('h') => Some(Self::PrevCategory),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::NextCategory),
            KeyCode::Char('s') => Some(Self::CycleSort),
            KeyCode::Char('c') => Some(Self::ClearFilters),

            KeyCode::Up | KeyCode::Char('k') => Some(Self::MoveSelectionUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::MoveSelectionDown),
            KeyCode::Enter => Some(Self::OpenSelected),
            KeyCode::Esc => Some(Self::CloseOverlay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn browse() -> KeyContext {
        KeyContext {
            mode: UIMode::Browse,
            overlay: UIOverlay::None,
            detail_visible: false,
        }
    }

    #[test]
    fn browse_keys() {
        let ctx = browse();
        assert_eq!(Action::from_key(key(KeyCode::Char('/')), ctx), Some(Action::EnterSearchMode));
        assert_eq!(Action::from_key(key(KeyCode::Char('l')), ctx), Some(Action::NextCategory));
        assert_eq!(Action::from_key(key(KeyCode::Left), ctx), Some(Action::PrevCategory));
        assert_eq!(Action::from_key(key(KeyCode::Char('s')), ctx), Some(Action::CycleSort));
        assert_eq!(Action::from_key(key(KeyCode::Char('j')), ctx), Some(Action::MoveSelectionDown));
        assert_eq!(Action::from_key(key(KeyCode::Enter), ctx), Some(Action::OpenSelected));
        assert_eq!(Action::from_key(key(KeyCode::Char('q')), ctx), Some(Action::Quit));
        assert_eq!(Action::from_key(key(KeyCode::Char('x')), ctx), None);
    }

    #[test]
    fn search_mode_captures_letters() {
        let ctx = KeyContext {
            mode: UIMode::Search,
            ..browse()
        };
        assert_eq!(Action::from_key(key(KeyCode::Char('q')), ctx), Some(Action::SearchInput('q')));
        assert_eq!(Action::from_key(key(KeyCode::Char('s')), ctx), Some(Action::SearchInput('s')));
        assert_eq!(Action::from_key(key(KeyCode::Enter), ctx), Some(Action::CommitSearch));
        assert_eq!(Action::from_key(key(KeyCode::Esc), ctx), Some(Action::ExitSearchMode));
        assert_eq!(Action::from_key(key(KeyCode::Backspace), ctx), Some(Action::SearchBackspace));
    }

    #[test]
    fn overlays_take_precedence() {
        let help = KeyContext {
            overlay: UIOverlay::Help,
            ..browse()
        };
        assert_eq!(Action::from_key(key(KeyCode::Char('?')), help), Some(Action::CloseOverlay));
        assert_eq!(Action::from_key(key(KeyCode::Char('s')), help), None);

        let detail = KeyContext {
            mode: UIMode::Search,
            detail_visible: true,
            ..browse()
        };
        assert_eq!(Action::from_key(key(KeyCode::Esc), detail), Some(Action::CloseOverlay));
        assert_eq!(Action::from_key(key(KeyCode::Char('a')), detail), None);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctx = KeyContext {
            mode: UIMode::Search,
            ..browse()
        };
        assert_eq!(Action::from_key(ctrl_c, ctx), Some(Action::Quit));
        assert_eq!(Action::from_key(ctrl_c, browse()), Some(Action::Quit));
    }
}
