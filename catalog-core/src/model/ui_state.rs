//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Terminal-only View State
//!
//! Input mode, open overlay, table cursor and a transient status line. Filter
//! and selection state live in the filter controller; nothing here is
//! persisted.

use compact_str::CompactString;

/// Where typed characters go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIMode {
    #[default]
    Browse,
    /// Characters edit the search text.
    Search,
}

/// Modal overlays owned by the terminal UI. The listing detail overlay is
/// driven by the controller's selection instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
}

#[derive(Debug, Clone, Default)]
pub struct UIState {
    pub mode: UIMode,
    pub overlay: UIOverlay,
    /// Row index into the current results.
    pub cursor: usize,
    pub last_status: Option<CompactString>,
}

impl UIState {
    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            UIOverlay::None => UIOverlay::Help,
        };
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keeps the cursor on a valid row after the result set changes.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_status(&mut self, msg: impl Into<CompactString>) {
        self.last_status = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_within_results() {
        let mut ui = UIState::default();
        ui.move_up();
        assert_eq!(ui.cursor, 0);

        ui.move_down(3);
        ui.move_down(3);
        ui.move_down(3);
        assert_eq!(ui.cursor, 2);

        ui.clamp_cursor(1);
        assert_eq!(ui.cursor, 0);
        ui.clamp_cursor(0);
        assert_eq!(ui.cursor, 0);
    }

    #[test]
    fn help_toggles() {
        let mut ui = UIState::default();
        ui.toggle_help();
        assert_eq!(ui.overlay, UIOverlay::Help);
        ui.toggle_help();
        assert_eq!(ui.overlay, UIOverlay::None);
    }
}
