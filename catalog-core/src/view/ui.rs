//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the whole TUI from `AppState`.
//! Rendering never mutates filter state.

use std::time::Instant;

use ratatui::prelude::*;
use tracing::{instrument, trace};

use crate::{
    model::{app_state::AppState, ui_state::UIOverlay},
    view::{
        components::{
            category_chips::CategoryChips, detail_overlay::DetailOverlay,
            empty_state::EmptyState, header::Header, help_overlay::HelpOverlay,
            listing_table::ListingTable, search_bar::SearchBar, status_bar::StatusBar,
        },
        theme,
    },
};

#[derive(Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: std::time::Duration,
}

/// ---------------------------------------------------------------------------
/// Renderer struct (stats only)
/// ---------------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct UIRenderer {
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, f: &mut Frame<'_>, app: &AppState) {
        let start = Instant::now();
        let area = f.area();

        f.render_widget(
            ratatui::widgets::Block::default().style(theme::base_style()),
            area,
        );

        let [header, search, chips, main, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(area);

        Header::render(f, header);
        SearchBar::render(f, app, search);
        CategoryChips::render(f, app, chips);

        if app.filters.results().is_empty() {
            EmptyState::render(f, app, main);
        } else {
            ListingTable::render(f, app, main);
        }

        StatusBar::render(f, app, status);
        self.draw_overlays(f, app, area);

        let dur = start.elapsed();
        self.stats.total += dur;
        self.stats.frames += 1;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
        }
        trace!("Frame {} drawn in {:?}", self.stats.frames, dur);
    }

    fn draw_overlays(&self, f: &mut Frame<'_>, app: &AppState, area: Rect) {
        let selection = app.filters.selection();
        if selection.is_detail_visible {
            if let Some(listing) = &selection.selected {
                DetailOverlay::render(f, listing, area);
            }
        }

        if app.ui.overlay == UIOverlay::Help {
            HelpOverlay::render(f, area);
        }
    }
}

/// Centers a rectangle of the given percent width/height inside area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
