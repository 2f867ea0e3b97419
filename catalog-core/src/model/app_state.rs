//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Filter Controller + Terminal UI State
//!
//! Single owner of everything the renderer reads. Actions are applied here
//! synchronously; the event loop only decides when to call in.

use compact_str::CompactString;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::{
    controller::{
        actions::{Action, KeyContext},
        filter_state::FilterController,
    },
    model::{
        listing::{ALL_CATEGORIES, SharedListing},
        ui_state::{UIMode, UIOverlay, UIState},
    },
    storage::prefs::PrefsStore,
};

/// Store handle chosen at startup (file-backed, or disabled).
pub type DynPrefsStore = Box<dyn PrefsStore + Send>;

/// A category chip as rendered: name and count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub name: CompactString,
    pub count: usize,
}

pub struct AppState {
    pub filters: FilterController<DynPrefsStore>,
    pub ui: UIState,
}

impl AppState {
    pub fn new(filters: FilterController<DynPrefsStore>) -> Self {
        Self {
            filters,
            ui: UIState::default(),
        }
    }

    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            mode: self.ui.mode,
            overlay: self.ui.overlay,
            detail_visible: self.filters.selection().is_detail_visible,
        }
    }

    /// "Todas" with the full catalog size, then one chip per category
    /// summary.
    #[must_use]
    pub fn category_chips(&self) -> Vec<CategoryChip> {
        let mut chips = Vec::with_capacity(self.filters.category_summaries().len() + 1);
        chips.push(CategoryChip {
            name: CompactString::const_new(ALL_CATEGORIES),
            count: self.filters.total_count(),
        });
        chips.extend(self.filters.category_summaries().iter().map(|s| CategoryChip {
            name: s.name.clone(),
            count: s.count,
        }));
        chips
    }

    /// Index of the active category among the chips, if it has one.
    #[must_use]
    pub fn active_chip(&self) -> Option<usize> {
        let active = self.filters.descriptor().category.as_str();
        self.category_chips().iter().position(|c| c.name == active)
    }

    #[must_use]
    pub fn listing_under_cursor(&self) -> Option<&SharedListing> {
        self.filters.results().get(self.ui.cursor)
    }

    /// Applies one action. Returns false when the app should exit.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        debug!("Handling action: {:?}", action);

        match action {
            Action::Quit => {
                info!("Quit requested");
                return false;
            }
            Action::Resize(..) => {}

            Action::ToggleHelp => self.ui.toggle_help(),
            Action::CloseOverlay => {
                if self.ui.overlay != UIOverlay::None {
                    self.ui.overlay = UIOverlay::None;
                } else {
                    self.filters.dismiss_detail(now);
                }
            }

            Action::EnterSearchMode => self.ui.mode = UIMode::Search,
            Action::ExitSearchMode => self.ui.mode = UIMode::Browse,
            Action::SearchInput(c) => {
                let mut text = self.filters.descriptor().search_text.clone();
                text.push(c);
                self.filters.set_search_text(text, now);
            }
            Action::SearchBackspace => {
                let mut text = self.filters.descriptor().search_text.clone();
                if text.pop().is_some() {
                    self.filters.set_search_text(text, now);
                }
            }
            Action::CommitSearch => {
                self.filters.flush_search();
                self.ui.mode = UIMode::Browse;
            }

            Action::PrevCategory => self.step_category(false),
            Action::NextCategory => self.step_category(true),
            Action::CycleSort => {
                let next = self.filters.descriptor().sort_key.cycle();
                self.filters.set_sort_key(next);
                self.ui.set_status(format!("Ordenado por {}", next.label()));
            }
            Action::ClearFilters => {
                self.filters.clear_filters();
                self.ui.set_status("Filtros limpos");
            }

            Action::MoveSelectionUp => self.ui.move_up(),
            Action::MoveSelectionDown => self.ui.move_down(self.filters.results().len()),
            Action::OpenSelected => {
                if let Some(listing) = self.listing_under_cursor().cloned() {
                    self.filters.select_listing(listing);
                }
            }
        }

        self.ui.clamp_cursor(self.filters.results().len());
        true
    }

    /// Fires due controller timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.filters.poll_timers(now);
        if changed {
            self.ui.clamp_cursor(self.filters.results().len());
        }
        changed
    }

    fn step_category(&mut self, forward: bool) {
        let chips = self.category_chips();
        let len = chips.len();
        let next = match (self.active_chip(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            // Active category has no chip (unknown, or hidden by the search).
            (None, true) => usize::from(len > 1),
            (None, false) => len - 1,
        };
        self.filters.set_category(chips[next].name.as_str());
        self.ui.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        controller::filter_state::ControllerOptions,
        model::{catalog::Catalog, listing::SortKey},
        storage::prefs::MemoryPrefsStore,
    };

    fn app() -> AppState {
        let store: DynPrefsStore = Box::new(MemoryPrefsStore::new());
        AppState::new(FilterController::load(
            Catalog::builtin(),
            store,
            ControllerOptions::default(),
        ))
    }

    #[test]
    fn chips_start_with_todas_and_total() {
        let app = app();
        let chips = app.category_chips();
        assert_eq!(chips.len(), 9);
        assert_eq!(chips[0], CategoryChip { name: "Todas".into(), count: 16 });
        assert_eq!(chips[1].name, "Reparos & Manutenção");
        assert_eq!(app.active_chip(), Some(0));
    }

    #[test]
    fn category_steps_wrap_around() {
        let mut app = app();
        let now = Instant::now();

        assert!(app.handle(Action::PrevCategory, now));
        assert_eq!(app.filters.descriptor().category, "Automotivo");

        app.handle(Action::NextCategory, now);
        assert_eq!(app.filters.descriptor().category, ALL_CATEGORIES);

        app.handle(Action::NextCategory, now);
        assert_eq!(app.filters.descriptor().category, "Reparos & Manutenção");
        assert_eq!(app.filters.results().len(), 2);
    }

    #[test]
    fn stepping_from_a_category_without_chip() {
        let mut app = app();
        let now = Instant::now();

        app.filters.set_category("Jardinagem");
        assert_eq!(app.active_chip(), None);
        app.handle(Action::NextCategory, now);
        assert_eq!(app.filters.descriptor().category, "Reparos & Manutenção");

        app.filters.set_category("Jardinagem");
        app.handle(Action::PrevCategory, now);
        assert_eq!(app.filters.descriptor().category, "Automotivo");

        // Search narrows the chips down to "Todas" and one category.
        app.filters.set_category("Pets");
        app.filters.set_search_text("aulas", now);
        app.filters.flush_search();
        assert_eq!(app.active_chip(), None);
        app.handle(Action::PrevCategory, now);
        assert_eq!(app.filters.descriptor().category, "Aulas & Treinamentos");
    }

    #[test]
    fn typing_debounces_until_tick() {
        let mut app = app();
        let now = Instant::now();

        app.handle(Action::EnterSearchMode, now);
        for c in "pet".chars() {
            app.handle(Action::SearchInput(c), now);
        }
        assert_eq!(app.filters.descriptor().search_text, "pet");
        assert_eq!(app.filters.results().len(), 16);

        assert!(!app.tick(now + Duration::from_millis(100)));
        assert!(app.tick(now + Duration::from_millis(300)));
        assert_eq!(app.filters.results().len(), 2);

        app.handle(Action::SearchBackspace, now);
        assert_eq!(app.filters.descriptor().search_text, "pe");
    }

    #[test]
    fn enter_commits_search_immediately() {
        let mut app = app();
        let now = Instant::now();
        app.ui.cursor = 10;

        app.handle(Action::EnterSearchMode, now);
        app.handle(Action::SearchInput('d'), now);
        app.handle(Action::SearchInput('j'), now);
        app.handle(Action::CommitSearch, now);

        assert_eq!(app.ui.mode, UIMode::Browse);
        assert_eq!(app.filters.committed_search(), "dj");
        assert_eq!(app.filters.results().len(), 1);
        assert_eq!(app.ui.cursor, 0);
    }

    #[test]
    fn open_and_close_detail() {
        let mut app = app();
        let now = Instant::now();

        app.handle(Action::MoveSelectionDown, now);
        app.handle(Action::OpenSelected, now);
        let expected = app.filters.results()[1].id;
        assert!(app.key_context().detail_visible);
        assert_eq!(app.filters.selection().selected.as_ref().map(|l| l.id), Some(expected));

        app.handle(Action::CloseOverlay, now);
        assert!(!app.key_context().detail_visible);
        assert!(app.tick(now + Duration::from_millis(200)));
        assert!(app.filters.selection().selected.is_none());
    }

    #[test]
    fn sort_cycle_and_clear_report_status() {
        let mut app = app();
        let now = Instant::now();

        app.handle(Action::CycleSort, now);
        assert_eq!(app.filters.descriptor().sort_key, SortKey::PriceAscending);
        assert_eq!(app.ui.last_status.as_deref(), Some("Ordenado por Preço ↑"));
        assert_eq!(app.filters.results()[0].id, 9);

        app.handle(Action::NextCategory, now);
        app.handle(Action::ClearFilters, now);
        assert_eq!(app.filters.descriptor().category, ALL_CATEGORIES);
        assert_eq!(app.filters.descriptor().sort_key, SortKey::PriceAscending);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        assert!(!app.handle(Action::Quit, Instant::now()));
    }
}
