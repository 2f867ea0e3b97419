//! src/controller/filter_state.rs
//! ============================================================================
//! # FilterController: Owned Filter State with Debounce and Persistence
//!
//! Owns the query descriptor and the detail-overlay selection for one
//! catalog. Mutations go through the setters only; derived reads (results and
//! category summaries) are recomputed inside every committing mutation and
//! cached, so a reader never sees values older than the last commit.
//!
//! Two timers exist, both driven by the caller through [`FilterController::poll_timers`]:
//! - search text is debounced; only the settled value reaches the engine
//! - dismissing the detail overlay hides it immediately and drops the
//!   selected listing after a short delay
//!
//! Category and sort key are written to durable storage on every change.
//! Search text never is. Storage failures are logged and ignored.

use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::{
    config::{DEFAULT_PREFS_KEY, TimingConfig},
    model::{
        catalog::Catalog,
        listing::{
            ALL_CATEGORIES, CategorySummary, PersistedSubset, QueryDescriptor, SelectionState,
            SharedListing, SortKey,
        },
    },
    query::engine::{apply_query, count_by_category, narrow_by_search},
    storage::prefs::{PrefsStore, load_pref_with, save_pref_with},
    util::debounce::{Debouncer, DelayedAction},
};

/// Construction options for [`FilterController`].
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub prefs_key: String,
    pub timing: TimingConfig,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            prefs_key: DEFAULT_PREFS_KEY.to_string(),
            timing: TimingConfig::default(),
        }
    }
}

pub struct FilterController<S: PrefsStore> {
    catalog: Catalog,
    store: S,
    prefs_key: String,

    /// Raw descriptor as last set by the user.
    descriptor: QueryDescriptor,
    /// Settled search text actually fed to the engine.
    committed_search: String,
    search_debounce: Debouncer<String>,

    selection: SelectionState,
    dismiss: DelayedAction,

    results: Vec<SharedListing>,
    summaries: Vec<CategorySummary>,
    recomputes: u64,
}

impl<S: PrefsStore> FilterController<S> {
    /// Builds a controller, restoring category and sort key from `store`.
    ///
    /// An absent or malformed record silently falls back to defaults.
    pub fn load(catalog: Catalog, store: S, options: ControllerOptions) -> Self {
        let mut descriptor = QueryDescriptor::default();
        if let Some(saved) = Self::restore(&store, &options.prefs_key) {
            info!(
                "Restored filters: category='{}' sort={}",
                saved.category, saved.sort_key
            );
            descriptor.category = saved.category;
            descriptor.sort_key = saved.sort_key;
        }

        let mut controller = Self {
            catalog,
            store,
            prefs_key: options.prefs_key,
            descriptor,
            committed_search: String::new(),
            search_debounce: Debouncer::new(options.timing.search()),
            selection: SelectionState::default(),
            dismiss: DelayedAction::new(options.timing.dismiss()),
            results: Vec::new(),
            summaries: Vec::new(),
            recomputes: 0,
        };
        controller.recompute();
        controller
    }

    fn restore(store: &S, key: &str) -> Option<PersistedSubset> {
        match load_pref_with::<S, PersistedSubset>(store, key) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Discarding saved filters under '{}': {}", key, e);
                None
            }
        }
    }

    /* ----------------------------- setters ----------------------------- */

    /// Unknown categories are accepted and yield an empty result set.
    pub fn set_category(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.descriptor.category == name {
            return;
        }
        self.descriptor.category = name;
        self.recompute();
        self.persist();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.descriptor.sort_key == key {
            return;
        }
        self.descriptor.sort_key = key;
        self.recompute();
        self.persist();
    }

    /// Records raw search text; the engine sees it once it has been quiet
    /// for the debounce window.
    pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if self.descriptor.search_text == text {
            return;
        }
        self.descriptor.search_text.clone_from(&text);
        self.search_debounce.submit(text, now);
    }

    /// Commits pending search text immediately. Returns true if results changed.
    pub fn flush_search(&mut self) -> bool {
        match self.search_debounce.flush() {
            Some(text) => self.commit_search(text),
            None => false,
        }
    }

    /// Back to "Todas" with no search text.
    pub fn clear_filters(&mut self) {
        self.search_debounce.cancel();
        self.descriptor.search_text.clear();

        let category_changed = self.descriptor.category != ALL_CATEGORIES;
        let search_changed = !self.committed_search.is_empty();
        if category_changed {
            self.descriptor.category = ALL_CATEGORIES.to_string();
        }
        self.committed_search.clear();

        if category_changed || search_changed {
            self.recompute();
        }
        if category_changed {
            self.persist();
        }
    }

    pub fn select_listing(&mut self, listing: SharedListing) {
        // A clear scheduled by an earlier dismiss must not blank this one.
        self.dismiss.cancel();
        self.selection = SelectionState {
            selected: Some(listing),
            is_detail_visible: true,
        };
    }

    /// Looks `id` up in the catalog. Unknown ids leave the selection alone.
    pub fn select_listing_by_id(&mut self, id: u32) -> bool {
        match self.catalog.find(id).cloned() {
            Some(listing) => {
                self.select_listing(listing);
                true
            }
            None => false,
        }
    }

    /// Hides the overlay now; the listing is dropped after the dismiss delay.
    pub fn dismiss_detail(&mut self, now: Instant) {
        if !self.selection.is_detail_visible {
            return;
        }
        self.selection.is_detail_visible = false;
        self.dismiss.schedule(now);
    }

    /* ------------------------------ timers ----------------------------- */

    /// Fires any timers due at `now`. Returns true if visible state changed.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(text) = self.search_debounce.poll(now) {
            changed |= self.commit_search(text);
        }

        if self.dismiss.poll(now) {
            debug!("Dropping dismissed listing");
            self.selection.selected = None;
            changed = true;
        }

        changed
    }

    /// Earliest pending timer, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.search_debounce.deadline(), self.dismiss.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /* --------------------------- derived reads -------------------------- */

    #[must_use]
    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    #[must_use]
    pub fn is_search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    #[must_use]
    pub fn results(&self) -> &[SharedListing] {
        &self.results
    }

    /// Counts per category, narrowed by committed search text only. The
    /// active category filter is not applied here.
    #[must_use]
    pub fn category_summaries(&self) -> &[CategorySummary] {
        &self.summaries
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Size of the full catalog, independent of any filter.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /* ----------------------------- internals ---------------------------- */

    fn commit_search(&mut self, text: String) -> bool {
        if self.committed_search == text {
            return false;
        }
        debug!("Committing search text '{}'", text);
        self.committed_search = text;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        let effective = QueryDescriptor::new(
            self.descriptor.category.as_str(),
            self.committed_search.as_str(),
            self.descriptor.sort_key,
        );
        self.results = apply_query(self.catalog.listings(), &effective);

        self.summaries = if effective.search_needle().is_empty() {
            count_by_category(self.catalog.listings())
        } else {
            count_by_category(&narrow_by_search(
                self.catalog.listings(),
                effective.search_needle(),
            ))
        };

        self.recomputes += 1;
        debug!(
            "Recomputed query #{}: category='{}' search='{}' sort={} -> {} result(s)",
            self.recomputes,
            effective.category,
            effective.search_text,
            effective.sort_key,
            self.results.len()
        );
    }

    fn persist(&self) {
        let subset = PersistedSubset::from(&self.descriptor);
        match save_pref_with(&self.store, &self.prefs_key, &subset) {
            Ok(()) => debug!("Saved filters under '{}'", self.prefs_key),
            Err(e) if e.is_recoverable() => {
                warn!("Could not save filters under '{}': {}", self.prefs_key, e);
            }
            Err(e) => error!("Filter persistence failed under '{}': {}", self.prefs_key, e),
        }
    }
}
