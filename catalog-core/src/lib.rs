pub mod error;
pub use error::{AppError, AppResult};

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod controller {
    pub mod actions;
    pub use actions::{Action, KeyContext};

    pub mod event_loop;
    pub use event_loop::{EventLoop, LoopEvent};

    pub mod filter_state;
    pub use filter_state::{ControllerOptions, FilterController};
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, CategoryChip, DynPrefsStore};

    pub mod catalog;
    pub use catalog::Catalog;

    pub mod listing;
    pub use listing::{
        ALL_CATEGORIES, CategorySummary, Listing, PersistedSubset, QueryDescriptor,
        SelectionState, SharedListing, SortKey,
    };

    pub mod ui_state;
    pub use ui_state::{UIMode, UIOverlay, UIState};
}

pub mod query {
    pub mod engine;
    pub use engine::{apply_query, count_by_category, narrow_by_search, sort_listings};

    pub mod format;
    pub use format::{format_currency, slugify};
}

pub mod storage {
    pub mod prefs;
    pub use prefs::{
        FilePrefsStore, MemoryPrefsStore, NoopPrefsStore, PrefsStore, load_pref_with,
        save_pref_with,
    };
}

pub mod util {
    pub mod debounce;
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod category_chips;
        pub use category_chips::CategoryChips;
        pub mod detail_overlay;
        pub use detail_overlay::DetailOverlay;
        pub mod empty_state;
        pub use empty_state::EmptyState;
        pub mod header;
        pub use header::Header;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod listing_table;
        pub use listing_table::ListingTable;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}
