//! Local UI chrome state (selection, search, layout, dialogs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`collection`)
//! so the gallery chrome can evolve independently of the stored data. None of
//! this is persisted; it lives and dies with the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout for the vibe listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Masonry-style card grid.
    #[default]
    Grid,
    /// Single-column rows with thumbnails.
    List,
}

/// UI state for board selection, search, layout, and dialog visibility.
///
/// `selected_board = None` means "show all boards' vibes". The two dialog
/// flags are independent; either dialog can be open regardless of the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub selected_board: Option<String>,
    pub search_query: String,
    pub view_mode: ViewMode,
    pub show_create_board: bool,
    pub show_create_vibe: bool,
}
