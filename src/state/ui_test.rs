use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_all_boards() {
    let state = UiState::default();
    assert_eq!(state.selected_board, None);
    assert!(state.search_query.is_empty());
}

#[test]
fn ui_state_default_view_mode_is_grid() {
    let state = UiState::default();
    assert_eq!(state.view_mode, ViewMode::Grid);
}

#[test]
fn ui_state_default_dialogs_closed() {
    let state = UiState::default();
    assert!(!state.show_create_board);
    assert!(!state.show_create_vibe);
}

// =============================================================
// ViewMode
// =============================================================

#[test]
fn view_mode_default_is_grid() {
    assert_eq!(ViewMode::default(), ViewMode::Grid);
}

#[test]
fn view_mode_variants_are_distinct() {
    assert_ne!(ViewMode::Grid, ViewMode::List);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn reselecting_same_board_is_idempotent() {
    let mut state = UiState::default();
    state.selected_board = Some("2".to_owned());
    let before = state.clone();
    state.selected_board = Some("2".to_owned());
    assert_eq!(state, before);
}
