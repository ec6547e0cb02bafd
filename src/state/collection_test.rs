use super::*;

fn seeded() -> CollectionState {
    let mut state = CollectionState::default();
    state.seed(1_000);
    state
}

// =============================================================
// Seed data
// =============================================================

#[test]
fn seed_populates_three_boards_and_six_vibes() {
    let state = seeded();
    assert_eq!(state.boards.len(), 3);
    assert_eq!(state.vibes.len(), 6);
    for board in &state.boards {
        assert_eq!(state.vibe_count(&board.id), 2);
    }
}

#[test]
fn seed_returns_first_board_as_default_selection() {
    let mut state = CollectionState::default();
    let selected = state.seed(1_000);
    assert_eq!(selected.as_deref(), Some("1"));
}

#[test]
fn seed_is_idempotent_per_session() {
    let mut state = seeded();
    let boards_before = state.boards.clone();
    let vibes_before = state.vibes.clone();
    assert_eq!(state.seed(2_000), None);
    assert_eq!(state.boards, boards_before);
    assert_eq!(state.vibes, vibes_before);
}

#[test]
fn seed_vibes_reference_existing_boards() {
    let state = seeded();
    for vibe in &state.vibes {
        assert!(state.boards.iter().any(|b| b.id == vibe.board_id));
    }
}

// =============================================================
// create_board
// =============================================================

#[test]
fn create_board_preserves_title_exactly() {
    let mut state = CollectionState::default();
    let id = state.create_board("Dream Kitchens", "warm wood and brass", 5).unwrap();
    let board = state.boards.iter().find(|b| b.id == id).unwrap();
    assert_eq!(board.title, "Dream Kitchens");
    assert_eq!(board.description, "warm wood and brass");
    assert_eq!(board.created_at, 5);
}

#[test]
fn create_board_trims_title_and_description() {
    let mut state = CollectionState::default();
    state.create_board("  Dark Academia ", "  moody libraries  ", 5).unwrap();
    assert_eq!(state.boards[0].title, "Dark Academia");
    assert_eq!(state.boards[0].description, "moody libraries");
}

#[test]
fn create_board_with_blank_title_leaves_collection_unchanged() {
    let mut state = seeded();
    let before = state.boards.clone();
    assert_eq!(state.create_board("", "desc", 5), None);
    assert_eq!(state.create_board("   ", "desc", 5), None);
    assert_eq!(state.boards, before);
}

#[test]
fn create_board_appends_in_insertion_order() {
    let mut state = CollectionState::default();
    state.create_board("First", "", 1);
    state.create_board("Second", "", 2);
    let titles: Vec<_> = state.boards.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[test]
fn create_board_ids_are_unique() {
    let mut state = CollectionState::default();
    let a = state.create_board("A", "", 1).unwrap();
    let b = state.create_board("B", "", 1).unwrap();
    assert_ne!(a, b);
}

// =============================================================
// add_vibe
// =============================================================

#[test]
fn add_vibe_without_upload_uses_default_image_url() {
    let mut state = seeded();
    let id = state
        .add_vibe("Brutalist Lobby", "", "", DEFAULT_IMAGE_URL.to_owned(), Some("1"), 9)
        .unwrap();
    let vibe = state.vibes.iter().find(|v| v.id == id).unwrap();
    assert_eq!(vibe.image_url, DEFAULT_IMAGE_URL);
    assert_eq!(vibe.colors, DEFAULT_COLORS);
}

#[test]
fn add_vibe_with_blank_title_leaves_collection_unchanged() {
    let mut state = seeded();
    let before = state.vibes.clone();
    assert_eq!(state.add_vibe("  ", "", "", DEFAULT_IMAGE_URL.to_owned(), None, 9), None);
    assert_eq!(state.vibes, before);
}

#[test]
fn add_vibe_assigns_selected_board() {
    let mut state = seeded();
    let id = state
        .add_vibe("Tidal Pools", "", "", DEFAULT_IMAGE_URL.to_owned(), Some("2"), 9)
        .unwrap();
    let vibe = state.vibes.iter().find(|v| v.id == id).unwrap();
    assert_eq!(vibe.board_id, "2");
}

#[test]
fn add_vibe_resolved_with_failed_resolution_leaves_collection_unchanged() {
    // Covers both failure sources feeding the create-vibe flow: an upload
    // error and an unreadable selected file.
    let mut state = seeded();
    let before = state.clone();
    for error in ["upload failed: 500", "failed to read file: mood.png"] {
        let outcome =
            state.add_vibe_resolved("Half-created", "", "", Err(error.to_owned()), None, 9);
        assert_eq!(outcome, Err(error.to_owned()));
        assert_eq!(state, before);
    }
}

#[test]
fn add_vibe_resolved_with_resolved_url_appends() {
    let mut state = seeded();
    let id = state
        .add_vibe_resolved(
            "Tiled Courtyard",
            "",
            "",
            Ok("https://cdn.example.com/vibes/9-court.png".to_owned()),
            Some("2"),
            9,
        )
        .unwrap()
        .unwrap();
    let vibe = state.vibes.iter().find(|v| v.id == id).unwrap();
    assert_eq!(vibe.image_url, "https://cdn.example.com/vibes/9-court.png");
    assert_eq!(vibe.board_id, "2");
}

// =============================================================
// Board-id assignment policy
// =============================================================

#[test]
fn resolve_board_id_prefers_selected_board() {
    let state = seeded();
    assert_eq!(state.resolve_board_id(Some("3")), "3");
}

#[test]
fn resolve_board_id_falls_back_to_first_board() {
    let state = seeded();
    assert_eq!(state.resolve_board_id(None), "1");
}

#[test]
fn resolve_board_id_falls_back_to_sentinel_when_no_boards_exist() {
    let state = CollectionState::default();
    assert_eq!(state.resolve_board_id(None), FALLBACK_BOARD_ID);
}

// =============================================================
// parse_tags
// =============================================================

#[test]
fn parse_tags_trims_and_drops_empty_entries() {
    assert_eq!(parse_tags("a, b ,, c"), ["a", "b", "c"]);
}

#[test]
fn parse_tags_preserves_order_and_duplicates() {
    assert_eq!(parse_tags("neon, retro, neon"), ["neon", "retro", "neon"]);
}

#[test]
fn parse_tags_does_not_normalize_case() {
    assert_eq!(parse_tags("Neon, URBAN"), ["Neon", "URBAN"]);
}

#[test]
fn parse_tags_of_empty_string_is_empty() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags(" , , ").is_empty());
}

// =============================================================
// filter_vibes
// =============================================================

#[test]
fn filter_with_no_board_and_empty_query_returns_all_in_order() {
    let state = seeded();
    let filtered = filter_vibes(&state.vibes, None, "");
    assert_eq!(filtered, state.vibes);
}

#[test]
fn filter_by_board_returns_only_that_boards_vibes() {
    let state = seeded();
    let filtered = filter_vibes(&state.vibes, Some("2"), "");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|v| v.board_id == "2"));
}

#[test]
fn filter_query_is_case_insensitive_across_title_description_tags() {
    let state = seeded();
    let by_title = filter_vibes(&state.vibes, None, "NEON");
    assert!(by_title.iter().any(|v| v.title == "Neon Cityscape"));

    let by_description = filter_vibes(&state.vibes, None, "crt monitors");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Retro Computer");

    let by_tag = filter_vibes(&state.vibes, None, "NORDIC");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Scandinavian Interior");
}

#[test]
fn filter_with_no_match_returns_empty_vec() {
    let state = seeded();
    let filtered = filter_vibes(&state.vibes, Some("1"), "zzz-no-such-vibe");
    assert!(filtered.is_empty());
}

#[test]
fn filter_board_and_query_combine_with_and() {
    // Board "2" + "zen" yields exactly the Zen Garden vibe.
    let state = seeded();
    let filtered = filter_vibes(&state.vibes, Some("2"), "zen");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Zen Garden");

    // "zen" matches nothing on board "1".
    assert!(filter_vibes(&state.vibes, Some("1"), "zen").is_empty());
}

#[test]
fn filter_is_idempotent_for_identical_inputs() {
    let state = seeded();
    let first = filter_vibes(&state.vibes, Some("3"), "retro");
    let second = filter_vibes(&state.vibes, Some("3"), "retro");
    assert_eq!(first, second);
}

#[test]
fn filter_preserves_source_order() {
    let state = seeded();
    let filtered = filter_vibes(&state.vibes, None, "e");
    let source_positions: Vec<_> = filtered
        .iter()
        .map(|v| state.vibes.iter().position(|s| s.id == v.id).unwrap())
        .collect();
    let mut sorted = source_positions.clone();
    sorted.sort_unstable();
    assert_eq!(source_positions, sorted);
}

// =============================================================
// Lookup helpers
// =============================================================

#[test]
fn vibe_count_tracks_appends() {
    let mut state = seeded();
    assert_eq!(state.vibe_count("1"), 2);
    state.add_vibe("New", "", "", DEFAULT_IMAGE_URL.to_owned(), Some("1"), 9);
    assert_eq!(state.vibe_count("1"), 3);
    assert_eq!(state.vibe_count("no-such-board"), 0);
}

#[test]
fn board_title_resolves_known_boards_only() {
    let state = seeded();
    assert_eq!(state.board_title("3").as_deref(), Some("Retro Futurism"));
    assert_eq!(state.board_title("nope"), None);
}
