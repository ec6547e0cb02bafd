//! In-memory collection store: the authoritative boards and vibes for the
//! active session, plus the pure filter that derives the visible view.
//!
//! DESIGN
//! ======
//! Both collections are append-only for the life of a session; there is no
//! update or delete. Ordering is insertion order and nothing else, so the
//! filtered view is a stable linear scan. Keeping the store free of signals
//! and browser types lets every operation run in host-side tests.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use uuid::Uuid;

/// Image used when a vibe is created without an upload.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=600&fit=crop";

/// Swatch palette assigned to vibes whose colors are not derived from the
/// image.
pub const DEFAULT_COLORS: [&str; 3] = ["#6366F1", "#F59E0B", "#EF4444"];

/// Sentinel board id assigned when a vibe is created while no boards exist.
///
/// Board-id assignment policy, in order: the currently selected board, else
/// the first existing board, else this sentinel. See
/// [`CollectionState::resolve_board_id`].
pub const FALLBACK_BOARD_ID: &str = "1";

/// A named collection of vibes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: u64,
}

/// A single inspiration item belonging to exactly one board.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vibe {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    pub board_id: String,
    pub created_at: u64,
}

/// Boards and vibes for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionState {
    pub boards: Vec<Board>,
    pub vibes: Vec<Vibe>,
    /// Guards the seed operation so it runs once per session, on the
    /// transition from "no user" to "user present", not on every render.
    pub seeded: bool,
}

impl CollectionState {
    /// Populate the store with the bootstrap/demo set: three boards and six
    /// vibes distributed two per board. Returns the default selected board
    /// id on the first call, `None` on any later call.
    pub fn seed(&mut self, now_ms: u64) -> Option<String> {
        if self.seeded {
            return None;
        }
        self.seeded = true;
        self.boards = seed_boards(now_ms);
        self.vibes = seed_vibes(now_ms);
        self.boards.first().map(|b| b.id.clone())
    }

    /// Append a new board. Returns the new board's id, or `None` without
    /// mutating anything when the trimmed title is empty.
    pub fn create_board(&mut self, title: &str, description: &str, now_ms: u64) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let board = Board {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
            description: description.trim().to_owned(),
            created_at: now_ms,
        };
        let id = board.id.clone();
        self.boards.push(board);
        Some(id)
    }

    /// Append a new vibe. The image URL must already be resolved by the
    /// caller (asset upload or [`DEFAULT_IMAGE_URL`]); an aborted upload must
    /// never reach this method. Returns the new vibe's id, or `None` without
    /// mutating anything when the trimmed title is empty.
    pub fn add_vibe(
        &mut self,
        title: &str,
        description: &str,
        raw_tags: &str,
        image_url: String,
        selected_board: Option<&str>,
        now_ms: u64,
    ) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let vibe = Vibe {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
            image_url,
            description: description.trim().to_owned(),
            tags: parse_tags(raw_tags),
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            board_id: self.resolve_board_id(selected_board),
            created_at: now_ms,
        };
        let id = vibe.id.clone();
        self.vibes.push(vibe);
        Some(id)
    }

    /// Append a vibe from a resolved-image outcome. The resolve-then-append
    /// sequencing lives here so a failed image resolution (file read or
    /// upload) provably leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Propagates the resolution error without appending anything.
    pub fn add_vibe_resolved(
        &mut self,
        title: &str,
        description: &str,
        raw_tags: &str,
        image_url: Result<String, String>,
        selected_board: Option<&str>,
        now_ms: u64,
    ) -> Result<Option<String>, String> {
        let image_url = image_url?;
        Ok(self.add_vibe(title, description, raw_tags, image_url, selected_board, now_ms))
    }

    /// Board-id assignment decision table: selected board, else first
    /// existing board, else [`FALLBACK_BOARD_ID`].
    pub fn resolve_board_id(&self, selected: Option<&str>) -> String {
        if let Some(id) = selected {
            return id.to_owned();
        }
        self.boards
            .first()
            .map_or_else(|| FALLBACK_BOARD_ID.to_owned(), |b| b.id.clone())
    }

    /// Number of vibes on a board (sidebar badge).
    pub fn vibe_count(&self, board_id: &str) -> usize {
        self.vibes.iter().filter(|v| v.board_id == board_id).count()
    }

    /// Display title for a board id, if the board exists.
    pub fn board_title(&self, board_id: &str) -> Option<String> {
        self.boards
            .iter()
            .find(|b| b.id == board_id)
            .map(|b| b.title.clone())
    }
}

/// Parse a comma-separated tag list: trim entries, drop empties, preserve
/// order and duplicates. No lowercasing or other normalization.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Derive the visible vibe list. A vibe is included iff the board filter is
/// `None` or matches its `board_id`, AND the query is empty or is a
/// case-insensitive substring of its title, description, or at least one
/// tag. Source order is preserved; the result is empty (never absent) when
/// nothing matches.
pub fn filter_vibes(vibes: &[Vibe], selected_board: Option<&str>, query: &str) -> Vec<Vibe> {
    let needle = query.to_lowercase();
    vibes
        .iter()
        .filter(|vibe| {
            let matches_board = selected_board.is_none_or(|id| vibe.board_id == id);
            let matches_search = needle.is_empty()
                || vibe.title.to_lowercase().contains(&needle)
                || vibe.description.to_lowercase().contains(&needle)
                || vibe.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            matches_board && matches_search
        })
        .cloned()
        .collect()
}

fn seed_boards(now_ms: u64) -> Vec<Board> {
    [
        ("1", "Minimalist Vibes", "Clean, simple, and elegant inspiration"),
        ("2", "Nature & Earth", "Natural textures, organic shapes, earthy tones"),
        ("3", "Retro Futurism", "Vintage sci-fi aesthetics and neon dreams"),
    ]
    .into_iter()
    .map(|(id, title, description)| Board {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        created_at: now_ms,
    })
    .collect()
}

struct SeedVibe {
    id: &'static str,
    title: &'static str,
    image_url: &'static str,
    description: &'static str,
    tags: [&'static str; 3],
    colors: [&'static str; 3],
    board_id: &'static str,
}

fn seed_vibes(now_ms: u64) -> Vec<Vibe> {
    const SEED: [SeedVibe; 6] = [
        SeedVibe {
            id: "1",
            title: "Scandinavian Interior",
            image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=600&fit=crop",
            description: "Clean lines, natural wood, cozy textures",
            tags: ["minimalist", "cozy", "nordic"],
            colors: ["#F5F5F5", "#D4B896", "#8B7355"],
            board_id: "1",
        },
        SeedVibe {
            id: "2",
            title: "Forest Path",
            image_url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=600&fit=crop",
            description: "Misty morning light through ancient trees",
            tags: ["nature", "peaceful", "green"],
            colors: ["#2D5016", "#4A7C59", "#8FBC8F"],
            board_id: "2",
        },
        SeedVibe {
            id: "3",
            title: "Neon Cityscape",
            image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&h=600&fit=crop",
            description: "Cyberpunk aesthetics with vibrant neon lights",
            tags: ["cyberpunk", "neon", "urban"],
            colors: ["#FF0080", "#00FFFF", "#8A2BE2"],
            board_id: "3",
        },
        SeedVibe {
            id: "4",
            title: "Zen Garden",
            image_url: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400&h=600&fit=crop",
            description: "Peaceful stones and raked sand patterns",
            tags: ["zen", "meditation", "balance"],
            colors: ["#F5F5DC", "#D2B48C", "#8B7D6B"],
            board_id: "2",
        },
        SeedVibe {
            id: "5",
            title: "Modern Typography",
            image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=600&fit=crop",
            description: "Bold, clean typefaces with perfect spacing",
            tags: ["typography", "design", "modern"],
            colors: ["#000000", "#FFFFFF", "#FF6B6B"],
            board_id: "1",
        },
        SeedVibe {
            id: "6",
            title: "Retro Computer",
            image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&h=600&fit=crop",
            description: "Vintage computing aesthetics and CRT monitors",
            tags: ["retro", "technology", "vintage"],
            colors: ["#00FF00", "#000000", "#FFFF00"],
            board_id: "3",
        },
    ];

    SEED.iter()
        .map(|seed| Vibe {
            id: seed.id.to_owned(),
            title: seed.title.to_owned(),
            image_url: seed.image_url.to_owned(),
            description: seed.description.to_owned(),
            tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
            colors: seed.colors.iter().map(|c| (*c).to_owned()).collect(),
            board_id: seed.board_id.to_owned(),
            created_at: now_ms,
        })
        .collect()
}
