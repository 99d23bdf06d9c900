//! Data model types for the movie library catalog.
//!
//! These types represent the persistent schema: the items the library tracks
//! and the media files committed to them, including the provenance metadata
//! recorded at import time.

use reel_vault_core::Quality;
use serde::{Deserialize, Serialize};

// ── Library Item ────────────────────────────────────────────────────────────

/// Identifier of a library item. Grouping and lookups key on this, never on
/// reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryItemId(pub i64);

impl std::fmt::Display for LibraryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A movie tracked by the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: LibraryItemId,
    pub title: String,
    /// The item's folder inside the library tree.
    pub path: String,
}

impl LibraryItem {
    pub fn new(id: i64, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: LibraryItemId(id),
            title: title.into(),
            path: path.into(),
        }
    }
}

// ── Library File ────────────────────────────────────────────────────────────

/// A media file committed to the library, as recorded in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFile {
    pub library_item_id: LibraryItemId,
    /// Absolute path of the file as submitted for import.
    pub path: String,
    /// Path relative to the owning item's folder, for files already resident
    /// there at import time.
    pub relative_path: Option<String>,
    /// Where the file sat inside its download, relative to the client's
    /// output folder. Recorded verbatim as provenance and never re-derived.
    pub original_path: String,
    /// Release name recovered from the download, when one looked authentic.
    pub scene_name: Option<String>,
    /// File size in bytes.
    pub size: u64,
    pub quality: Quality,
    pub release_group: Option<String>,
    /// Identifier of the download this file arrived through.
    pub download_id: Option<String>,
    /// When the file was committed, RFC 3339.
    pub added_at: String,
}
