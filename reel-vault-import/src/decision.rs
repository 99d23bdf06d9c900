//! Candidate model: evaluated files waiting to be committed.
//!
//! Decisions are produced upstream by matching and quality evaluation. This
//! crate treats them as read-only input, except that the orchestrator pushes
//! an additive rejection when it discovers a duplicate or a failure of its
//! own.

use reel_vault_catalog::LibraryItem;
use reel_vault_core::{PlacementMode, Quality};
use serde::{Deserialize, Serialize};

// ── Parsed Title Info ───────────────────────────────────────────────────────

/// Title metadata parsed from a file or folder name.
#[derive(Debug, Clone)]
pub struct ParsedTitleInfo {
    /// The exact string the parser matched, before any normalization.
    pub original_title: String,
    /// Cleaned-up title.
    pub title: String,
    pub year: Option<u32>,
}

impl ParsedTitleInfo {
    pub fn new(original_title: impl Into<String>) -> Self {
        let original_title = original_title.into();
        Self {
            title: original_title.clone(),
            original_title,
            year: None,
        }
    }
}

// ── Local Media File ────────────────────────────────────────────────────────

/// A media file on disk that upstream evaluation considered for import.
#[derive(Debug, Clone)]
pub struct LocalMediaFile {
    /// Absolute source path. Either separator style may appear.
    pub path: String,
    /// The library item this file was matched to, when one was found.
    pub library_item: Option<LibraryItem>,
    /// File size in bytes.
    pub size: u64,
    /// Title info parsed from the file name.
    pub file_info: Option<ParsedTitleInfo>,
    /// Title info parsed from the immediate containing folder name.
    pub folder_info: Option<ParsedTitleInfo>,
    pub quality: Quality,
    pub release_group: Option<String>,
}

impl LocalMediaFile {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            library_item: None,
            size,
            file_info: None,
            folder_info: None,
            quality: Quality::default(),
            release_group: None,
        }
    }

    pub fn with_item(mut self, item: LibraryItem) -> Self {
        self.library_item = Some(item);
        self
    }

    pub fn with_file_info(mut self, info: ParsedTitleInfo) -> Self {
        self.file_info = Some(info);
        self
    }

    pub fn with_folder_info(mut self, info: ParsedTitleInfo) -> Self {
        self.folder_info = Some(info);
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_release_group(mut self, group: impl Into<String>) -> Self {
        self.release_group = Some(group.into());
        self
    }
}

// ── Decision ────────────────────────────────────────────────────────────────

/// Why a decision was not, or could not be, imported.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

/// An upstream verdict about one candidate file.
#[derive(Debug, Clone)]
pub struct ImportDecision {
    pub file: LocalMediaFile,
    /// Ordered rejection reasons; empty means approved.
    pub rejections: Vec<Rejection>,
}

impl ImportDecision {
    pub fn approve(file: LocalMediaFile) -> Self {
        Self {
            file,
            rejections: Vec::new(),
        }
    }

    pub fn reject(file: LocalMediaFile, reason: impl Into<String>) -> Self {
        Self {
            file,
            rejections: vec![Rejection::new(reason)],
        }
    }

    /// A decision carrying any rejection reason is never imported.
    pub fn approved(&self) -> bool {
        self.rejections.is_empty()
    }
}

// ── Download Source ─────────────────────────────────────────────────────────

/// The download a batch of files arrived through.
///
/// Present only when the batch comes from a just-completed download; absent
/// for files already resident in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadSource {
    /// Identifier assigned by the download client.
    #[serde(default)]
    pub download_id: Option<String>,
    /// Title of the download job, usually the release name.
    pub title: String,
    /// Folder the download client delivers completed downloads into; job
    /// folders are created beneath it. Provenance paths are recorded
    /// relative to this root.
    pub output_root: String,
    /// Whether the client allows its output to be moved away. False while a
    /// torrent is still seeding, for example.
    pub can_relocate: bool,
    /// Transfer mode the client asks for instead of the default policy.
    #[serde(default)]
    pub mode_override: Option<PlacementMode>,
}

impl DownloadSource {
    pub fn new(title: impl Into<String>, output_root: impl Into<String>) -> Self {
        Self {
            download_id: None,
            title: title.into(),
            output_root: output_root.into(),
            can_relocate: true,
            mode_override: None,
        }
    }

    pub fn with_download_id(mut self, id: impl Into<String>) -> Self {
        self.download_id = Some(id.into());
        self
    }

    pub fn can_relocate(mut self, can_relocate: bool) -> Self {
        self.can_relocate = can_relocate;
        self
    }

    pub fn with_mode_override(mut self, mode: PlacementMode) -> Self {
        self.mode_override = Some(mode);
        self
    }
}
