//! Placement policy and the file relocation seam.

use reel_vault_catalog::{LibraryFile, LibraryItem};
use reel_vault_core::PlacementMode;
use thiserror::Error;

use crate::decision::DownloadSource;

/// How a winning file gets into the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPlan {
    /// False when the file is already resident at its target location and
    /// only the catalog needs updating.
    pub requires_placement: bool,
    pub mode: PlacementMode,
}

/// Decide whether a file needs placing and with which transfer mode.
///
/// Policy only, no I/O. An explicit override wins; failing that, the
/// override carried on the download source; failing that, Copy when the
/// source cannot release its files, else Move.
pub fn resolve_placement(
    new_download: bool,
    source: Option<&DownloadSource>,
    mode_override: Option<PlacementMode>,
) -> PlacementPlan {
    let mode = mode_override
        .or_else(|| source.and_then(|s| s.mode_override))
        .unwrap_or_else(|| match source {
            Some(source) if !source.can_relocate => PlacementMode::Copy,
            _ => PlacementMode::Move,
        });

    PlacementPlan {
        requires_placement: new_download,
        mode,
    }
}

/// Failure taxonomy reported by relocators.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("library root folder is missing: {0}")]
    RootMissing(String),
    #[error("destination already exists: {0}")]
    DestinationExists(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Executes placement of a file into the library tree.
///
/// Implementations own destination naming and the physical transfer,
/// including any retry or rollback. A failed call must not leave a partial
/// target behind.
pub trait FileRelocator {
    /// Place the file described by `record` into `item`'s folder using the
    /// given mode. The record carries the source path and the metadata
    /// destination naming may draw on.
    fn place(
        &self,
        record: &LibraryFile,
        item: &LibraryItem,
        mode: PlacementMode,
    ) -> Result<(), RelocateError>;
}
