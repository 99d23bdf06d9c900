//! Provenance naming for imported files.
//!
//! Two values are derived per winning file: the original path (where the
//! file sat inside its download, kept for audit and renamer tokens) and an
//! optional scene name (a release-group-style identifier for later matching
//! against indexer history). Classification heuristics live in
//! `reel_vault_catalog::release_name`.

use reel_vault_catalog::release_name::{is_release_name, remove_media_extension};
use reel_vault_core::paths;

use crate::decision::{DownloadSource, LocalMediaFile};

/// Path of a file inside its download, relative to the client's output root,
/// in host separators.
///
/// Every intermediate subfolder between the root and the file is preserved;
/// nested and collection downloads keep their structure in the catalog.
/// Without a source, or when the file does not sit under the output root, or
/// when stripping leaves nothing, the bare file name is recorded instead.
pub fn original_relative_path(path: &str, source: Option<&DownloadSource>) -> String {
    if let Some(source) = source
        && let Some(rest) = paths::strip_root(path, &source.output_root)
    {
        return paths::to_native_separators(rest);
    }

    paths::file_name(path).to_string()
}

/// Recover a scene name for a file, first match wins:
///
/// 1. The immediate folder name, when it equals the parsed folder title
///    exactly and looks like a release name. Blocked when a multi-file batch
///    would collapse every file onto the shared download title.
/// 2. The file name without media extension, when it equals the parsed file
///    title (extension removed on both sides) and looks like a release name.
/// 3. None; later matching falls back to other signals.
pub fn resolve_scene_name(
    file: &LocalMediaFile,
    source: Option<&DownloadSource>,
    batch_files: usize,
) -> Option<String> {
    if let Some(folder_info) = &file.folder_info
        && let Some(folder_name) = paths::parent_name(&file.path)
        && folder_name == folder_info.original_title
        && is_release_name(folder_name)
        && !collapses_to_source_title(folder_name, source, batch_files)
    {
        return Some(folder_name.to_string());
    }

    if let Some(file_info) = &file.file_info {
        let stem = remove_media_extension(paths::file_name(&file.path));
        if stem == remove_media_extension(&file_info.original_title) && is_release_name(stem) {
            return Some(stem.to_string());
        }
    }

    None
}

/// In a multi-file batch every file's folder may be the job folder itself;
/// its name identifies the download, not any one release.
fn collapses_to_source_title(
    folder_name: &str,
    source: Option<&DownloadSource>,
    batch_files: usize,
) -> bool {
    match source {
        Some(source) if batch_files > 1 => folder_name == remove_media_extension(&source.title),
        _ => false,
    }
}

/// Path of a resident file relative to its item's folder, in host
/// separators.
///
/// `None` when the file does not sit under the item folder; the record then
/// carries no item-relative path.
pub fn item_relative_path(path: &str, item_path: &str) -> Option<String> {
    let file = paths::to_native_separators(path);
    let base = paths::to_native_separators(item_path);

    let diff = pathdiff::diff_paths(&file, &base)?;
    let diff = diff.to_string_lossy();
    if diff.is_empty() || diff.starts_with("..") {
        log::debug!("File {} is outside its item folder {}", path, item_path);
        return None;
    }

    Some(diff.into_owned())
}
