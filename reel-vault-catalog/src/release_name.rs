//! Heuristics for recognizing scene release names.
//!
//! Release groups name their output in a recognizable shape:
//! ```text
//! Movie.Title.2007.720p.BluRay.x264-GROUP
//! ```
//! The import pipeline records such a name as provenance for later
//! cross-referencing against indexer history. An arbitrary folder or file
//! name ("staging", "movie-720p") is noise and must never masquerade as one.

/// Media and download-artifact extensions stripped during comparisons.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "wmv", "mov", "ts", "m2ts", "webm", "mpg", "mpeg", "divx", "xvid",
    "flv", "iso", "img", "nzb", "par2", "rar",
];

/// Check whether a name looks like a scene release name.
///
/// A qualifying name carries both separator patterns the convention uses: a
/// group separator (`-` with alphanumerics on both sides) and word
/// separators (`.` or space with alphanumerics on both sides). Names with
/// only one of the two do not qualify.
///
/// # Examples
///
/// ```
/// use reel_vault_catalog::release_name::is_release_name;
///
/// assert!(is_release_name("Transformers.2007.720p.BluRay.x264-EVOLVE"));
/// assert!(is_release_name("Spaced Out 2010 720p BluRay-GRP"));
/// assert!(!is_release_name("transformers"));
/// assert!(!is_release_name("rdr-transformers-720p"));
/// assert!(!is_release_name("Movie Title 2007"));
/// ```
pub fn is_release_name(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let mut has_group_separator = false;
    let mut has_word_separator = false;

    for w in chars.windows(3) {
        if !w[0].is_alphanumeric() || !w[2].is_alphanumeric() {
            continue;
        }
        match w[1] {
            '-' => has_group_separator = true,
            '.' | ' ' => has_word_separator = true,
            _ => {}
        }
    }

    has_group_separator && has_word_separator
}

/// Strip one trailing known media extension from a name.
///
/// Unknown extensions are kept: release names are full of dots, and a naive
/// last-dot strip would mangle them.
///
/// # Examples
///
/// ```
/// use reel_vault_catalog::release_name::remove_media_extension;
///
/// assert_eq!(
///     remove_media_extension("Transformers.2007.720p.BluRay.x264-EVOLVE.mkv"),
///     "Transformers.2007.720p.BluRay.x264-EVOLVE"
/// );
/// assert_eq!(
///     remove_media_extension("Transformers.2007.720p.BluRay.x264-EVOLVE"),
///     "Transformers.2007.720p.BluRay.x264-EVOLVE"
/// );
/// assert_eq!(remove_media_extension("release.nzb"), "release");
/// ```
pub fn remove_media_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.')
        && !stem.is_empty()
        && MEDIA_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
    {
        return stem;
    }

    name
}
