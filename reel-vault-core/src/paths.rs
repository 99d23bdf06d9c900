//! String helpers for paths that may use either separator style.
//!
//! Import candidates can originate on a different OS than the one running the
//! pipeline (a Windows download client feeding a Linux library, or the
//! reverse), so `/` and `\` are treated alike on input. Output destined for
//! the catalog is normalized to the host separator with
//! [`to_native_separators`].

/// True for both path separator characters.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// The final component of a path, regardless of separator style.
///
/// Trailing separators are ignored.
///
/// # Examples
///
/// ```
/// use reel_vault_core::paths::file_name;
///
/// assert_eq!(file_name(r"C:\Test\movie.mkv"), "movie.mkv");
/// assert_eq!(file_name("/downloads/done/movie.mkv"), "movie.mkv");
/// assert_eq!(file_name("movie.mkv"), "movie.mkv");
/// ```
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rsplit_once(is_separator) {
        Some((_, name)) => name,
        None => trimmed,
    }
}

/// The name of the directory immediately containing the path's final
/// component, or `None` when there is no containing directory in the string.
///
/// # Examples
///
/// ```
/// use reel_vault_core::paths::parent_name;
///
/// assert_eq!(parent_name(r"C:\Test\Job.Folder\movie.mkv"), Some("Job.Folder"));
/// assert_eq!(parent_name("downloads/movie.mkv"), Some("downloads"));
/// assert_eq!(parent_name("movie.mkv"), None);
/// assert_eq!(parent_name("/movie.mkv"), None);
/// ```
pub fn parent_name(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches(is_separator);
    let (dir, _) = trimmed.rsplit_once(is_separator)?;
    let name = match dir.rsplit_once(is_separator) {
        Some((_, last)) => last,
        None => dir,
    };
    if name.is_empty() { None } else { Some(name) }
}

/// Strip a root prefix from a path, component-aligned.
///
/// Returns the remainder without its leading separator, or `None` when the
/// root is empty, is not a prefix of the path, matches only part of a
/// component, or leaves nothing behind. The comparison is case-sensitive and
/// the remainder keeps its original separator style.
///
/// # Examples
///
/// ```
/// use reel_vault_core::paths::strip_root;
///
/// assert_eq!(strip_root(r"C:\Test\Job\movie.mkv", r"C:\Test"), Some(r"Job\movie.mkv"));
/// assert_eq!(strip_root("/data/done/movie.mkv", "/data/done/"), Some("movie.mkv"));
/// assert_eq!(strip_root(r"C:\Testing\movie.mkv", r"C:\Test"), None);
/// assert_eq!(strip_root(r"C:\Test", r"C:\Test"), None);
/// assert_eq!(strip_root(r"D:\Other\movie.mkv", r"C:\Test"), None);
/// ```
pub fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_end_matches(is_separator);
    if root.is_empty() || !path.starts_with(root) {
        return None;
    }

    let rest = &path[root.len()..];
    if !rest.chars().next().is_some_and(is_separator) {
        return None;
    }

    let rest = rest.trim_start_matches(is_separator);
    if rest.is_empty() { None } else { Some(rest) }
}

/// Replace every separator with the host's separator.
pub fn to_native_separators(path: &str) -> String {
    path.chars()
        .map(|c| {
            if is_separator(c) {
                std::path::MAIN_SEPARATOR
            } else {
                c
            }
        })
        .collect()
}
