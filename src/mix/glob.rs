//! Pattern resolution
//!
//! Expands glob patterns into a de-duplicated, ordered file list.
//! Files keep the position of the first pattern that matched them,
//! and matches within one pattern come back in alphabetical order.

use super::error::MixError;
use crate::logger;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Resolve patterns into a unique list of matching paths
///
/// Like a single glob, but for many patterns at once. The first
/// malformed pattern aborts the whole resolution.
///
/// # Examples
/// ```no_run
/// use mixserve::mix::resolve;
/// let files = resolve(&["./static/one.js", "./static/*.js"]).unwrap();
/// ```
pub fn resolve<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, MixError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = glob::glob(pattern).map_err(|source| MixError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for entry in matches {
            // Unreadable directories are skipped, not fatal
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    logger::log_warning(&format!("Skipping unreadable match for '{pattern}': {e}"));
                    continue;
                }
            };

            let path = clean_path(&path);
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Lexically normalize a path
///
/// Drops `.` components, folds `name/..` pairs and discards `..` directly
/// under the root. Nothing touches the filesystem, so symlinks are not
/// followed. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
