//! Path joining, globbing, and suffix helpers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Join path segments onto a base path.
///
/// Each segment's leading slashes are stripped first, so absolute-looking
/// segments extend the base instead of replacing it (unlike
/// `PathBuf::push`).
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use toolshed::path::join_path;
/// assert_eq!(join_path("/srv", &["data", "/cache"]), PathBuf::from("/srv/data/cache"));
/// ```
#[must_use]
pub fn join_path<P: AsRef<Path>>(base: P, segments: &[&str]) -> PathBuf {
    let mut result = base.as_ref().to_path_buf();
    for segment in segments {
        result.push(segment.trim_start_matches('/'));
    }
    result
}

/// List directory entries matching a glob pattern.
///
/// `pattern` defaults to `*` (direct children). Returns file names, or
/// canonicalized absolute paths when `absolute_path` is set; sorted when
/// `sort` is set, otherwise in filesystem order.
///
/// # Errors
///
/// Returns an error when the pattern is not valid glob syntax, when an
/// entry cannot be read, or when canonicalization fails.
pub fn list_dir<P: AsRef<Path>>(
    path: P,
    pattern: Option<&str>,
    absolute_path: bool,
    sort: bool,
) -> Result<Vec<String>> {
    let pattern = pattern.unwrap_or("*");
    let full_pattern = path.as_ref().join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut result = Vec::new();
    for entry in glob::glob(&full_pattern)
        .with_context(|| format!("'{pattern}' is not a valid glob pattern"))?
    {
        let entry = entry?;
        if absolute_path {
            let resolved = entry
                .canonicalize()
                .with_context(|| format!("failed to resolve '{}'", entry.display()))?;
            result.push(resolved.to_string_lossy().into_owned());
        } else if let Some(name) = entry.file_name() {
            result.push(name.to_string_lossy().into_owned());
        }
    }
    if sort {
        result.sort();
    }
    Ok(result)
}

/// The suffix of a path's file name.
///
/// With `full`, compound suffixes are kept whole (`archive.tar.gz` gives
/// `.tar.gz` instead of `.gz`). `with_dot` keeps the leading dot. A dot
/// that starts the file name marks a hidden file, not a suffix, and a
/// trailing dot is not a suffix either; both give an empty result.
#[must_use]
pub fn file_suffix<P: AsRef<Path>>(path: P, full: bool, with_dot: bool) -> String {
    let Some(name) = path.as_ref().file_name().and_then(|name| name.to_str()) else {
        return String::new();
    };
    let hidden_prefix = name.len() - name.trim_start_matches('.').len();
    let visible = &name[hidden_prefix..];

    let dot = if full { visible.find('.') } else { visible.rfind('.') };
    let suffix = match dot {
        Some(index) if index + 1 < visible.len() => &visible[index..],
        _ => return String::new(),
    };
    if with_dot {
        suffix.to_string()
    } else {
        suffix[1..].to_string()
    }
}

/// Whether a path refers to a file, or looks like one.
///
/// Existing paths answer from the filesystem. Nonexistent paths are
/// guessed from their spelling: a file name with a suffix looks like a
/// file.
#[must_use]
pub fn is_file_like<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.exists() {
        path.is_file()
    } else {
        !file_suffix(path, false, true).is_empty()
    }
}

/// Whether a path refers to a directory, or looks like one.
///
/// The mirror of [`is_file_like`]: nonexistent paths without a suffix
/// look like directories.
#[must_use]
pub fn is_dir_like<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.exists() {
        path.is_dir()
    } else {
        file_suffix(path, false, true).is_empty()
    }
}
