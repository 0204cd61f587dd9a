//! Fuzzy string normalization and version comparison.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

/// Characters ignored by the default fuzzy normalization: whitespace,
/// hyphens, and underscores.
#[allow(clippy::expect_used)]
static FUZZY_IGNORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]").expect("hard-coded pattern compiles"));

/// Normalize a string for fuzzy comparison: lowercase it and strip
/// whitespace, hyphens, and underscores.
///
/// # Examples
///
/// ```
/// # use toolshed::string::fuzzy_format;
/// assert_eq!(fuzzy_format("My-Cool_Name"), "mycoolname");
/// ```
#[must_use]
pub fn fuzzy_format(string: &str) -> String {
    FUZZY_IGNORED
        .replace_all(&string.to_lowercase(), "")
        .into_owned()
}

/// [`fuzzy_format`] with a custom ignore pattern and substitute.
///
/// # Errors
///
/// Returns an error when `ignore_pattern` is not a valid regex.
pub fn fuzzy_format_with(string: &str, ignore_pattern: &str, substitute: &str) -> Result<String> {
    let pattern = Regex::new(ignore_pattern)?;
    Ok(pattern
        .replace_all(&string.to_lowercase(), substitute)
        .into_owned())
}

/// Whether two strings are equal after fuzzy normalization.
#[must_use]
pub fn fuzzy_match(string: &str, other: &str) -> bool {
    fuzzy_format(string) == fuzzy_format(other)
}

/// Compare two dotted version strings component by component.
///
/// Missing trailing components are treated as `"0"`, so `"1.2"` equals
/// `"1.2.0"` but not `"1.2.1"`. Components are compared as trimmed
/// strings, not numbers.
#[must_use]
pub fn is_same_version(v1: &str, v2: &str) -> bool {
    let first: Vec<&str> = v1.split('.').map(str::trim).collect();
    let second: Vec<&str> = v2.split('.').map(str::trim).collect();
    let length = first.len().max(second.len());
    (0..length).all(|index| {
        let a = first.get(index).copied().unwrap_or("0");
        let b = second.get(index).copied().unwrap_or("0");
        a == b
    })
}
