//! Regex convenience wrappers.
//!
//! Small helpers over the [`regex`] crate for the common "does this text
//! match" questions, with explicit anchoring and case-sensitivity knobs
//! instead of inline regex flags.

use anyhow::Result;
use regex::{Regex, RegexBuilder};

fn compile(pattern: &str, ignore_case: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .map_err(Into::into)
}

/// Whether `text` matches `pattern` at its start (or in full, when
/// `full_match` is set).
///
/// # Errors
///
/// Returns an error when `pattern` is not a valid regex.
pub fn is_match(pattern: &str, text: &str, full_match: bool, ignore_case: bool) -> Result<bool> {
    Ok(match_start(pattern, text, full_match, ignore_case)?.is_some())
}

/// The text matched by `pattern` anchored at the start of `text`, if any.
///
/// With `full_match` the pattern must consume the whole text.
///
/// # Errors
///
/// Returns an error when `pattern` is not a valid regex.
pub fn match_start(
    pattern: &str,
    text: &str,
    full_match: bool,
    ignore_case: bool,
) -> Result<Option<String>> {
    let anchored = if full_match {
        format!("^(?:{pattern})$")
    } else {
        format!("^(?:{pattern})")
    };
    let regex = compile(&anchored, ignore_case)?;
    Ok(regex.find(text).map(|found| found.as_str().to_string()))
}

/// Whether `pattern` occurs anywhere in `text`.
///
/// # Errors
///
/// Returns an error when `pattern` is not a valid regex.
pub fn contains(pattern: &str, text: &str, ignore_case: bool) -> Result<bool> {
    Ok(search(pattern, text, ignore_case)?.is_some())
}

/// The first occurrence of `pattern` anywhere in `text`, if any.
///
/// # Errors
///
/// Returns an error when `pattern` is not a valid regex.
pub fn search(pattern: &str, text: &str, ignore_case: bool) -> Result<Option<String>> {
    let regex = compile(pattern, ignore_case)?;
    Ok(regex.find(text).map(|found| found.as_str().to_string()))
}
