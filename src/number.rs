//! English pluralization of counted nouns.

/// Format a count together with its correctly pluralized noun.
///
/// Uses a handful of simple English rules that work for the common cases:
/// `-y` becomes `-ies`, sibilant endings (`s`, `x`, `sh`, `ch`) gain
/// `-es`, `-an` becomes `-en`, everything else gains `-s`. The word is
/// left untouched when the count is exactly one.
///
/// # Examples
///
/// ```
/// # use toolshed::number::plural;
/// assert_eq!(plural(1, "file"), "1 file");
/// assert_eq!(plural(5, "box"), "5 boxes");
/// ```
#[must_use]
pub fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {}", pluralize(word))
    }
}

fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else if word.ends_with(['s', 'x']) || word.ends_with("sh") || word.ends_with("ch") {
        format!("{word}es")
    } else if let Some(stem) = word.strip_suffix("an") {
        format!("{stem}en")
    } else {
        format!("{word}s")
    }
}
