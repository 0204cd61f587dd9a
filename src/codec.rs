//! Base64 text encoding and decoding.
//!
//! Thin wrappers over the [`base64`] crate using the standard alphabet
//! with padding, converting between UTF-8 text on both sides.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode a UTF-8 string as standard base64 with padding.
///
/// # Examples
///
/// ```
/// # use toolshed::codec::base64_encode;
/// assert_eq!(base64_encode("ABCDEFG"), "QUJDREVGRw==");
/// ```
#[must_use]
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a standard base64 string back into UTF-8 text.
///
/// # Errors
///
/// Returns an error when the input is not valid base64 or when the
/// decoded bytes are not valid UTF-8.
pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(text)
        .with_context(|| format!("'{text}' is not valid base64"))?;
    String::from_utf8(bytes).context("decoded base64 payload is not valid UTF-8")
}
