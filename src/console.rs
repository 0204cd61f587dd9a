//! Interactive terminal prompting.
//!
//! Thin wrappers over [`inquire`] that bake in the validation loops the
//! rest of the crate expects: regex-checked free text, bounded number
//! choice, list selection, confirmation, and password entry. Invalid
//! input re-prompts instead of failing.

use std::fmt::Display;

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Password, Select, Text};
use regex::RegexBuilder;

/// Fallback prompt for [`choose_from_list`].
const DEFAULT_CHOICE_PROMPT: &str = "Please input your choice:";

/// Ask for a line of free text.
///
/// A `default_value` is offered when the user submits nothing. When
/// `pattern` is given, input must match it in full (case-insensitively)
/// and anything else re-prompts.
///
/// # Errors
///
/// Returns an error when `pattern` is not a valid regex or when the
/// terminal interaction fails (e.g. the prompt is cancelled).
pub fn input(prompt: &str, default_value: Option<&str>, pattern: Option<&str>) -> Result<String> {
    let mut text = Text::new(prompt);
    if let Some(default) = default_value {
        text = text.with_default(default);
    }
    if let Some(pattern) = pattern {
        text = text.with_validator(full_match_validator(pattern)?);
    }
    text.prompt().context("failed to read user input")
}

/// Ask for a password without echoing it.
///
/// Empty input re-prompts unless `allow_empty` is set.
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn input_password(prompt: &str, allow_empty: bool) -> Result<String> {
    let mut password = Password::new(prompt).without_confirmation();
    if !allow_empty {
        password = password.with_validator(|value: &str| {
            if value.trim().is_empty() {
                Ok(Validation::Invalid(
                    "Invalid input, please try again.".into(),
                ))
            } else {
                Ok(Validation::Valid)
            }
        });
    }
    password.prompt().context("failed to read password")
}

/// Ask a yes/no question.
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn confirm(prompt: &str, default_value: Option<bool>) -> Result<bool> {
    let mut confirm = Confirm::new(prompt);
    if let Some(default) = default_value {
        confirm = confirm.with_default(default);
    }
    confirm.prompt().context("failed to read confirmation")
}

/// Ask for a number within `min..=max`, re-prompting on anything else.
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn choose_number(
    prompt: &str,
    default_value: Option<u64>,
    min: u64,
    max: u64,
) -> Result<u64> {
    let mut number = CustomType::<u64>::new(prompt)
        .with_error_message("Invalid input, please try again.");
    if let Some(default) = default_value {
        number = number.with_default(default);
    }
    number
        .with_validator(move |value: &u64| -> Result<Validation, CustomUserError> {
            if (min..=max).contains(value) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("Please choose a number between {min} and {max}.").into(),
                ))
            }
        })
        .prompt()
        .context("failed to read number choice")
}

/// Ask the user to pick one item from a list.
///
/// # Errors
///
/// Returns an error when `items` is empty or the terminal interaction
/// fails.
pub fn choose_from_list<T: Display>(items: Vec<T>, prompt: Option<&str>) -> Result<T> {
    Select::new(prompt.unwrap_or(DEFAULT_CHOICE_PROMPT), items)
        .prompt()
        .context("failed to read list selection")
}

/// Build a validator that accepts input matching `pattern` in full,
/// ignoring case.
fn full_match_validator(
    pattern: &str,
) -> Result<impl Fn(&str) -> Result<Validation, CustomUserError> + Clone + use<>> {
    let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("'{pattern}' is not a valid regex"))?;
    Ok(move |value: &str| {
        if regex.is_match(value) {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid(
                "Invalid input, please try again.".into(),
            ))
        }
    })
}
