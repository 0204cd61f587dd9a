//! # toolshed
//!
//! A personal toolshed of small, focused utility modules. Each module is a
//! thin, largely stateless layer of validation and convenience defaults on
//! top of a standard facility.
//!
//! ## Modules
//!
//! - [`size`] - Humanized byte-size formatting and parsing (decimal and
//!   binary unit families)
//! - [`codec`] - Base64 text encoding and decoding
//! - [`datetime`] - Date string / millisecond-timestamp conversion
//! - [`number`] - English pluralization of counted nouns
//! - [`string`] - Fuzzy string normalization and version comparison
//! - [`pattern`] - Regex convenience wrappers
//! - [`path`] - Path joining, globbing, and suffix helpers
//! - [`file`] - File copy/move/delete, directory sizing, and hashing
//! - [`console`] - Interactive terminal prompting
//!
//! ## Example
//!
//! ```no_run
//! use toolshed::size::{humanize_file_size, parse_humanized_file_size};
//!
//! assert_eq!(humanize_file_size(32568), "32.568 KB");
//! assert_eq!(parse_humanized_file_size("1.23456 TB").unwrap(), 1_234_560_000_000);
//! ```

pub mod codec;
pub mod console;
pub mod datetime;
pub mod file;
pub mod number;
pub mod path;
pub mod pattern;
pub mod size;
pub mod string;

pub use size::{SizeError, humanize_file_size, humanize_file_size_with, parse_humanized_file_size};
