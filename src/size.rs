//! Humanized byte-size formatting and parsing.
//!
//! This module converts raw byte counts into human-readable strings
//! (like "32.568 KB" or "31.8047 KiB") and parses such strings back into
//! byte counts. Both the decimal (powers of 1000) and binary (powers of
//! 1024) unit families are supported.
//!
//! Scaling is performed with exact decimal arithmetic on digit strings
//! rather than floating point, so formatting without rounding
//! (`digit: None`) and parsing are exact inverses of each other for every
//! input value.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Unit symbols of the decimal family, one per power of 1000.
pub const DECIMAL_UNITS: [&str; 14] = [
    "B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB", "BB", "NB", "DB", "CB", "XB",
];

/// Unit symbols of the binary family, one per power of 1024.
pub const BINARY_UNITS: [&str; 14] = [
    "B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB", "BiB", "NiB", "DiB", "CiB", "XiB",
];

/// Shape of a parsable size string: a number, optional whitespace, and a
/// unit suffix of one to three letters.
#[allow(clippy::expect_used)]
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*([A-Za-z]{1,3})$").expect("hard-coded pattern compiles")
});

/// Errors produced by the size codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    /// The unit symbol matches neither the decimal nor the binary table.
    #[error("target unit '{0}' is invalid")]
    InvalidUnit(String),

    /// The input string does not have the `<number><unit>` shape.
    #[error("'{0}' is not a parsable readable size")]
    InvalidFormat(String),

    /// The parsed byte count does not fit into a `u128`.
    #[error("size value exceeds the representable range")]
    Overflow,
}

/// The two supported unit families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UnitFamily {
    /// Powers of 1000 (KB, MB, ...).
    Decimal,
    /// Powers of 1024 (KiB, MiB, ...).
    Binary,
}

impl UnitFamily {
    const fn units(self) -> &'static [&'static str; 14] {
        match self {
            Self::Decimal => &DECIMAL_UNITS,
            Self::Binary => &BINARY_UNITS,
        }
    }

    const fn radix(self) -> u128 {
        match self {
            Self::Decimal => 1000,
            Self::Binary => 1024,
        }
    }

    /// Case-insensitive position of `symbol` in this family's unit table.
    fn index_of(self, symbol: &str) -> Option<usize> {
        self.units()
            .iter()
            .position(|unit| unit.eq_ignore_ascii_case(symbol))
    }
}

/// Format a byte count with an automatically chosen decimal unit.
///
/// Equivalent to [`humanize_file_size_with`] with no target unit, three
/// rounding digits, and a blank between the number and the unit.
///
/// # Examples
///
/// ```
/// # use toolshed::size::humanize_file_size;
/// assert_eq!(humanize_file_size(32568), "32.568 KB");
/// ```
#[must_use]
pub fn humanize_file_size(byte_size: u128) -> String {
    render(byte_size, UnitFamily::Decimal, None, Some(3), true)
}

/// Format a byte count as a human-readable size string.
///
/// If `target_unit` is `None` the unit is chosen automatically: the
/// smallest-magnitude unit of the decimal family that keeps the displayed
/// number below 1000, capped at the largest table entry. A supplied unit
/// is looked up case-insensitively, first in the decimal table and then in
/// the binary table, and echoed back with the caller's spelling.
///
/// `digit` is the number of fractional digits to keep, rounding half away
/// from zero; `None` keeps the exact decimal expansion. Trailing
/// fractional zeros are trimmed either way, so whole values render
/// without a decimal point.
///
/// # Errors
///
/// Returns [`SizeError::InvalidUnit`] when `target_unit` appears in
/// neither unit table.
pub fn humanize_file_size_with(
    byte_size: u128,
    target_unit: Option<&str>,
    digit: Option<u32>,
    add_blank: bool,
) -> Result<String, SizeError> {
    let (family, index) = match target_unit {
        None => (UnitFamily::Decimal, None),
        Some(unit) => {
            if let Some(index) = UnitFamily::Decimal.index_of(unit) {
                (UnitFamily::Decimal, Some(index))
            } else if let Some(index) = UnitFamily::Binary.index_of(unit) {
                (UnitFamily::Binary, Some(index))
            } else {
                return Err(SizeError::InvalidUnit(unit.to_string()));
            }
        }
    };

    let mut rendered = render(byte_size, family, index, digit, add_blank);

    // Echo the caller's spelling of the unit rather than the table's.
    if let (Some(unit), Some(pos)) = (target_unit, index) {
        let canonical = family.units()[pos];
        rendered.truncate(rendered.len() - canonical.len());
        rendered.push_str(unit);
    }

    Ok(rendered)
}

/// Parse a human-readable size string into a byte count.
///
/// The trimmed input must consist of a non-negative number (integer or
/// decimal), optional whitespace, and a unit suffix of one to three
/// letters. A one- or two-letter suffix is looked up in the decimal table
/// (radix 1000), a three-letter suffix in the binary table (radix 1024);
/// lookup is case-insensitive. The numeric value is scaled exactly and
/// truncated towards zero at the decimal point.
///
/// # Errors
///
/// - [`SizeError::InvalidFormat`] when the input does not have the
///   `<number><unit>` shape.
/// - [`SizeError::InvalidUnit`] when the letter suffix is not a known
///   unit of the table selected by its length.
/// - [`SizeError::Overflow`] when the byte count exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// # use toolshed::size::parse_humanized_file_size;
/// assert_eq!(parse_humanized_file_size("1.23456 TB").unwrap(), 1_234_560_000_000);
/// ```
pub fn parse_humanized_file_size(readable_size: &str) -> Result<u128, SizeError> {
    let trimmed = readable_size.trim();
    let captures = SIZE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| SizeError::InvalidFormat(trimmed.to_string()))?;
    let number = &captures[1];
    let unit = &captures[2];

    // The suffix spelling selects the table: 1-2 letters are decimal
    // symbols, exactly 3 letters are binary symbols.
    let family = match unit.len() {
        1 | 2 => UnitFamily::Decimal,
        3 => UnitFamily::Binary,
        _ => return Err(SizeError::InvalidUnit(unit.to_string())),
    };
    let index = family
        .index_of(unit)
        .ok_or_else(|| SizeError::InvalidUnit(unit.to_string()))?;

    let (int_digits, frac_digits) = number
        .split_once('.')
        .map_or((number, ""), |(int, frac)| (int, frac));
    let mantissa = format!("{int_digits}{frac_digits}");

    // Scale the mantissa by radix^index exactly, then truncate at the
    // decimal point by dropping the fractional digit positions.
    let scaled = match family {
        UnitFamily::Decimal => {
            let zeros = 3 * index;
            if zeros >= frac_digits.len() {
                format!("{mantissa}{}", "0".repeat(zeros - frac_digits.len()))
            } else {
                mantissa[..mantissa.len() - (frac_digits.len() - zeros)].to_string()
            }
        }
        UnitFamily::Binary => {
            let mut product = mantissa;
            for _ in 0..index {
                product = multiply_digits(&product, 1024);
            }
            product[..product.len() - frac_digits.len()].to_string()
        }
    };

    scaled.parse::<u128>().map_err(|_| SizeError::Overflow)
}

/// Render `byte_size` in the given family, formatting exactly and then
/// rounding/trimming per `digit`.
fn render(
    byte_size: u128,
    family: UnitFamily,
    index: Option<usize>,
    digit: Option<u32>,
    add_blank: bool,
) -> String {
    let index = index.unwrap_or_else(|| auto_index(byte_size, family));
    let unit = family.units()[index];

    let (mut int_part, mut frac_part) = scale_down(byte_size, family, index);
    if let Some(digit) = digit {
        (int_part, frac_part) = round_at(&int_part, &frac_part, digit as usize);
    }

    let frac_part = frac_part.trim_end_matches('0');
    let blank = if add_blank { " " } else { "" };
    if frac_part.is_empty() {
        format!("{int_part}{blank}{unit}")
    } else {
        format!("{int_part}.{frac_part}{blank}{unit}")
    }
}

/// Smallest unit index that keeps the displayed value below the radix,
/// capped at the end of the table.
fn auto_index(byte_size: u128, family: UnitFamily) -> usize {
    let radix = family.radix();
    let mut value = byte_size;
    let mut index = 0;
    while value >= radix && index < family.units().len() - 1 {
        value /= radix;
        index += 1;
    }
    index
}

/// Exact decimal expansion of `byte_size / radix^index` as integer and
/// fractional digit strings.
fn scale_down(byte_size: u128, family: UnitFamily, index: usize) -> (String, String) {
    let digits = byte_size.to_string();
    match family {
        UnitFamily::Decimal => shift_point_left(&digits, 3 * index),
        UnitFamily::Binary => {
            let mut int_part = digits;
            let mut frac_part = String::new();
            for _ in 0..index {
                (int_part, frac_part) = divide_by_1024(&int_part, &frac_part);
            }
            (int_part, frac_part)
        }
    }
}

/// Move the decimal point of an integer digit string `places` positions
/// to the left.
fn shift_point_left(digits: &str, places: usize) -> (String, String) {
    if places == 0 {
        return (digits.to_string(), String::new());
    }
    let padded = if digits.len() <= places {
        format!("{}{digits}", "0".repeat(places + 1 - digits.len()))
    } else {
        digits.to_string()
    };
    let split = padded.len() - places;
    (padded[..split].to_string(), padded[split..].to_string())
}

/// One step of decimal long division by 1024.
///
/// The quotient of a terminating decimal divided by 1024 also terminates,
/// so the fractional part is extended with zero digits until the
/// remainder is consumed.
fn divide_by_1024(int_part: &str, frac_part: &str) -> (String, String) {
    fn step(remainder: &mut u32, byte: u8) -> char {
        let acc = *remainder * 10 + u32::from(byte - b'0');
        *remainder = acc % 1024;
        char::from(b'0' + u8::try_from(acc / 1024).unwrap_or(0))
    }

    let mut remainder: u32 = 0;
    let mut quotient_int = String::with_capacity(int_part.len());
    for byte in int_part.bytes() {
        quotient_int.push(step(&mut remainder, byte));
    }
    let mut quotient_frac = String::with_capacity(frac_part.len() + 10);
    for byte in frac_part.bytes() {
        quotient_frac.push(step(&mut remainder, byte));
    }
    while remainder != 0 {
        quotient_frac.push(step(&mut remainder, b'0'));
    }

    let trimmed = quotient_int.trim_start_matches('0');
    let quotient_int = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };
    (quotient_int, quotient_frac)
}

/// Round the fractional part half away from zero to at most `digit`
/// digits, carrying into the integer part when needed.
fn round_at(int_part: &str, frac_part: &str, digit: usize) -> (String, String) {
    if frac_part.len() <= digit {
        return (int_part.to_string(), frac_part.to_string());
    }
    let kept = &frac_part[..digit];
    if frac_part.as_bytes()[digit] < b'5' {
        return (int_part.to_string(), kept.to_string());
    }

    // Increment the concatenated digits, rippling the carry leftwards.
    let mut digits: Vec<u8> = format!("{int_part}{kept}").into_bytes();
    let mut position = digits.len();
    loop {
        if position == 0 {
            digits.insert(0, b'1');
            break;
        }
        position -= 1;
        if digits[position] == b'9' {
            digits[position] = b'0';
        } else {
            digits[position] += 1;
            break;
        }
    }

    let split = digits.len() - digit;
    let as_string: String = digits.iter().map(|&byte| char::from(byte)).collect();
    (as_string[..split].to_string(), as_string[split..].to_string())
}

/// Multiply a decimal digit string by a small factor.
fn multiply_digits(digits: &str, factor: u32) -> String {
    let mut reversed: Vec<u8> = Vec::with_capacity(digits.len() + 4);
    let mut carry: u64 = 0;
    for byte in digits.bytes().rev() {
        let product = u64::from(byte - b'0') * u64::from(factor) + carry;
        reversed.push(b'0' + u8::try_from(product % 10).unwrap_or(0));
        carry = product / 10;
    }
    while carry > 0 {
        reversed.push(b'0' + u8::try_from(carry % 10).unwrap_or(0));
        carry /= 10;
    }
    if reversed.is_empty() {
        reversed.push(b'0');
    }
    reversed.iter().rev().map(|&byte| char::from(byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_auto_unit() {
        assert_eq!(humanize_file_size(32568), "32.568 KB");
        assert_eq!(humanize_file_size(0), "0 B");
        assert_eq!(humanize_file_size(999), "999 B");
        assert_eq!(humanize_file_size(1000), "1 KB");
        assert_eq!(humanize_file_size(1_500_000), "1.5 MB");
    }

    #[test]
    fn test_humanize_explicit_units() {
        assert_eq!(
            humanize_file_size_with(32568, Some("KB"), Some(2), true).unwrap(),
            "32.57 KB"
        );
        assert_eq!(
            humanize_file_size_with(32568, Some("KiB"), Some(4), true).unwrap(),
            "31.8047 KiB"
        );
        assert_eq!(
            humanize_file_size_with(32568, Some("MB"), Some(5), true).unwrap(),
            "0.03257 MB"
        );
        assert_eq!(
            humanize_file_size_with(32568, Some("MiB"), Some(6), true).unwrap(),
            "0.031059 MiB"
        );
    }

    #[test]
    fn test_humanize_no_rounding_no_blank() {
        assert_eq!(
            humanize_file_size_with(1, None, None, false).unwrap(),
            "1B"
        );
        assert_eq!(
            humanize_file_size_with(32568, Some("KiB"), None, true).unwrap(),
            "31.8046875 KiB"
        );
    }

    #[test]
    fn test_humanize_keeps_caller_spelling() {
        assert_eq!(
            humanize_file_size_with(32568, Some("kb"), Some(2), true).unwrap(),
            "32.57 kb"
        );
        assert_eq!(
            humanize_file_size_with(32568, Some("kib"), Some(4), false).unwrap(),
            "31.8047kib"
        );
    }

    #[test]
    fn test_humanize_rounding_carries() {
        // 999_999 B = 999.999 KB; one digit rounds up into the next
        // integer.
        assert_eq!(
            humanize_file_size_with(999_999, Some("KB"), Some(1), true).unwrap(),
            "1000 KB"
        );
        // 0.9996... rounds up to 1 across the decimal point.
        assert_eq!(
            humanize_file_size_with(999_600, Some("MB"), Some(3), true).unwrap(),
            "1 MB"
        );
    }

    #[test]
    fn test_humanize_invalid_unit() {
        assert_eq!(
            humanize_file_size_with(1, Some("QB"), Some(3), true),
            Err(SizeError::InvalidUnit("QB".to_string()))
        );
        assert_eq!(
            humanize_file_size_with(1, Some("KiBs"), Some(3), true),
            Err(SizeError::InvalidUnit("KiBs".to_string()))
        );
    }

    #[test]
    fn test_humanize_large_values() {
        assert_eq!(humanize_file_size(1_000_000_000_000), "1 TB");
        assert_eq!(
            humanize_file_size_with(1_152_921_504_606_846_976, Some("EiB"), Some(3), true)
                .unwrap(),
            "1 EiB"
        );
        // Auto-selection walks the whole table for u128-scale values.
        assert_eq!(humanize_file_size(u128::MAX), "340.282 CB");
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_humanized_file_size("0 GB").unwrap(), 0);
        assert_eq!(parse_humanized_file_size("1 KB").unwrap(), 1000);
        assert_eq!(parse_humanized_file_size("1 KiB").unwrap(), 1024);
        assert_eq!(
            parse_humanized_file_size("1.23456   TB").unwrap(),
            1_234_560_000_000
        );
        assert_eq!(
            parse_humanized_file_size("1.23456TiB").unwrap(),
            1_357_413_075_187
        );
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        assert_eq!(parse_humanized_file_size("  5 mb  ").unwrap(), 5_000_000);
        assert_eq!(parse_humanized_file_size("2gib").unwrap(), 2_147_483_648);
        assert_eq!(parse_humanized_file_size("7B").unwrap(), 7);
    }

    #[test]
    fn test_parse_truncates_at_the_point() {
        // 0.5 B is half a byte; truncation drops it.
        assert_eq!(parse_humanized_file_size("0.5 B").unwrap(), 0);
        assert_eq!(parse_humanized_file_size("1.9 B").unwrap(), 1);
        assert_eq!(parse_humanized_file_size("1.0005 KB").unwrap(), 1000);
    }

    #[test]
    fn test_parse_invalid_format() {
        for input in ["aaaK", "", "12", "1.2.3MB", "MB1", "-1MB", "1 KBXS"] {
            assert!(matches!(
                parse_humanized_file_size(input),
                Err(SizeError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_parse_invalid_unit() {
        for input in ["123ABC", "1 QB", "3 xyz"] {
            assert!(matches!(
                parse_humanized_file_size(input),
                Err(SizeError::InvalidUnit(_))
            ));
        }
    }

    #[test]
    fn test_parse_overflow() {
        // 1 XB is 10^39 bytes, which does not fit into a u128.
        assert_eq!(
            parse_humanized_file_size("1 XB"),
            Err(SizeError::Overflow)
        );
        assert!(parse_humanized_file_size("340 CB").is_ok());
        assert_eq!(
            parse_humanized_file_size("400 CB"),
            Err(SizeError::Overflow)
        );
    }

    #[test]
    fn test_round_trip_exact_when_unrounded() {
        let samples: [u128; 12] = [
            0,
            1,
            999,
            1000,
            1023,
            32568,
            1_048_577,
            999_999_999,
            1_234_560_000_000,
            1_357_413_075_187,
            u128::from(u64::MAX),
            u128::MAX / 7,
        ];
        for &n in &samples {
            let auto = humanize_file_size_with(n, None, None, true).unwrap();
            assert_eq!(parse_humanized_file_size(&auto).unwrap(), n, "{auto}");

            for unit in ["KB", "GB", "KiB", "GiB", "TiB"] {
                let formatted = humanize_file_size_with(n, Some(unit), None, false).unwrap();
                assert_eq!(
                    parse_humanized_file_size(&formatted).unwrap(),
                    n,
                    "{formatted}"
                );
            }
        }
    }

    #[test]
    fn test_suffix_length_selects_the_table() {
        // Two letters: decimal. Three letters: binary.
        assert_eq!(parse_humanized_file_size("1KB").unwrap(), 1000);
        assert_eq!(parse_humanized_file_size("1KiB").unwrap(), 1024);
        // "B" alone is shared by both families but parses as decimal
        // index zero, which is the same magnitude either way.
        assert_eq!(parse_humanized_file_size("123 B").unwrap(), 123);
    }

    #[test]
    fn test_unit_tables_are_aligned() {
        assert_eq!(DECIMAL_UNITS.len(), BINARY_UNITS.len());
        assert_eq!(DECIMAL_UNITS[0], "B");
        assert_eq!(BINARY_UNITS[0], "B");
        for unit in &DECIMAL_UNITS[1..] {
            assert_eq!(unit.len(), 2);
        }
        for unit in &BINARY_UNITS[1..] {
            assert_eq!(unit.len(), 3);
        }
    }
}
