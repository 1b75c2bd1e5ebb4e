//! The CUI checksum algorithm and its result type.

use serde::{Deserialize, Serialize};

/// Minimum number of digits in a CUI.
pub const MIN_CUI_LENGTH: usize = 2;

/// Maximum number of digits in a CUI.
pub const MAX_CUI_LENGTH: usize = 10;

const VAT_PREFIX: &str = "RO";

/// Checksum control key as defined by Romanian legislation, applied to the
/// 9-digit zero-padded body (control digit excluded).
const CHECKSUM_KEY: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

/// Result of CUI/CIF validation.
///
/// Exactly one of `normalized` (when valid) or `error` (when invalid) is
/// populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the CUI is valid according to the Romanian checksum algorithm.
    pub valid: bool,
    /// The normalized CUI without prefix or separators (`None` if invalid).
    pub normalized: Option<String>,
    /// Whether the "RO" VAT prefix was present in the input.
    pub vat_prefix_present: bool,
    /// Description of the validation failure (`None` if valid).
    pub error: Option<String>,
}

impl ValidationResult {
    fn success(normalized: String, vat_prefix_present: bool) -> Self {
        Self {
            valid: true,
            normalized: Some(normalized),
            vat_prefix_present,
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            normalized: None,
            vat_prefix_present: false,
            error: Some(error.into()),
        }
    }
}

/// Validate a Romanian CUI/CIF by the official checksum algorithm.
///
/// Accepts the bare digit form, an optional case-insensitive `RO` VAT prefix,
/// and common separators (space, hyphen, underscore, dot, slash) anywhere in
/// the input. Leading zeros are part of the identifier and are never stripped.
///
/// The checksum works on the digits without the final control digit,
/// left-padded with zeros to 9 positions: each digit is multiplied by the
/// corresponding entry of the control key, the products are summed, the sum
/// is multiplied by 10 and taken modulo 11. A remainder of 10 maps to a
/// control digit of 0; otherwise the remainder is the expected control digit.
#[must_use]
pub fn validate_cui(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return ValidationResult::failure("CUI cannot be empty");
    }

    // Normalize: remove whitespace and separators
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.' | '/'))
        .collect();

    // Check for RO prefix
    let (normalized, vat_prefix_present) = match strip_vat_prefix(&normalized) {
        Some(rest) => (rest, true),
        None => (normalized.as_str(), false),
    };

    if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure(
            "CUI must contain only digits (optionally prefixed with 'RO')",
        );
    }

    if normalized.len() < MIN_CUI_LENGTH {
        return ValidationResult::failure(format!(
            "CUI must have at least {MIN_CUI_LENGTH} digits"
        ));
    }
    if normalized.len() > MAX_CUI_LENGTH {
        return ValidationResult::failure(format!("CUI must have at most {MAX_CUI_LENGTH} digits"));
    }

    if !checksum_valid(normalized) {
        return ValidationResult::failure("CUI checksum is invalid");
    }

    ValidationResult::success(normalized.to_owned(), vat_prefix_present)
}

fn strip_vat_prefix(value: &str) -> Option<&str> {
    // Byte-wise so a non-ASCII first character cannot split a char boundary.
    match value.as_bytes() {
        [a, b, ..] if a.eq_ignore_ascii_case(&b'R') && b.eq_ignore_ascii_case(&b'O') => {
            Some(&value[VAT_PREFIX.len()..])
        }
        _ => None,
    }
}

/// Checks the control digit of a digit-only string of valid length.
fn checksum_valid(cui: &str) -> bool {
    let digits = cui.as_bytes();
    let control_digit = u32::from(digits[digits.len() - 1] - b'0');

    // Body without the control digit, left-padded with zeros to 9 digits.
    // The key is applied right-aligned, so missing leading positions
    // contribute zero and can be skipped.
    let body = &digits[..digits.len() - 1];
    let offset = CHECKSUM_KEY.len() - body.len();
    let sum: u32 = body
        .iter()
        .zip(&CHECKSUM_KEY[offset..])
        .map(|(&d, &key)| u32::from(d - b'0') * key)
        .sum();

    let remainder = (sum * 10) % 11;
    let expected = if remainder == 10 { 0 } else { remainder };

    control_digit == expected
}
