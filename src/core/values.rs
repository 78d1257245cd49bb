//! Text to value sequence, floats parsed with `lexical-core`.

use std::borrow::Cow;

use crate::core::{constants::UNICODE_MINUS, error::ParseValuesError};

// --- Helpers ---
#[inline]
fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Swap U+2212 for ASCII `-`; borrows when there is nothing to replace.
#[inline]
#[must_use]
pub fn normalize_unicode_minus(text: &str) -> Cow<'_, str> {
    if text.contains(UNICODE_MINUS) {
        Cow::Owned(text.replace(UNICODE_MINUS, "-"))
    } else {
        Cow::Borrowed(text)
    }
}

#[inline]
fn parse_f64(field: &str, position: usize) -> Result<f64, ParseValuesError> {
    let val =
        lexical_core::parse::<f64>(field.as_bytes()).map_err(|_| ParseValuesError::BadFloat {
            position,
            text: field.to_owned(),
        })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseValuesError::NonFinite {
            position,
            text: field.to_owned(),
        })
    }
}

/// Parse numbers separated by commas and/or whitespace.
///
/// Empty fields are skipped, so `"1, 2,,3"` and `"1 2\n3"` both give
/// `[1.0, 2.0, 3.0]`. Blank input gives an empty sequence.
pub fn parse_values(text: &str) -> Result<Vec<f64>, ParseValuesError> {
    let text = normalize_unicode_minus(text);
    text.split(is_separator)
        .filter(|f| !f.is_empty())
        .enumerate()
        .map(|(i, field)| parse_f64(field, i + 1))
        .collect()
}
