use lazy_static::lazy_static;
use regex::Regex;

use crate::units::error::ConvertError;
use crate::units::types::RawValue;

lazy_static! {
    /// Accepted numeral grammar: optional sign, digits with optional
    /// fraction (or a bare fraction like ".5"), optional exponent.
    /// Examples: "100", "-40", "+3.25", ".5", "1e3", "2.5E-2"
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Turn a raw input into a finite number, or fail with `InvalidNumber`.
/// Missing, empty, non-numeric, NaN, and infinite inputs are all rejected
/// with the same error kind.
pub fn to_finite(raw: &RawValue) -> Result<f64, ConvertError> {
    let text = match raw {
        RawValue::Number(n) if n.is_finite() => return Ok(*n),
        RawValue::Number(_) => return Err(ConvertError::InvalidNumber),
        RawValue::Missing => return Err(ConvertError::InvalidNumber),
        RawValue::Text(s) => s.trim(),
    };

    if !NUMBER_PATTERN.is_match(text) {
        return Err(ConvertError::InvalidNumber);
    }

    let parsed: f64 = text.parse().map_err(|_| ConvertError::InvalidNumber)?;

    // The grammar admits exponents that overflow to infinity, e.g. "1e999"
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(ConvertError::InvalidNumber)
    }
}
