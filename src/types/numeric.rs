use crate::types::NumericError;
use crate::types::is_missing_marker;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

/// Parses a raw cell as a decimal number.
///
/// Accepts an optional sign, a fractional part and scientific notation (`1.2e3`).
/// Digit separators and non-finite spellings such as `inf` are rejected, as are values
/// outside the range and precision of `Decimal` (28 significant digits, magnitude below 7.9e28).
pub fn parse_number(value: &str) -> Result<Decimal, NumericError> {
    let value = value.trim();

    if is_missing_marker(value) {
        return Err(NumericError::Missing);
    }

    if value.contains(['_', ',']) {
        return Err(NumericError::InvalidFormat(format!("Value has digit separators: {value}")));
    }

    if !value.bytes().any(|byte| byte.is_ascii_digit()) {
        return Err(NumericError::InvalidFormat(format!("Value has no digits: {value}")));
    }

    let number = if value.contains(['e', 'E']) {
        //NOTE: rust_decimal does not accept a leading '+' on the scientific path
        let unsigned = value.strip_prefix('+').unwrap_or(value);
        Decimal::from_scientific(unsigned)?
    } else {
        Decimal::from_str(value)?
    };

    if number.is_zero() && has_nonzero_mantissa(value) {
        return Err(NumericError::InvalidFormat(format!("Value is below decimal precision: {value}")));
    }

    Ok(number)
}

fn has_nonzero_mantissa(value: &str) -> bool {
    value
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|byte| (b'1'..=b'9').contains(&byte)))
}

/// Best-effort coercion: anything that does not parse becomes a missing value.
pub fn coerce_number(value: Option<&str>) -> Option<Decimal> {
    let value = value?;

    match parse_number(value) {
        Ok(number) => Some(number),
        Err(NumericError::Missing) => None,
        Err(error) => {
            trace!("Coerced [{value}] to missing | {error}");
            None
        }
    }
}
