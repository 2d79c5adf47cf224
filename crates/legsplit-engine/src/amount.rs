use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, SplitError};

/// Parse decimal text exactly, without passing through binary floating point.
///
/// Surrounding whitespace is ignored. Plain (`"1234.56"`, `"-0.5"`) and
/// exponent (`"1.5e3"`) forms are accepted; `NaN`, infinities and anything
/// else that is not a finite decimal are rejected.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let invalid = || SplitError::InvalidAmount(text.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if trimmed.contains(['e', 'E']) {
        return Decimal::from_scientific(trimmed).map_err(|_| invalid());
    }

    Decimal::from_str(trimmed).map_err(|_| invalid())
}
