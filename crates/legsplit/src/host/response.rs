use legsplit_engine::{Decimal, Precision, SplitResult};
use serde::Serialize;

use crate::host::request::RequestError;

/// A reply frame. Success and error replies are told apart by their keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Split {
        #[serde(rename = "onePercent")]
        one_percent: f64,
        legs: [f64; 3],
    },
    Error {
        #[serde(rename = "__error")]
        message: String,
    },
}

impl Response {
    /// Convert a split into wire numbers, each rounded to `precision` first.
    pub fn from_split(result: &SplitResult, precision: Precision) -> Result<Self, RequestError> {
        Ok(Response::Split {
            one_percent: wire_number(result.one_percent, precision)?,
            legs: [
                wire_number(result.legs[0], precision)?,
                wire_number(result.legs[1], precision)?,
                wire_number(result.legs[2], precision)?,
            ],
        })
    }

    /// An error reply carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

/// Nearest `f64` to the rounded decimal. Parsing the decimal's text is
/// correctly rounded, unlike scaling the mantissa in floating point.
fn wire_number(value: Decimal, precision: Precision) -> Result<f64, RequestError> {
    let text = precision.round(value)?.to_string();
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(RequestError::NotRepresentable(text)),
    }
}
