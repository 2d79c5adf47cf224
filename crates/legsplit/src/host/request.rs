use legsplit_engine::{parse_amount, Decimal, Precision, SplitError};
use serde_json::{Map, Value};

/// The only action this host understands.
pub const COMPUTE_ACTION: &str = "compute";

/// Balance used when a request leaves it out.
pub const DEFAULT_BALANCE: &str = "0";

/// Reasons a request cannot be answered with a split.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The payload parsed as JSON but is not an object.
    #[error("request must be a JSON object")]
    NotAnObject,

    /// `action` is missing, not a string, or not `"compute"`.
    #[error("Unsupported action")]
    UnsupportedAction,

    /// `balance` is neither a string nor a number.
    #[error("balance must be a string or number, got {0}")]
    BalanceType(&'static str),

    /// `decimals` is not an integer.
    #[error("decimals must be an integer, got {0}")]
    InvalidDecimals(String),

    /// A computed value has no finite JSON number form.
    #[error("value {0} cannot be sent as a JSON number")]
    NotRepresentable(String),

    /// Parsing or splitting the amount failed.
    #[error(transparent)]
    Split(#[from] SplitError),
}

/// A validated `compute` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeRequest {
    pub balance: Decimal,
    pub precision: Precision,
}

impl ComputeRequest {
    /// Validate a decoded request payload.
    ///
    /// `default_decimals` applies when the request has no `decimals` key.
    pub fn from_message(message: &Value, default_decimals: u32) -> Result<Self, RequestError> {
        let fields = message.as_object().ok_or(RequestError::NotAnObject)?;

        if fields.get("action").and_then(Value::as_str) != Some(COMPUTE_ACTION) {
            return Err(RequestError::UnsupportedAction);
        }

        Ok(Self {
            balance: balance_field(fields)?,
            precision: decimals_field(fields, default_decimals)?,
        })
    }
}

/// Read `balance` through its textual form so floats never round-trip
/// through binary.
fn balance_field(fields: &Map<String, Value>) -> Result<Decimal, RequestError> {
    let amount = match fields.get("balance") {
        None => parse_amount(DEFAULT_BALANCE)?,
        Some(Value::String(text)) => parse_amount(text)?,
        Some(Value::Number(number)) => parse_amount(&number.to_string())?,
        Some(other) => return Err(RequestError::BalanceType(json_type_name(other))),
    };
    Ok(amount)
}

fn decimals_field(
    fields: &Map<String, Value>,
    default_decimals: u32,
) -> Result<Precision, RequestError> {
    let raw = match fields.get("decimals") {
        None => i64::from(default_decimals),
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_i64() {
                n
            } else if number.as_u64().is_some() {
                i64::MAX
            } else {
                // Fractional values truncate toward zero; the cast saturates.
                number.as_f64().map(|f| f.trunc() as i64).unwrap_or_default()
            }
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| RequestError::InvalidDecimals(format!("{text:?}")))?,
        // Booleans count as integers: true is 1, false is 0.
        Some(Value::Bool(flag)) => i64::from(*flag),
        Some(other) => return Err(RequestError::InvalidDecimals(other.to_string())),
    };
    Ok(Precision::clamped(raw))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    fn parse(message: Value) -> Result<ComputeRequest, RequestError> {
        ComputeRequest::from_message(&message, 2)
    }

    #[test]
    fn accepts_string_balance() {
        let request = parse(json!({"action": "compute", "balance": "1000", "decimals": 2})).unwrap();
        assert_eq!(request.balance, Decimal::from(1000));
        assert_eq!(request.precision.decimals(), 2);
    }

    #[test]
    fn numeric_balance_uses_shortest_text() {
        let request = parse(json!({"action": "compute", "balance": 0.1})).unwrap();
        assert_eq!(request.balance, Decimal::from_str("0.1").unwrap());

        let request = parse(json!({"action": "compute", "balance": 1234})).unwrap();
        assert_eq!(request.balance, Decimal::from(1234));
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let request = parse(json!({"action": "compute"})).unwrap();
        assert_eq!(request.balance, Decimal::ZERO);
        assert_eq!(request.precision.decimals(), 2);

        let request = ComputeRequest::from_message(&json!({"action": "compute"}), 4).unwrap();
        assert_eq!(request.precision.decimals(), 4);
    }

    #[test]
    fn decimals_are_clamped() {
        let high = parse(json!({"action": "compute", "decimals": 12})).unwrap();
        assert_eq!(high.precision.decimals(), 8);

        let low = parse(json!({"action": "compute", "decimals": -1})).unwrap();
        assert_eq!(low.precision.decimals(), 0);

        let huge = parse(json!({"action": "compute", "decimals": u64::MAX})).unwrap();
        assert_eq!(huge.precision.decimals(), 8);
    }

    #[test]
    fn decimals_accept_floats_and_integer_strings() {
        let truncated = parse(json!({"action": "compute", "decimals": 3.9})).unwrap();
        assert_eq!(truncated.precision.decimals(), 3);

        let text = parse(json!({"action": "compute", "decimals": " 4 "})).unwrap();
        assert_eq!(text.precision.decimals(), 4);
    }

    #[test]
    fn boolean_decimals_count_as_integers() {
        let one = parse(json!({"action": "compute", "decimals": true})).unwrap();
        assert_eq!(one.precision.decimals(), 1);

        let zero = parse(json!({"action": "compute", "decimals": false})).unwrap();
        assert_eq!(zero.precision.decimals(), 0);
    }

    #[test]
    fn rejects_non_integer_decimals() {
        assert_eq!(
            parse(json!({"action": "compute", "decimals": "2.5"})),
            Err(RequestError::InvalidDecimals("\"2.5\"".to_string()))
        );
        assert_eq!(
            parse(json!({"action": "compute", "decimals": null})),
            Err(RequestError::InvalidDecimals("null".to_string()))
        );
        assert_eq!(
            parse(json!({"action": "compute", "decimals": [2]})),
            Err(RequestError::InvalidDecimals("[2]".to_string()))
        );
    }

    #[test]
    fn unsupported_actions() {
        for message in [
            json!({"action": "ping"}),
            json!({"action": "Compute"}),
            json!({"action": 1}),
            json!({"balance": "10"}),
        ] {
            assert_eq!(parse(message), Err(RequestError::UnsupportedAction));
        }
        assert_eq!(RequestError::UnsupportedAction.to_string(), "Unsupported action");
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert_eq!(parse(json!([1, 2, 3])), Err(RequestError::NotAnObject));
        assert_eq!(parse(json!("compute")), Err(RequestError::NotAnObject));
    }

    #[test]
    fn rejects_bad_balances() {
        assert!(matches!(
            parse(json!({"action": "compute", "balance": "not-a-number"})),
            Err(RequestError::Split(SplitError::InvalidAmount(_)))
        ));
        assert_eq!(
            parse(json!({"action": "compute", "balance": true})),
            Err(RequestError::BalanceType("boolean"))
        );
        assert_eq!(
            parse(json!({"action": "compute", "balance": null})),
            Err(RequestError::BalanceType("null"))
        );
    }
}
