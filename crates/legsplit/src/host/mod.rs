//! The read/dispatch/write loop.
//!
//! One request is handled at a time, in arrival order. Anything wrong with a
//! request becomes an `{"__error": ...}` reply and the loop keeps going; only
//! the end of the input stream (or a failure to write a reply) stops it.

mod request;
mod response;

use std::io::{Read, Write};

use legsplit_engine::{split, DEFAULT_DECIMALS};
use legsplit_frame::{FrameConfig, FrameError, FrameReader, FrameWriter, Incoming};
use serde_json::Value;

pub use request::{ComputeRequest, RequestError, COMPUTE_ACTION, DEFAULT_BALANCE};
pub use response::Response;

/// Host settings, fixed for the lifetime of the loop.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Framing limits for both directions.
    pub frame: FrameConfig,
    /// Decimal places used when a request omits `decimals`.
    pub default_decimals: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            default_decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Counters reported when the loop stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    /// Requests answered with a split.
    pub handled: u64,
    /// Requests answered with an error.
    pub rejected: u64,
    /// Frames whose payload was not UTF-8 JSON; no reply was sent.
    pub dropped: u64,
}

/// Errors that end the loop early.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A reply could not be written; the peer has most likely gone away.
    #[error("failed to write response: {0}")]
    Write(#[source] FrameError),
}

/// Answer one decoded request.
pub fn handle_message(message: &Value, config: &HostConfig) -> Response {
    match compute(message, config) {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(error = %err, "request rejected");
            Response::error(err.to_string())
        }
    }
}

fn compute(message: &Value, config: &HostConfig) -> Result<Response, RequestError> {
    let request = ComputeRequest::from_message(message, config.default_decimals)?;
    let result = split(request.balance, request.precision)?;
    Response::from_split(&result, request.precision)
}

/// Serve requests from `input`, writing replies to `output`, until the input
/// ends.
///
/// A clean EOF, a truncated frame, a zero-length frame and an unreadable
/// stream all stop the loop normally. Frames that are not UTF-8 JSON are
/// skipped without a reply.
pub fn serve<R: Read, W: Write>(
    input: R,
    output: W,
    config: &HostConfig,
) -> Result<ServeStats, HostError> {
    let mut reader = FrameReader::with_config(input, config.frame.clone());
    let mut writer = FrameWriter::with_config(output, config.frame.clone());
    let mut stats = ServeStats::default();

    loop {
        let message = match reader.read_message() {
            Ok(Incoming::Message(message)) => message,
            Ok(Incoming::Dropped(err)) => {
                stats.dropped += 1;
                tracing::warn!(error = %err, "dropping malformed frame");
                continue;
            }
            Ok(Incoming::Closed) => {
                tracing::debug!("input closed");
                break;
            }
            Err(err) => {
                tracing::warn!(error = %err, "input unreadable, stopping");
                break;
            }
        };

        let response = handle_message(&message, config);
        if response.is_error() {
            stats.rejected += 1;
        } else {
            stats.handled += 1;
        }

        writer.send_message(&response).map_err(HostError::Write)?;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn compute_request_is_answered() {
        let response = handle_message(
            &json!({"action": "compute", "balance": "1000", "decimals": 2}),
            &HostConfig::default(),
        );
        assert_eq!(
            response,
            Response::Split {
                one_percent: 10.0,
                legs: [3.34, 3.33, 3.33]
            }
        );
    }

    #[test]
    fn unsupported_action_reply_is_exact() {
        let response = handle_message(&json!({"action": "ping"}), &HostConfig::default());
        assert_eq!(response, Response::error("Unsupported action"));
    }

    #[test]
    fn invalid_balance_reply_names_input() {
        let response = handle_message(
            &json!({"action": "compute", "balance": "not-a-number"}),
            &HostConfig::default(),
        );
        assert_eq!(
            response,
            Response::error(r#"invalid decimal amount "not-a-number""#)
        );
    }

    #[test]
    fn default_decimals_come_from_config() {
        let config = HostConfig {
            default_decimals: 0,
            ..HostConfig::default()
        };
        let response = handle_message(&json!({"action": "compute", "balance": 100}), &config);
        assert_eq!(
            response,
            Response::Split {
                one_percent: 1.0,
                legs: [1.0, 0.0, 0.0]
            }
        );
    }

    #[test]
    fn empty_input_serves_nothing() {
        let mut out = Vec::new();
        let stats = serve(std::io::empty(), &mut out, &HostConfig::default()).unwrap();
        assert_eq!(stats, ServeStats::default());
        assert!(out.is_empty());
    }
}
