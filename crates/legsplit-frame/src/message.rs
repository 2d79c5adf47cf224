use serde::Serialize;
use serde_json::Value;

use crate::error::{FrameError, Result};

/// Outcome of reading one message from the channel.
#[derive(Debug)]
pub enum Incoming {
    /// A complete frame whose payload parsed as JSON.
    Message(Value),
    /// A complete frame whose payload was not UTF-8 JSON. The frame's bytes
    /// have been consumed; the next read starts at the following header.
    Dropped(FrameError),
    /// End of stream: clean EOF, a truncated header or payload, or a
    /// zero-length frame.
    Closed,
}

/// Decode a frame payload as UTF-8 JSON.
pub fn decode_message(payload: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(payload)?;
    Ok(serde_json::from_str(text)?)
}

/// Encode a value as compact JSON (no insignificant whitespace).
pub fn encode_message<S: Serialize + ?Sized>(value: &S) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(FrameError::Json)
}
