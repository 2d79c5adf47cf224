//! Native Messaging framing for stdin/stdout hosts.
//!
//! Every message on the wire is:
//! - A 4-byte little-endian payload length
//! - Exactly that many bytes of UTF-8 JSON
//!
//! A zero length or a stream that ends mid-frame marks the end of the
//! conversation. Frames whose payload is not valid JSON are consumed and
//! reported as dropped so the caller can keep reading.

pub mod codec;
pub mod error;
pub mod message;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, Frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use message::{decode_message, encode_message, Incoming};
pub use reader::FrameReader;
pub use writer::FrameWriter;
