use std::io::{ErrorKind, Read};

use bytes::BytesMut;

use crate::codec::{decode_frame, Frame, FrameConfig};
use crate::error::{FrameError, Result};
use crate::message::{decode_message, Incoming};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads complete frames from any `Read` stream.
///
/// Handles partial reads internally — callers always get complete frames.
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Ok(None)` when the stream ends, whether cleanly between
    /// frames or part way through a header or payload. A zero-length frame
    /// is returned as-is; see [`Frame::is_terminator`].
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            if let Some(frame) = decode_frame(&mut self.buf, self.config.max_payload_size)? {
                return Ok(Some(frame));
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                if !self.buf.is_empty() {
                    tracing::debug!(buffered = self.buf.len(), "stream ended mid-frame");
                    self.buf.clear();
                }
                return Ok(None);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Read the next frame and decode its payload as JSON.
    ///
    /// End of stream and zero-length frames both yield [`Incoming::Closed`].
    /// A payload that is not UTF-8 JSON yields [`Incoming::Dropped`]; the
    /// stream stays usable for the next frame.
    pub fn read_message(&mut self) -> Result<Incoming> {
        let frame = match self.read_frame()? {
            Some(frame) if !frame.is_terminator() => frame,
            _ => return Ok(Incoming::Closed),
        };

        match decode_message(frame.payload.as_ref()) {
            Ok(value) => Ok(Incoming::Message(value)),
            Err(err) => Ok(Incoming::Dropped(err)),
        }
    }
}
