//! Native messaging host that splits one percent of a balance into three legs.
//!
//! The host reads length-prefixed JSON requests on stdin, computes one
//! percent of the requested balance with exact decimal arithmetic, splits it
//! into three legs that sum to it exactly, and answers on stdout.
//!
//! # Crate Structure
//!
//! - [`frame`] — 4-byte little-endian length prefix + UTF-8 JSON framing
//! - [`engine`] — Exact decimal one-percent calculation and leg split
//! - [`host`] — Request validation and the read/dispatch/write loop

/// Re-export frame types.
pub mod frame {
    pub use legsplit_frame::*;
}

/// Re-export engine types.
pub mod engine {
    pub use legsplit_engine::*;
}

pub mod host;
