//! # macframe
//!
//! Typed overlays for IEEE 802.11 link-layer frames.
//!
//! A frame is a set of named fields mapped onto fixed byte offsets in a
//! shared buffer. This crate supports both directions of that mapping:
//!
//! - **Parse**: wrap existing bytes in a [`buffer::BufferView`] and read
//!   typed fields out of their fixed offsets.
//! - **Build**: construct a frame from field values alone, then let
//!   `resync` allocate and fill the wire buffer on demand.
//!
//! Field setters never touch the buffer; the bytes catch up on the next
//! `resync`, which also self-heals an absent or undersized buffer. This
//! is a pure in-memory transform: no sockets, no timers, no checksums.
//!
//! ## Example
//!
//! ```
//! use macframe::fields::MacAddr;
//! use macframe::frame::{CfEndFrame, FrameOverlay};
//!
//! let ra: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
//! let bssid: MacAddr = "11:22:33:44:55:66".parse().unwrap();
//!
//! let mut frame = CfEndFrame::new(ra, bssid);
//! let wire = frame.to_bytes();
//! assert_eq!(wire.len(), 16);
//! assert_eq!(frame.describe_addresses(), "RA AA:BB:CC:DD:EE:FF BSSID 11:22:33:44:55:66");
//! ```

pub mod buffer;
pub mod error;
pub mod fields;
pub mod frame;

pub use buffer::BufferView;
pub use error::{FrameError, Result};
pub use frame::{CfEndFrame, ControlFrame, FrameOverlay};
