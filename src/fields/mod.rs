//! Field codecs - the fixed-width values frames are built from.
//!
//! Each codec owns its own wire convention (all three are
//! little-endian or raw octets); the frame layer only decides offsets.

mod duration;
mod frame_control;
mod mac;

pub use duration::{DurationId, DURATION_LEN};
pub use frame_control::{
    flags, FrameControl, FrameKind, FRAME_CONTROL_LEN, TYPE_CONTROL, TYPE_DATA, TYPE_MANAGEMENT,
};
pub use mac::{MacAddr, ADDRESS_LEN};
