//! Frame overlays - typed field views over wire buffers.
//!
//! Every frame in the 802.11 family shares the same leading layout:
//! frame control at offset 0, duration/ID right after, then a run of
//! fixed-width address slots. A subtype is a field list plus those
//! offsets; the overlay contract below is what all subtypes share.

mod cf_end;

pub use cf_end::CfEndFrame;

use crate::buffer::BufferView;
use crate::error::{FrameError, Result};
use crate::fields::{FrameControl, FrameKind, ADDRESS_LEN, DURATION_LEN, FRAME_CONTROL_LEN};

/// Byte offset of the frame-control field.
pub const FRAME_CONTROL_OFFSET: usize = 0;

/// Byte offset of the duration/ID field.
pub const DURATION_OFFSET: usize = FRAME_CONTROL_LEN;

/// Minimum bytes any overlay needs before its fields can be read at all.
pub const MIN_OVERLAY_LEN: usize = FRAME_CONTROL_LEN + DURATION_LEN;

/// Byte offset of address slot `n` (slots follow the duration field).
#[inline]
pub const fn address_offset(n: usize) -> usize {
    MIN_OVERLAY_LEN + n * ADDRESS_LEN
}

/// Contract shared by every frame subtype overlay.
pub trait FrameOverlay {
    /// Total frame length in bytes, a pure function of the field widths.
    ///
    /// Independent of buffer state; fixed-length subtypes return a
    /// constant, variable-length ones derive it from a runtime count.
    fn frame_size(&self) -> usize;

    /// Write the current field values into the backing view.
    ///
    /// Self-healing: if the view is absent or cannot hold
    /// [`frame_size`](Self::frame_size) bytes, a fresh zero-initialized
    /// buffer of exactly that size replaces it. Afterwards the view's
    /// logical length equals `frame_size` and its bytes match the field
    /// values observed at the call. Idempotent.
    fn resync(&mut self);

    /// Human-readable summary of the frame's address fields.
    ///
    /// Diagnostics only; never touches the buffer.
    fn describe_addresses(&self) -> String;
}

/// Closed set of control-frame overlays.
///
/// One variant per subtype this library models. Adding a subtype means
/// a new overlay struct, a new variant, and its offsets - nothing else.
#[derive(Debug, Clone)]
pub enum ControlFrame {
    /// Contention-free period end.
    CfEnd(CfEndFrame),
}

impl ControlFrame {
    /// Parse a control frame, dispatching on the frame-control kind.
    ///
    /// Kinds without an overlay variant yield
    /// [`FrameError::UnsupportedKind`]. The individual overlays perform
    /// no kind validation of their own; dispatch is the only place that
    /// rejects a subtype.
    pub fn from_view(view: BufferView) -> Result<Self> {
        let raw = view.slice(FRAME_CONTROL_OFFSET, FRAME_CONTROL_LEN)?;
        let control = FrameControl::from_wire(&[raw[0], raw[1]]);
        match control.kind {
            FrameKind::CfEnd => Ok(ControlFrame::CfEnd(CfEndFrame::from_view(view)?)),
            kind => Err(FrameError::UnsupportedKind(kind)),
        }
    }

    /// The decoded frame-control field.
    pub fn frame_control(&self) -> FrameControl {
        match self {
            ControlFrame::CfEnd(frame) => frame.frame_control(),
        }
    }
}

impl FrameOverlay for ControlFrame {
    fn frame_size(&self) -> usize {
        match self {
            ControlFrame::CfEnd(frame) => frame.frame_size(),
        }
    }

    fn resync(&mut self) {
        match self {
            ControlFrame::CfEnd(frame) => frame.resync(),
        }
    }

    fn describe_addresses(&self) -> String {
        match self {
            ControlFrame::CfEnd(frame) => frame.describe_addresses(),
        }
    }
}
