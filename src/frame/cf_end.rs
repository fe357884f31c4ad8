//! Contention-free end (CF-End) control frame overlay.
//!
//! The shortest member of the control family and the cleanest example
//! of the overlay pattern: two codec fields and two address slots over
//! a 16-byte buffer.
//!
//! ```text
//! ┌───────────────┬──────────┬──────────────────┬──────────────────┐
//! │ Frame control │ Duration │ Receiver address │ BSS identifier   │
//! │ 2 bytes       │ 2 bytes  │ 6 bytes          │ 6 bytes          │
//! └───────────────┴──────────┴──────────────────┴──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use macframe::fields::MacAddr;
//! use macframe::frame::{CfEndFrame, FrameOverlay};
//!
//! let ra: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
//! let bssid: MacAddr = "11:22:33:44:55:66".parse().unwrap();
//!
//! let mut frame = CfEndFrame::new(ra, bssid);
//! frame.resync();
//!
//! assert_eq!(frame.as_bytes().unwrap().len(), CfEndFrame::FRAME_SIZE);
//! ```

use bytes::Bytes;

use super::{address_offset, FrameOverlay, DURATION_OFFSET, FRAME_CONTROL_OFFSET, MIN_OVERLAY_LEN};
use crate::buffer::BufferView;
use crate::error::{FrameError, Result};
use crate::fields::{
    DurationId, FrameControl, FrameKind, MacAddr, ADDRESS_LEN, DURATION_LEN, FRAME_CONTROL_LEN,
};

/// CF-End control frame.
///
/// Holds typed field values plus an optional backing view. Field
/// setters touch only the values; the bytes catch up on the next
/// [`resync`](FrameOverlay::resync). A frame built with
/// [`new`](Self::new) carries no buffer until its first resync.
#[derive(Debug, Clone)]
pub struct CfEndFrame {
    frame_control: FrameControl,
    duration: DurationId,
    receiver: MacAddr,
    bssid: MacAddr,
    view: Option<BufferView>,
}

impl CfEndFrame {
    /// Total frame length: frame control + duration + two addresses.
    pub const FRAME_SIZE: usize = FRAME_CONTROL_LEN + DURATION_LEN + 2 * ADDRESS_LEN;

    /// Parse a frame out of existing bytes.
    ///
    /// Reads every field at its fixed offset, then truncates the view's
    /// logical length to [`FRAME_SIZE`](Self::FRAME_SIZE), dropping any
    /// trailing bytes that belong to a larger capture. The frame-control
    /// kind is not validated here; see
    /// [`ControlFrame::from_view`](super::ControlFrame::from_view) for
    /// dispatch.
    ///
    /// # Errors
    ///
    /// [`FrameError::BufferTooShort`] when the view cannot hold even the
    /// frame-control and duration fields; [`FrameError::OutOfBounds`]
    /// when it holds those but not both address slots.
    pub fn from_view(mut view: BufferView) -> Result<Self> {
        if view.len() < MIN_OVERLAY_LEN {
            return Err(FrameError::BufferTooShort {
                required: MIN_OVERLAY_LEN,
                actual: view.len(),
            });
        }

        let fc = view.slice(FRAME_CONTROL_OFFSET, FRAME_CONTROL_LEN)?;
        let frame_control = FrameControl::from_wire(&[fc[0], fc[1]]);

        let dur = view.slice(DURATION_OFFSET, DURATION_LEN)?;
        let duration = DurationId::from_wire(&[dur[0], dur[1]]);

        let receiver = MacAddr::from_wire(view.slice(address_offset(0), ADDRESS_LEN)?)?;
        let bssid = MacAddr::from_wire(view.slice(address_offset(1), ADDRESS_LEN)?)?;

        view.set_len(Self::FRAME_SIZE)?;

        Ok(Self {
            frame_control,
            duration,
            receiver,
            bssid,
            view: Some(view),
        })
    }

    /// Build a frame from field values, no buffer yet.
    ///
    /// The frame control is fixed to [`FrameKind::CfEnd`] and the
    /// duration defaults to zero. Nothing is allocated until the first
    /// [`resync`](FrameOverlay::resync).
    pub fn new(receiver: MacAddr, bssid: MacAddr) -> Self {
        Self {
            frame_control: FrameControl::new(FrameKind::CfEnd),
            duration: DurationId::default(),
            receiver,
            bssid,
            view: None,
        }
    }

    /// The frame-control field.
    pub fn frame_control(&self) -> FrameControl {
        self.frame_control
    }

    /// Replace the frame-control field. Bytes update on the next resync.
    pub fn set_frame_control(&mut self, frame_control: FrameControl) {
        self.frame_control = frame_control;
    }

    /// The duration/ID field.
    pub fn duration(&self) -> DurationId {
        self.duration
    }

    /// Replace the duration/ID field. Bytes update on the next resync.
    pub fn set_duration(&mut self, duration: DurationId) {
        self.duration = duration;
    }

    /// The receiver address (RA).
    pub fn receiver_address(&self) -> MacAddr {
        self.receiver
    }

    /// Replace the receiver address. Bytes update on the next resync.
    pub fn set_receiver_address(&mut self, receiver: MacAddr) {
        self.receiver = receiver;
    }

    /// The BSS identifier (MAC address of the access point).
    pub fn bssid(&self) -> MacAddr {
        self.bssid
    }

    /// Replace the BSS identifier. Bytes update on the next resync.
    pub fn set_bssid(&mut self, bssid: MacAddr) {
        self.bssid = bssid;
    }

    /// The synced wire image, or `None` before the first resync of a
    /// built frame.
    ///
    /// Bytes lag behind field setters until the next resync.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.view.as_ref().map(BufferView::as_bytes)
    }

    /// Resync and copy the wire image out as `Bytes`.
    pub fn to_bytes(&mut self) -> Bytes {
        self.resync();
        let view = self.view.as_ref().expect("resync binds a view");
        Bytes::copy_from_slice(view.as_bytes())
    }
}

impl FrameOverlay for CfEndFrame {
    fn frame_size(&self) -> usize {
        Self::FRAME_SIZE
    }

    fn resync(&mut self) {
        // Self-heal: replace the view when it is absent or cannot hold
        // the whole frame. Never reuses a shorter buffer in place, so
        // bytes already written for this frame are never truncated.
        let needs_fresh = match &self.view {
            Some(view) => view.len() < Self::FRAME_SIZE,
            None => true,
        };
        if needs_fresh {
            tracing::debug!(size = Self::FRAME_SIZE, "allocating fresh backing view");
            self.view = Some(BufferView::zeroed(Self::FRAME_SIZE));
        }

        let view = self.view.as_mut().expect("view bound above");
        view.write(FRAME_CONTROL_OFFSET, &self.frame_control.to_wire())
            .expect("view holds the whole frame");
        view.write(DURATION_OFFSET, &self.duration.to_wire())
            .expect("view holds the whole frame");
        view.write(address_offset(0), &self.receiver.octets())
            .expect("view holds the whole frame");
        view.write(address_offset(1), &self.bssid.octets())
            .expect("view holds the whole frame");
        view.set_len(Self::FRAME_SIZE)
            .expect("view holds the whole frame");
    }

    fn describe_addresses(&self) -> String {
        format!("RA {} BSSID {}", self.receiver, self.bssid)
    }
}
