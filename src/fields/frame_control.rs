//! Frame-control field encoding and decoding.
//!
//! Implements the 2-byte 802.11 frame-control field:
//! ```text
//! byte 0                          byte 1
//! ┌─────────┬──────┬─────────┐   ┌───────────────┐
//! │ Version │ Type │ Subtype │   │ Control flags │
//! │ bits 0-1│ 2-3  │ 4-7     │   │ 8 bits        │
//! └─────────┴──────┴─────────┘   └───────────────┘
//! ```
//!
//! The field travels little-endian on the wire, per IEEE 802.11.

/// Frame-control field width in bytes (fixed, exactly 2).
pub const FRAME_CONTROL_LEN: usize = 2;

/// Frame type value for management frames.
pub const TYPE_MANAGEMENT: u8 = 0b00;
/// Frame type value for control frames.
pub const TYPE_CONTROL: u8 = 0b01;
/// Frame type value for data frames.
pub const TYPE_DATA: u8 = 0b10;

/// Control-flag bit constants for the second frame-control byte.
pub mod flags {
    /// Frame is addressed to the distribution system.
    pub const TO_DS: u8 = 0b0000_0001;
    /// Frame exits the distribution system.
    pub const FROM_DS: u8 = 0b0000_0010;
    /// More fragments of this MSDU follow.
    pub const MORE_FRAGMENTS: u8 = 0b0000_0100;
    /// Frame is a retransmission.
    pub const RETRY: u8 = 0b0000_1000;
    /// Sender is in power-save mode after this frame.
    pub const POWER_MANAGEMENT: u8 = 0b0001_0000;
    /// Sender has more buffered frames for the receiver.
    pub const MORE_DATA: u8 = 0b0010_0000;
    /// Frame body is encrypted.
    pub const PROTECTED: u8 = 0b0100_0000;
    /// Frames must be processed in strict order.
    pub const ORDER: u8 = 0b1000_0000;

    /// Check if a specific flag is set.
    #[inline]
    pub fn has_flag(flags: u8, flag: u8) -> bool {
        flags & flag != 0
    }
}

/// Frame type + subtype, the identity half of the frame-control field.
///
/// Covers the control family this library overlays; every other
/// type/subtype combination decodes to `Reserved` so that parsing a
/// frame-control field is total - overlays never reject a subtype,
/// dispatch does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Control: power-save poll.
    PsPoll,
    /// Control: request to send.
    Rts,
    /// Control: clear to send.
    Cts,
    /// Control: acknowledgement.
    Ack,
    /// Control: contention-free period end.
    CfEnd,
    /// Control: CF-End combined with CF-Ack.
    CfEndAck,
    /// Any type/subtype pair this library does not name.
    Reserved {
        /// Raw 2-bit frame type.
        frame_type: u8,
        /// Raw 4-bit subtype.
        sub_type: u8,
    },
}

impl FrameKind {
    /// Build a kind from raw type and subtype bits.
    pub fn from_type_subtype(frame_type: u8, sub_type: u8) -> Self {
        match (frame_type, sub_type) {
            (TYPE_CONTROL, 0b1010) => FrameKind::PsPoll,
            (TYPE_CONTROL, 0b1011) => FrameKind::Rts,
            (TYPE_CONTROL, 0b1100) => FrameKind::Cts,
            (TYPE_CONTROL, 0b1101) => FrameKind::Ack,
            (TYPE_CONTROL, 0b1110) => FrameKind::CfEnd,
            (TYPE_CONTROL, 0b1111) => FrameKind::CfEndAck,
            _ => FrameKind::Reserved {
                frame_type: frame_type & 0b11,
                sub_type: sub_type & 0b1111,
            },
        }
    }

    /// The 2-bit frame type.
    pub fn frame_type(&self) -> u8 {
        match self {
            FrameKind::PsPoll
            | FrameKind::Rts
            | FrameKind::Cts
            | FrameKind::Ack
            | FrameKind::CfEnd
            | FrameKind::CfEndAck => TYPE_CONTROL,
            FrameKind::Reserved { frame_type, .. } => *frame_type,
        }
    }

    /// The 4-bit subtype.
    pub fn sub_type(&self) -> u8 {
        match self {
            FrameKind::PsPoll => 0b1010,
            FrameKind::Rts => 0b1011,
            FrameKind::Cts => 0b1100,
            FrameKind::Ack => 0b1101,
            FrameKind::CfEnd => 0b1110,
            FrameKind::CfEndAck => 0b1111,
            FrameKind::Reserved { sub_type, .. } => *sub_type,
        }
    }
}

/// Decoded frame-control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameControl {
    /// Protocol version (2 bits, always 0 for current 802.11).
    pub version: u8,
    /// Frame type + subtype.
    pub kind: FrameKind,
    /// Control flags byte (see the `flags` module).
    pub flags: u8,
}

impl FrameControl {
    /// Create a frame-control field for `kind`, version 0, no flags set.
    pub fn new(kind: FrameKind) -> Self {
        Self {
            version: 0,
            kind,
            flags: 0,
        }
    }

    /// Decode from the raw u16 value.
    ///
    /// Total: unknown type/subtype pairs land in [`FrameKind::Reserved`].
    pub fn decode(raw: u16) -> Self {
        let b0 = (raw & 0xFF) as u8;
        let b1 = (raw >> 8) as u8;
        Self {
            version: b0 & 0b11,
            kind: FrameKind::from_type_subtype((b0 >> 2) & 0b11, (b0 >> 4) & 0b1111),
            flags: b1,
        }
    }

    /// Encode to the raw u16 value.
    pub fn encode(&self) -> u16 {
        let b0 = (self.version & 0b11)
            | (self.kind.frame_type() << 2)
            | (self.kind.sub_type() << 4);
        u16::from(b0) | (u16::from(self.flags) << 8)
    }

    /// Decode from wire bytes (little-endian).
    pub fn from_wire(bytes: &[u8; FRAME_CONTROL_LEN]) -> Self {
        Self::decode(u16::from_le_bytes(*bytes))
    }

    /// Encode to wire bytes (little-endian).
    pub fn to_wire(&self) -> [u8; FRAME_CONTROL_LEN] {
        self.encode().to_le_bytes()
    }

    /// Check if the retry flag is set.
    #[inline]
    pub fn is_retry(&self) -> bool {
        flags::has_flag(self.flags, flags::RETRY)
    }

    /// Check if the protected flag is set.
    #[inline]
    pub fn is_protected(&self) -> bool {
        flags::has_flag(self.flags, flags::PROTECTED)
    }

    /// Check if either distribution-system flag is set.
    #[inline]
    pub fn is_wds(&self) -> bool {
        flags::has_flag(self.flags, flags::TO_DS) && flags::has_flag(self.flags, flags::FROM_DS)
    }
}
