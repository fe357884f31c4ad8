//! Duration/ID field encoding and decoding.
//!
//! A 2-byte little-endian field following the frame control. In most
//! frames it carries a NAV duration in microseconds; PS-Poll frames
//! reuse it as an association ID. This codec carries the raw value and
//! leaves interpretation to the frame layer.

/// Duration/ID field width in bytes (fixed, exactly 2).
pub const DURATION_LEN: usize = 2;

/// Raw duration/ID field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationId(pub u16);

impl DurationId {
    /// Decode from wire bytes (little-endian).
    pub fn from_wire(bytes: &[u8; DURATION_LEN]) -> Self {
        Self(u16::from_le_bytes(*bytes))
    }

    /// Encode to wire bytes (little-endian).
    pub fn to_wire(&self) -> [u8; DURATION_LEN] {
        self.0.to_le_bytes()
    }

    /// The raw field value.
    #[inline]
    pub fn value(&self) -> u16 {
        self.0
    }
}
