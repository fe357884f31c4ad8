//! Hardware (MAC) address field.
//!
//! 6-byte link-layer identifier with the canonical colon-separated
//! textual form (`AA:BB:CC:DD:EE:FF`).

use std::fmt;
use std::str::FromStr;

use crate::error::{FrameError, Result};

/// Hardware address width in bytes (fixed, exactly 6).
pub const ADDRESS_LEN: usize = 6;

/// A 6-byte hardware address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; ADDRESS_LEN]);

impl MacAddr {
    /// Broadcast address FF:FF:FF:FF:FF:FF.
    pub const BROADCAST: Self = Self([0xFF; ADDRESS_LEN]);

    /// The raw octets.
    #[inline]
    pub fn octets(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Decode from a wire slice. Fails unless exactly 6 bytes long.
    pub fn from_wire(bytes: &[u8]) -> Result<Self> {
        let octets: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            FrameError::InvalidAddress(format!("expected {} bytes, got {}", ADDRESS_LEN, bytes.len()))
        })?;
        Ok(Self(octets))
    }

    /// Check if this is the broadcast address.
    #[inline]
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Check if the group bit is set.
    #[inline]
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut octets = [0u8; ADDRESS_LEN];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| FrameError::InvalidAddress(s.to_string()))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| FrameError::InvalidAddress(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(FrameError::InvalidAddress(s.to_string()));
        }
        Ok(Self(octets))
    }
}

impl From<[u8; ADDRESS_LEN]> for MacAddr {
    fn from(octets: [u8; ADDRESS_LEN]) -> Self {
        Self(octets)
    }
}
