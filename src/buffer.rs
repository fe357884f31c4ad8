//! Bounds-checked byte buffer view.
//!
//! Uses `bytes::BytesMut` for the backing storage. A `BufferView` is an
//! owned window with a logical length that is independent of capacity:
//! a frame overlay may claim fewer meaningful bytes than the buffer
//! holds (e.g. a 16-byte control frame parsed out of a larger capture).

use bytes::{Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Owned, bounds-checked window over a mutable byte buffer.
///
/// Reads (`slice`) are checked against the logical length; writes are
/// checked against capacity, so a frame can be serialized into spare
/// capacity before `set_len` exposes it.
#[derive(Debug, Clone)]
pub struct BufferView {
    /// Backing storage.
    data: BytesMut,
    /// Number of meaningful bytes, always <= data.len().
    len: usize,
}

impl BufferView {
    /// Wrap existing bytes; the logical length starts at full capacity.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let data = BytesMut::from(bytes);
        let len = data.len();
        Self { data, len }
    }

    /// Wrap an existing `BytesMut`; the logical length starts at full capacity.
    pub fn from_bytes(data: BytesMut) -> Self {
        let len = data.len();
        Self { data, len }
    }

    /// Fresh zero-initialized view of exactly `n` bytes.
    pub fn zeroed(n: usize) -> Self {
        Self {
            data: BytesMut::zeroed(n),
            len: n,
        }
    }

    /// Bounds-checked read of `length` bytes starting at `offset`.
    ///
    /// The range must lie within the logical length.
    pub fn slice(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let end = offset.checked_add(length).ok_or(FrameError::OutOfBounds {
            offset,
            length,
            available: self.len,
        })?;
        if end > self.len {
            return Err(FrameError::OutOfBounds {
                offset,
                length,
                available: self.len,
            });
        }
        Ok(&self.data[offset..end])
    }

    /// Bounds-checked overwrite starting at `offset`.
    ///
    /// Writes are checked against capacity rather than the logical
    /// length, so a caller may fill bytes before exposing them with
    /// [`set_len`](Self::set_len).
    pub fn write(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let end = offset
            .checked_add(bytes.len())
            .ok_or(FrameError::OutOfBounds {
                offset,
                length: bytes.len(),
                available: self.capacity(),
            })?;
        if end > self.data.len() {
            return Err(FrameError::OutOfBounds {
                offset,
                length: bytes.len(),
                available: self.data.len(),
            });
        }
        self.data[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Set the logical length. Fails if `n` exceeds capacity.
    pub fn set_len(&mut self, n: usize) -> Result<()> {
        if n > self.data.len() {
            return Err(FrameError::OutOfBounds {
                offset: 0,
                length: n,
                available: self.data.len(),
            });
        }
        self.len = n;
        Ok(())
    }

    /// Number of meaningful bytes in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the view holds no meaningful bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total bytes of backing storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The logical window as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Consume the view, freezing the logical window into `Bytes`.
    pub fn into_bytes(mut self) -> Bytes {
        self.data.truncate(self.len);
        self.data.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_full_length() {
        let view = BufferView::from_slice(&[1, 2, 3, 4]);
        assert_eq!(view.len(), 4);
        assert_eq!(view.capacity(), 4);
        assert_eq!(view.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_bytes_full_length() {
        let mut data = BytesMut::with_capacity(8);
        data.extend_from_slice(&[7, 8, 9]);
        let view = BufferView::from_bytes(data);
        assert_eq!(view.len(), 3);
        assert_eq!(view.as_bytes(), &[7, 8, 9]);
    }

    #[test]
    fn test_zeroed() {
        let view = BufferView::zeroed(8);
        assert_eq!(view.len(), 8);
        assert!(view.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_slice_within_bounds() {
        let view = BufferView::from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(view.slice(1, 2).unwrap(), &[0xBB, 0xCC]);
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let view = BufferView::from_slice(&[1, 2, 3]);
        let err = view.slice(2, 2).unwrap_err();
        assert_eq!(
            err,
            FrameError::OutOfBounds {
                offset: 2,
                length: 2,
                available: 3
            }
        );
    }

    #[test]
    fn test_slice_respects_logical_length() {
        let mut view = BufferView::from_slice(&[1, 2, 3, 4]);
        view.set_len(2).unwrap();
        assert!(view.slice(0, 2).is_ok());
        assert!(view.slice(0, 3).is_err());
    }

    #[test]
    fn test_write_within_capacity() {
        let mut view = BufferView::zeroed(4);
        view.write(1, &[0xFF, 0xEE]).unwrap();
        assert_eq!(view.as_bytes(), &[0, 0xFF, 0xEE, 0]);
    }

    #[test]
    fn test_write_beyond_capacity_rejected() {
        let mut view = BufferView::zeroed(4);
        assert!(view.write(3, &[1, 2]).is_err());
    }

    #[test]
    fn test_write_past_logical_length_within_capacity() {
        // Writes target capacity, not the logical length.
        let mut view = BufferView::from_slice(&[1, 2, 3, 4]);
        view.set_len(2).unwrap();
        view.write(3, &[9]).unwrap();
        view.set_len(4).unwrap();
        assert_eq!(view.as_bytes(), &[1, 2, 3, 9]);
    }

    #[test]
    fn test_set_len_beyond_capacity_rejected() {
        let mut view = BufferView::zeroed(4);
        assert!(view.set_len(5).is_err());
    }

    #[test]
    fn test_into_bytes_truncates_to_logical_length() {
        let mut view = BufferView::from_slice(&[1, 2, 3, 4]);
        view.set_len(3).unwrap();
        assert_eq!(&view.into_bytes()[..], &[1, 2, 3]);
    }
}
