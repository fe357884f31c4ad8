//! Integration tests for macframe.
//!
//! Exercise the overlay contract end to end: build, resync, re-parse.

use macframe::fields::{DurationId, FrameKind, MacAddr};
use macframe::frame::{address_offset, CfEndFrame, ControlFrame, FrameOverlay, MIN_OVERLAY_LEN};
use macframe::{BufferView, FrameError};

fn addrs() -> (MacAddr, MacAddr) {
    (
        "AA:BB:CC:DD:EE:FF".parse().unwrap(),
        "11:22:33:44:55:66".parse().unwrap(),
    )
}

/// Build from values, serialize, parse back: every field survives.
#[test]
fn test_build_parse_round_trip() {
    let (ra, bssid) = addrs();

    let mut built = CfEndFrame::new(ra, bssid);
    built.set_duration(DurationId(0x2F00));
    let wire = built.to_bytes();

    let parsed = CfEndFrame::from_view(BufferView::from_slice(&wire)).unwrap();
    assert_eq!(parsed.receiver_address(), ra);
    assert_eq!(parsed.bssid(), bssid);
    assert_eq!(parsed.duration(), DurationId(0x2F00));
    assert_eq!(parsed.frame_control().kind, FrameKind::CfEnd);
}

/// Two resyncs with nothing changed give byte-identical buffers.
#[test]
fn test_resync_idempotence() {
    let (ra, bssid) = addrs();
    let mut frame = CfEndFrame::new(ra, bssid);

    let first = frame.to_bytes();
    let second = frame.to_bytes();
    assert_eq!(first, second);
}

/// Frame size is the fixed constant and the buffer honors it exactly.
#[test]
fn test_size_invariant() {
    let (ra, bssid) = addrs();
    let mut frame = CfEndFrame::new(ra, bssid);

    assert_eq!(frame.frame_size(), 16);
    assert_eq!(frame.frame_size(), MIN_OVERLAY_LEN + 2 * 6);

    frame.resync();
    assert_eq!(frame.as_bytes().unwrap().len(), frame.frame_size());
}

/// Golden wire image for the documented address pair.
#[test]
fn test_known_wire_image() {
    let (ra, bssid) = addrs();
    let mut frame = CfEndFrame::new(ra, bssid);
    let wire = frame.to_bytes();

    // CF-End tag: version 0, control type, subtype 1110, no flags.
    assert_eq!(wire[0], 0xE4);
    assert_eq!(wire[1], 0x00);
    assert_eq!(&wire[address_offset(0)..address_offset(0) + 6], &ra.octets());
    assert_eq!(
        &wire[address_offset(1)..address_offset(1) + 6],
        &bssid.octets()
    );
    assert_eq!(
        frame.describe_addresses(),
        "RA AA:BB:CC:DD:EE:FF BSSID 11:22:33:44:55:66"
    );
}

/// Views below the header+duration minimum are rejected outright.
#[test]
fn test_bounds_rejection_below_minimum() {
    for len in 0..MIN_OVERLAY_LEN {
        let err = CfEndFrame::from_view(BufferView::from_slice(&vec![0u8; len])).unwrap_err();
        assert_eq!(
            err,
            FrameError::BufferTooShort {
                required: MIN_OVERLAY_LEN,
                actual: len
            },
            "len {}",
            len
        );
    }
}

/// Views holding the header but not both addresses fail on the slice.
#[test]
fn test_bounds_rejection_partial_addresses() {
    for len in MIN_OVERLAY_LEN..CfEndFrame::FRAME_SIZE {
        let err = CfEndFrame::from_view(BufferView::from_slice(&vec![0u8; len])).unwrap_err();
        assert!(
            matches!(err, FrameError::OutOfBounds { .. }),
            "len {}: {:?}",
            len,
            err
        );
    }
}

/// An oversized view parses and is truncated to the exact frame size.
#[test]
fn test_oversized_view_truncated() {
    let (ra, bssid) = addrs();
    let mut wire = CfEndFrame::new(ra, bssid).to_bytes().to_vec();
    wire.extend_from_slice(&[0xFF; 32]); // rest of a larger capture

    let parsed = CfEndFrame::from_view(BufferView::from_slice(&wire)).unwrap();
    assert_eq!(parsed.as_bytes().unwrap().len(), CfEndFrame::FRAME_SIZE);
    assert_eq!(parsed.receiver_address(), ra);
}

/// Mutating a parsed frame and resyncing rewrites the wire image.
#[test]
fn test_mutate_parsed_frame() {
    let (ra, bssid) = addrs();
    let wire = CfEndFrame::new(ra, bssid).to_bytes();

    let mut parsed = CfEndFrame::from_view(BufferView::from_slice(&wire)).unwrap();
    let new_ra = MacAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
    parsed.set_receiver_address(new_ra);

    // Inconsistency window: values changed, bytes have not.
    assert_eq!(
        &parsed.as_bytes().unwrap()[address_offset(0)..address_offset(0) + 6],
        &ra.octets()
    );

    parsed.resync();
    assert_eq!(
        &parsed.as_bytes().unwrap()[address_offset(0)..address_offset(0) + 6],
        &new_ra.octets()
    );
}

/// The closed dispatch layer routes CF-End and rejects other kinds.
#[test]
fn test_control_frame_dispatch() {
    let (ra, bssid) = addrs();
    let wire = CfEndFrame::new(ra, bssid).to_bytes();

    let mut parsed = ControlFrame::from_view(BufferView::from_slice(&wire)).unwrap();
    assert_eq!(parsed.frame_size(), CfEndFrame::FRAME_SIZE);
    assert_eq!(
        parsed.describe_addresses(),
        "RA AA:BB:CC:DD:EE:FF BSSID 11:22:33:44:55:66"
    );
    parsed.resync();

    // A CTS frame has no overlay variant here.
    let mut cts = vec![0xC4, 0x00];
    cts.extend_from_slice(&[0u8; 14]);
    let err = ControlFrame::from_view(BufferView::from_slice(&cts)).unwrap_err();
    assert_eq!(err, FrameError::UnsupportedKind(FrameKind::Cts));
}
