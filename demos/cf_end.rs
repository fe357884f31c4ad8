//! CF-End frame - build, serialize, and re-parse example.
//!
//! Demonstrates:
//! - Building a frame from addresses alone (no buffer yet)
//! - Serializing via resync
//! - Re-parsing the wire bytes, including a padded capture
//!
//! Run with `cargo run --example cf_end`.

use macframe::fields::{DurationId, MacAddr};
use macframe::frame::{CfEndFrame, FrameOverlay};
use macframe::BufferView;

fn main() {
    let ra: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
    let bssid: MacAddr = "11:22:33:44:55:66".parse().unwrap();

    // Build path: values first, bytes on demand.
    let mut frame = CfEndFrame::new(ra, bssid);
    frame.set_duration(DurationId(0x2F00));
    let wire = frame.to_bytes();

    println!("{}", frame.describe_addresses());
    println!("wire ({} bytes): {:02X?}", wire.len(), &wire[..]);

    // Parse path: wrap a capture with trailing bytes, truncated on parse.
    let mut capture = wire.to_vec();
    capture.extend_from_slice(&[0xFF; 8]);
    let parsed = CfEndFrame::from_view(BufferView::from_slice(&capture)).unwrap();

    println!(
        "parsed RA {} BSSID {} duration {}",
        parsed.receiver_address(),
        parsed.bssid(),
        parsed.duration().value()
    );
}
