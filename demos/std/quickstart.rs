//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of lasp-sbd:
//! - Decode a raw SBD attachment payload
//! - Inspect the scaled telemetry values
//! - Rebuild a wire frame from a record
//!
//! The payload would normally come from the mail-fetching application; here
//! it is assembled by hand.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use lasp_sbd::core::FRAME_MIN_LEN;
use lasp_sbd::protocol::frame::{decode, encode};

fn main() {
    println!("=== lasp-sbd Quickstart ===\n");

    // ======================================================================
    // 1. Assemble a raw frame (the flight encoder's job)
    // ======================================================================
    println!("1. Building a raw {FRAME_MIN_LEN}-byte frame");

    let mut payload = [0u8; FRAME_MIN_LEN];
    payload[0..4].copy_from_slice(&130_015_000u32.to_be_bytes()); // 40.0150°N
    payload[4..8].copy_from_slice(&74_729_500u32.to_be_bytes()); // 105.2705°W
    payload[8..10].copy_from_slice(&27_430u16.to_be_bytes()); // altitude, m
    payload[10] = 1; // fix quality
    payload[11..15].copy_from_slice(&130_014_250u32.to_be_bytes());
    payload[15..19].copy_from_slice(&74_730_100u32.to_be_bytes());
    payload[19] = 121; // 21 °C
    payload[20] = 82; // 8.2 V
    payload[21..23].copy_from_slice(&0x0200u16.to_be_bytes()); // frame 512

    // ======================================================================
    // 2. Decode it into engineering values
    // ======================================================================
    println!("2. Decoding the payload\n");

    match decode(&payload) {
        Ok(record) => {
            println!(
                "   Modem fix:  {:.4}°, {:.4}°, {} m (quality {})",
                record.modem.latitude,
                record.modem.longitude,
                record.modem.altitude,
                record.modem.fix_quality
            );
            println!(
                "   Sensor fix: {:.4}°, {:.4}°",
                record.sensor.latitude, record.sensor.longitude
            );
            println!(
                "   Housekeeping: {:.1} °C, {:.1} V, frame #{}",
                record.housekeeping.internal_temp,
                record.housekeeping.battery_voltage,
                record.housekeeping.frame_number
            );
            println!(
                "   Auxiliary channels (raw): {:?}\n",
                &record.aux.values[..4]
            );

            // ==============================================================
            // 3. Rebuild the wire bytes from the record
            // ==============================================================
            println!("3. Re-encoding the record");

            let mut rebuilt = [0u8; FRAME_MIN_LEN];
            match encode(&record, &mut rebuilt) {
                Ok(len) => println!(
                    "   Wrote {len} bytes, identical to input: {}",
                    rebuilt == payload
                ),
                Err(e) => println!("   Encode error: {e}"),
            }
        }
        Err(e) => println!("   Decode error: {e}"),
    }
}
