//! Decoder integration scenarios: full-frame vectors, truncation policy,
//! and the auxiliary-block layout, including its overlap with the frame
//! counter.
mod helpers;

use helpers::FrameBuilder;
use lasp_sbd::core::{AUX_BLOCK_OFFSET, AUX_FIELD_COUNT, FRAME_MIN_LEN};
use lasp_sbd::error::DecodeError;
use lasp_sbd::protocol::frame::decode;

const EPS: f64 = 1e-9;

#[test]
/// A representative fix over Boulder, CO decodes to the expected
/// engineering values.
fn decode_representative_fix() {
    let frame = FrameBuilder::new()
        .modem_latitude_raw(130_015_000) // 40.0150°N
        .modem_longitude_raw(74_729_500) // 105.2705°W
        .modem_altitude(1_624)
        .modem_fix_quality(1)
        .sensor_latitude_raw(130_014_250)
        .sensor_longitude_raw(74_730_100)
        .internal_temp_raw(121) // 21 °C
        .battery_voltage_raw(82) // 8.2 V
        .frame_number(0x1500)
        .build();

    let record = decode(&frame).unwrap();
    assert!((record.modem.latitude - 40.0150).abs() < EPS);
    assert!((record.modem.longitude - -105.2705).abs() < EPS);
    assert_eq!(record.modem.altitude, 1_624);
    assert_eq!(record.modem.fix_quality, 1);
    assert!((record.sensor.latitude - 40.01425).abs() < EPS);
    assert!((record.sensor.longitude - -105.2699).abs() < EPS);
    assert!((record.housekeeping.internal_temp - 21.0).abs() < EPS);
    assert!((record.housekeeping.battery_voltage - 8.2).abs() < EPS);
    assert_eq!(record.housekeeping.frame_number, 0x1500);
}

#[test]
/// Decoding is deterministic: the same bytes always produce the same record.
fn decode_is_deterministic() {
    let frame = FrameBuilder::new()
        .modem_latitude_raw(123_456_789)
        .frame_number(42 << 8)
        .build();
    assert_eq!(decode(&frame).unwrap(), decode(&frame).unwrap());
}

#[test]
/// Every payload shorter than the fixed layout is rejected whole, with the
/// actual length reported.
fn every_short_length_is_truncated() {
    let frame = [0u8; FRAME_MIN_LEN];
    for len in 0..FRAME_MIN_LEN {
        assert_eq!(
            decode(&frame[..len]),
            Err(DecodeError::Truncated {
                required: FRAME_MIN_LEN,
                available: len,
            }),
            "length {len} must not decode"
        );
    }
}

#[test]
/// Auxiliary channels are read at their documented widths: sixteen words,
/// then the mixed 8/16-bit tail.
fn aux_channels_follow_width_table() {
    let mut builder = FrameBuilder::new();
    // Words 0..16 at offsets 22, 24, .. 52: give word i the value 0x0100 + i.
    for i in 0..16 {
        builder = builder
            .byte(AUX_BLOCK_OFFSET + 2 * i, 0x01)
            .byte(AUX_BLOCK_OFFSET + 2 * i + 1, i as u8);
    }
    // Mixed tail at offsets 54..68: u8 u8 u8 u16 u8 u8 u16 u8 u8 u16 u8.
    let tail: [u8; 14] = [
        0xA0, 0xA1, 0xA2, 0x0B, 0x0C, 0xA3, 0xA4, 0x0D, 0x0E, 0xA5, 0xA6, 0x0F, 0x10, 0xA7,
    ];
    for (i, byte) in tail.iter().enumerate() {
        builder = builder.byte(54 + i, *byte);
    }

    let record = decode(&builder.build()).unwrap();
    for i in 0..16 {
        assert_eq!(record.aux.value(i), Some(0x0100 + i as u16));
    }
    assert_eq!(record.aux.value(16), Some(0xA0));
    assert_eq!(record.aux.value(17), Some(0xA1));
    assert_eq!(record.aux.value(18), Some(0xA2));
    assert_eq!(record.aux.value(19), Some(0x0B0C));
    assert_eq!(record.aux.value(20), Some(0xA3));
    assert_eq!(record.aux.value(21), Some(0xA4));
    assert_eq!(record.aux.value(22), Some(0x0D0E));
    assert_eq!(record.aux.value(23), Some(0xA5));
    assert_eq!(record.aux.value(24), Some(0xA6));
    assert_eq!(record.aux.value(25), Some(0x0F10));
    assert_eq!(record.aux.value(26), Some(0xA7));
    assert_eq!(AUX_FIELD_COUNT, 27);
}

#[test]
/// HARDWARE ICD CHECK: the auxiliary block starts at byte offset 22, one
/// byte before the named block ends, so the frame counter's low byte and
/// the first auxiliary word's high byte are the SAME octet on the wire.
/// This reproduces the deployed flight encoder literally. If the true
/// layout turns out to be offset 23 (no overlap), fix `AUX_BLOCK_OFFSET`
/// and delete this test.
fn aux_block_shares_frame_counter_low_byte() {
    let frame = FrameBuilder::new()
        .frame_number(0x1234)
        .byte(23, 0x56)
        .build();

    let record = decode(&frame).unwrap();
    assert_eq!(record.housekeeping.frame_number, 0x1234);
    // Aux word 0 spans bytes 22..24: high byte 0x34 is shared with the
    // counter, low byte 0x56 is its own.
    assert_eq!(record.aux.value(0), Some(0x3456));
    assert_eq!(
        record.housekeeping.frame_number & 0x00FF,
        record.aux.value(0).unwrap() >> 8
    );
}

#[cfg(feature = "serde")]
#[test]
/// Records survive a JSON round trip for downstream machine-readable
/// reporting.
fn record_round_trips_through_json() {
    let frame = FrameBuilder::new()
        .modem_altitude(1_624)
        .battery_voltage_raw(82)
        .build();
    let record = decode(&frame).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"altitude\":1624"));
    let restored: lasp_sbd::protocol::telemetry::TelemetryRecord =
        serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}
