//! Decoder and encoder for the LASP SBD telemetry frame.
//!
//! The frame is a single-shot, fixed big-endian layout: a named block of GPS
//! and housekeeping fields (bytes 0..=22), then an auxiliary block of 27 raw
//! channels at byte offset 22. Decoding is a pure sequential unpack with
//! independent scalar transforms per field; there is no session state and no
//! I/O, so [`decode`] may be called concurrently on independent buffers.
//!
//! # The shared byte
//!
//! The named block is 23 bytes long, yet the auxiliary block starts at
//! offset 22: the low byte of the frame counter and the high byte of the
//! first auxiliary word are the same octet on the wire. The deployed flight
//! encoder emits the block at this offset, so the overlap is reproduced
//! bit-exactly here instead of being "fixed". [`encode`] writes the
//! auxiliary block last, so the auxiliary value owns the shared byte in
//! generated frames. The integration tests flag the overlap so it can be
//! checked against the hardware ICD.
use crate::core::{
    AUX_BLOCK_OFFSET, AUX_FIELD_COUNT, AUX_FIELD_WIDTHS, BATT_COUNTS_PER_VOLT,
    COORD_COUNTS_PER_DEG, FRAME_MIN_LEN, FieldWidth, LAT_OFFSET_DEG, LON_OFFSET_DEG,
    TEMP_OFFSET_C,
};
use crate::error::{DecodeError, EncodeError};
use crate::infra::codec::bytes::{ByteReader, ByteWriter};
use crate::protocol::telemetry::{
    AuxiliaryBlock, Housekeeping, ModemFix, SensorFix, TelemetryRecord,
};

/// Decodes one SBD payload into a [`TelemetryRecord`].
///
/// # Parameters
/// * `payload` – raw attachment bytes, borrowed for the duration of the call
///
/// # Return value
/// The fully populated record, or [`DecodeError::Truncated`] when the
/// payload cannot cover the fixed layout. No partial record is ever
/// produced. Geographic plausibility of the scaled coordinates is not
/// checked; only structural sufficiency of the buffer is.
pub fn decode(payload: &[u8]) -> Result<TelemetryRecord, DecodeError> {
    // One up-front check keeps the per-field reads infallible in practice.
    if payload.len() < FRAME_MIN_LEN {
        return Err(DecodeError::Truncated {
            required: FRAME_MIN_LEN,
            available: payload.len(),
        });
    }

    let mut reader = ByteReader::new(payload);

    let modem = ModemFix {
        latitude: scale_coordinate(reader.read_u32()?, LAT_OFFSET_DEG),
        longitude: scale_coordinate(reader.read_u32()?, LON_OFFSET_DEG),
        altitude: reader.read_u16()?,
        fix_quality: reader.read_u8()?,
    };

    let sensor = SensorFix {
        latitude: scale_coordinate(reader.read_u32()?, LAT_OFFSET_DEG),
        longitude: scale_coordinate(reader.read_u32()?, LON_OFFSET_DEG),
    };

    let housekeeping = Housekeeping {
        internal_temp: reader.read_u8()? as f64 + TEMP_OFFSET_C,
        battery_voltage: reader.read_u8()? as f64 / BATT_COUNTS_PER_VOLT,
        frame_number: reader.read_u16()?,
    };

    // The auxiliary block re-reads the frame counter's low byte.
    reader.seek(AUX_BLOCK_OFFSET)?;
    let mut values = [0u16; AUX_FIELD_COUNT];
    for (value, width) in values.iter_mut().zip(AUX_FIELD_WIDTHS.iter()) {
        *value = match width {
            FieldWidth::U8 => reader.read_u8()? as u16,
            FieldWidth::U16 => reader.read_u16()?,
        };
    }

    Ok(TelemetryRecord {
        modem,
        sensor,
        housekeeping,
        aux: AuxiliaryBlock { values },
    })
}

/// Rebuilds the wire representation of a [`TelemetryRecord`].
///
/// Each scalar transform of [`decode`] is inverted (offset removed, scaled
/// back to raw counts, rounded to the nearest count). The flight system
/// never consumes ground-built frames; this exists for test-frame
/// generation and for validating the decoder against itself.
///
/// # Parameters
/// * `record` – record to serialize
/// * `buffer` – output buffer, at least [`FRAME_MIN_LEN`] bytes
///
/// # Return value
/// Number of bytes written into the buffer.
pub fn encode(record: &TelemetryRecord, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    if buffer.len() < FRAME_MIN_LEN {
        return Err(EncodeError::BufferTooSmall {
            required: FRAME_MIN_LEN,
            available: buffer.len(),
        });
    }

    let mut writer = ByteWriter::new(buffer);

    writer.write_u32(unscale_coordinate(record.modem.latitude, LAT_OFFSET_DEG))?;
    writer.write_u32(unscale_coordinate(record.modem.longitude, LON_OFFSET_DEG))?;
    writer.write_u16(record.modem.altitude)?;
    writer.write_u8(record.modem.fix_quality)?;

    writer.write_u32(unscale_coordinate(record.sensor.latitude, LAT_OFFSET_DEG))?;
    writer.write_u32(unscale_coordinate(record.sensor.longitude, LON_OFFSET_DEG))?;

    writer.write_u8(round_to_counts(record.housekeeping.internal_temp - TEMP_OFFSET_C) as u8)?;
    writer.write_u8(
        round_to_counts(record.housekeeping.battery_voltage * BATT_COUNTS_PER_VOLT) as u8,
    )?;
    writer.write_u16(record.housekeeping.frame_number)?;

    // Written last: the auxiliary block owns the shared byte at offset 22.
    writer.seek(AUX_BLOCK_OFFSET)?;
    for (value, width) in record.aux.values.iter().zip(AUX_FIELD_WIDTHS.iter()) {
        match width {
            FieldWidth::U8 => writer.write_u8(*value as u8)?,
            FieldWidth::U16 => writer.write_u16(*value)?,
        }
    }

    Ok(writer.cursor())
}

/// Scale a raw coordinate count into decimal degrees.
#[inline]
fn scale_coordinate(raw: u32, offset_deg: f64) -> f64 {
    raw as f64 / COORD_COUNTS_PER_DEG + offset_deg
}

/// Scale decimal degrees back into raw coordinate counts.
#[inline]
fn unscale_coordinate(degrees: f64, offset_deg: f64) -> u32 {
    round_to_counts((degrees - offset_deg) * COORD_COUNTS_PER_DEG) as u32
}

/// Round a non-negative count to the nearest integer.
/// `f64::round` lives in `std`, not `core`, hence the manual half-up round;
/// in-domain raw counts are never negative.
#[inline]
fn round_to_counts(value: f64) -> u64 {
    (value + 0.5) as u64
}
