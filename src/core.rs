//! Defines the "data contract" for the LASP SBD telemetry frame: byte
//! offsets, field widths, and scaling constants.
//!
//! The frame is a fixed big-endian layout with no padding. A first block of
//! named GPS and housekeeping fields is followed by an auxiliary block of 27
//! raw sensor channels. Both the decoder and the encoder in
//! `protocol::frame` are driven by the tables below, so the layout lives in
//! exactly one place.

/// Minimum payload length in bytes: named block up to the frame counter,
/// plus the full auxiliary block.
pub const FRAME_MIN_LEN: usize = AUX_BLOCK_OFFSET + AUX_BLOCK_LEN;

/// Byte offset of the auxiliary block within the frame.
///
/// The named block spans bytes 0..=22, so this offset overlaps the low byte
/// of the frame counter by one byte. The deployed encoder really does emit
/// the block here; the overlap is preserved bit-exactly rather than
/// corrected. See `protocol::frame` for the consequences.
pub const AUX_BLOCK_OFFSET: usize = 22;

/// Total length in bytes of the auxiliary block.
pub const AUX_BLOCK_LEN: usize = 46;

/// Number of raw channels carried by the auxiliary block.
pub const AUX_FIELD_COUNT: usize = 27;

/// Width of a single auxiliary channel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldWidth {
    /// One octet.
    U8,
    /// Two octets, big-endian.
    U16,
}

impl FieldWidth {
    /// Number of octets the field occupies.
    #[inline]
    pub const fn byte_len(self) -> usize {
        match self {
            FieldWidth::U8 => 1,
            FieldWidth::U16 => 2,
        }
    }
}

/// On-wire widths of the 27 auxiliary channels, in order: sixteen 16-bit
/// words followed by a fixed mix of 8-bit and 16-bit values.
///
/// The channel semantics are not published in the ground software; values
/// are surfaced raw so nothing on the wire is silently dropped.
pub const AUX_FIELD_WIDTHS: [FieldWidth; AUX_FIELD_COUNT] = [
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U16,
    FieldWidth::U8,
    FieldWidth::U8,
    FieldWidth::U8,
    FieldWidth::U16,
    FieldWidth::U8,
    FieldWidth::U8,
    FieldWidth::U16,
    FieldWidth::U8,
    FieldWidth::U8,
    FieldWidth::U16,
    FieldWidth::U8,
];

/// Raw counts per degree for latitude/longitude fields.
pub const COORD_COUNTS_PER_DEG: f64 = 1e6;
/// Offset applied after scaling a raw latitude (raw 0 maps to the south pole).
pub const LAT_OFFSET_DEG: f64 = -90.0;
/// Offset applied after scaling a raw longitude (raw 0 maps to the antimeridian).
pub const LON_OFFSET_DEG: f64 = -180.0;
/// Offset applied to the raw modem internal temperature, in °C.
pub const TEMP_OFFSET_C: f64 = -100.0;
/// Raw counts per volt for the battery voltage field.
pub const BATT_COUNTS_PER_VOLT: f64 = 10.0;
