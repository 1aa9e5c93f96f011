//! Telemetry value structures produced by the frame decoder.
//!
//! A [`TelemetryRecord`] is immutable once constructed and either fully
//! populated or not produced at all; the decoder never hands out partial
//! records. All scaled values carry engineering units (degrees, meters,
//! °C, volts); the auxiliary channels stay raw.
use crate::core::{AUX_FIELD_COUNT, AUX_FIELD_WIDTHS, FieldWidth};

/// GPS fix reported by the Iridium modem, with the modem housekeeping
/// values that travel alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModemFix {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude: u16,
    /// GPS fix quality indicator as reported by the modem.
    pub fix_quality: u8,
}

/// GPS fix reported by the meteorological sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorFix {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Housekeeping values from the modem unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Housekeeping {
    /// Modem internal temperature in °C.
    pub internal_temp: f64,
    /// Battery voltage in volts.
    pub battery_voltage: f64,
    /// Transmission frame counter.
    pub frame_number: u16,
}

/// Raw auxiliary sensor channels from the second frame block.
///
/// The 27 channels are parsed (which also validates that the payload covers
/// the whole block) but their scaling and meaning are not published, so they
/// are retained as raw integers rather than silently dropped. Each value is
/// widened to `u16`; [`AUX_FIELD_WIDTHS`] records the on-wire width of each
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuxiliaryBlock {
    /// Raw channel values in wire order.
    pub values: [u16; AUX_FIELD_COUNT],
}

impl AuxiliaryBlock {
    /// Raw value of channel `index`, or `None` past the end of the block.
    #[inline]
    pub fn value(&self, index: usize) -> Option<u16> {
        self.values.get(index).copied()
    }

    /// On-wire width of channel `index`.
    #[inline]
    pub fn width(index: usize) -> Option<FieldWidth> {
        AUX_FIELD_WIDTHS.get(index).copied()
    }
}

/// One fully decoded SBD telemetry frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetryRecord {
    /// Modem-side GPS fix.
    pub modem: ModemFix,
    /// Sensor-package GPS fix.
    pub sensor: SensorFix,
    /// Modem housekeeping values.
    pub housekeeping: Housekeeping,
    /// Raw auxiliary channels, kept for forward compatibility.
    pub aux: AuxiliaryBlock,
}
