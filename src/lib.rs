//! `lasp-sbd` library: decoder for the fixed-layout telemetry frame carried
//! inside LASP Iridium short-burst-data (SBD) messages, usable in a `no_std`
//! environment. The crate exposes the frame layout description (`core`), the
//! low-level big-endian byte codec (`infra`), and the frame protocol itself
//! (`protocol`): decoding a raw payload into a
//! [`protocol::telemetry::TelemetryRecord`], or rebuilding a payload from one.
//!
//! Transport concerns (IMAP retrieval, MIME attachment extraction, rendering)
//! live in the surrounding application; this crate only ever sees raw bytes.
#![no_std]
//==================================================================================
/// Frame layout constants and field-width tables shared by the decoder,
/// the encoder, and the test suite.
pub mod core;
/// Domain and low-level errors (byte-level buffer access, frame decoding,
/// frame encoding).
pub mod error;
/// Low-level big-endian byte codec over borrowed buffers.
pub mod infra;
/// SBD frame protocol: telemetry value types, decoder, and encoder.
pub mod protocol;
//==================================================================================
