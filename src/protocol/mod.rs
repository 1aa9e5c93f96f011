//! High-level components of the SBD telemetry protocol: the frame
//! decoder/encoder and the telemetry value structures it produces.
pub mod frame;
pub mod telemetry;
