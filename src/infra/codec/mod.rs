//! Codec primitives shared by the frame decoder and encoder.
pub mod bytes;
