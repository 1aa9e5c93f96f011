//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (byte-level buffer access,
//! frame decoding, frame encoding).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised during byte-level buffer reads.
pub enum ByteReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised during byte-level writes into a buffer.
pub enum ByteWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}

//================================================================================FRAME_ERRORS

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors encountered while decoding an SBD telemetry frame.
///
/// Both conditions are local to a single message: the caller is expected to
/// drop the offending payload and continue with the next one.
pub enum DecodeError {
    /// Payload is shorter than the fixed layout requires. No partial record
    /// is produced.
    #[error("Truncated frame: requires {required} bytes, got {available}")]
    Truncated { required: usize, available: usize },
    /// A field holds a structurally invalid encoding.
    ///
    /// The current frame layout has no sentinel or reserved-value fields, so
    /// this variant is never returned today; it reserves room in the
    /// contract for future structural checks.
    #[error("Malformed field encoding at byte offset {offset}")]
    MalformedEncoding { offset: usize },
}

impl From<ByteReaderError> for DecodeError {
    fn from(err: ByteReaderError) -> Self {
        match err {
            ByteReaderError::OutOfBounds { asked, available } => DecodeError::Truncated {
                required: asked,
                available,
            },
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors encountered while rebuilding an SBD telemetry frame.
pub enum EncodeError {
    /// Provided buffer is too small for the fixed layout.
    #[error("Buffer too small: requires {required} bytes, got {available}")]
    BufferTooSmall { required: usize, available: usize },
}

impl From<ByteWriterError> for EncodeError {
    fn from(err: ByteWriterError) -> Self {
        match err {
            ByteWriterError::OutOfBounds { asked, available } => EncodeError::BufferTooSmall {
                required: asked,
                available,
            },
        }
    }
}
