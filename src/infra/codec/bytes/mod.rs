//! Low-level components dedicated to byte manipulation for SBD payloads.
//! The provided reader/writer abstractions handle the fixed big-endian
//! layouts used by the telemetry frame, where every field is byte-aligned.
use crate::error::{ByteReaderError, ByteWriterError};

/// Generic reader that extracts big-endian integer fields from a `&[u8]`
/// without extra allocation or copies.
pub struct ByteReader<'a> {
    /// Shared source buffer (typically one SBD attachment payload).
    buffer: &'a [u8],
    /// Current index expressed as number of bytes read from the beginning.
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Expose the cursor position in bytes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Move the cursor to an absolute byte offset.
    ///
    /// The frame layout revisits one byte (the auxiliary block starts inside
    /// the named block), so the decoder needs absolute positioning rather
    /// than a purely sequential cursor.
    pub fn seek(&mut self, offset: usize) -> Result<(), ByteReaderError> {
        if offset > self.buffer.len() {
            return Err(ByteReaderError::OutOfBounds {
                asked: offset,
                available: self.buffer.len(),
            });
        }
        self.cursor = offset;
        Ok(())
    }

    /// Take `len` bytes from the current position, advancing the cursor.
    fn take(&mut self, len: usize) -> Result<&'a [u8], ByteReaderError> {
        let end = self.cursor + len;
        if end > self.buffer.len() {
            return Err(ByteReaderError::OutOfBounds {
                asked: len,
                available: self.remaining(),
            });
        }
        let slice = &self.buffer[self.cursor..end];
        self.cursor = end;
        Ok(slice)
    }

    /// Read one octet.
    pub fn read_u8(&mut self) -> Result<u8, ByteReaderError> {
        self.take(1).map(|s| s[0])
    }

    /// Read a big-endian 16-bit unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16, ByteReaderError> {
        self.take(2).map(|s| u16::from_be_bytes([s[0], s[1]]))
    }

    /// Read a big-endian 32-bit unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32, ByteReaderError> {
        self.take(4)
            .map(|s| u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
    }

    /// Return a slice of `len` bytes from the current position.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ByteReaderError> {
        self.take(len)
    }
}

//==================================================================================BYTEWRITER

/// Generic writer able to lay big-endian integer fields into a `&mut [u8]`.
/// Used by the frame encoder to rebuild SBD payloads field by field.
pub struct ByteWriter<'a> {
    /// Target buffer (typically the frame under construction).
    buffer: &'a mut [u8],
    /// Current position expressed in bytes written.
    cursor: usize,
}

impl<'a> ByteWriter<'a> {
    /// Create a writer positioned at the start of the buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Expose the cursor position in bytes (useful to derive final length).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to an absolute byte offset.
    pub fn seek(&mut self, offset: usize) -> Result<(), ByteWriterError> {
        if offset > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: offset,
                available: self.buffer.len(),
            });
        }
        self.cursor = offset;
        Ok(())
    }

    /// Reserve `len` bytes at the current position, advancing the cursor.
    fn reserve(&mut self, len: usize) -> Result<&mut [u8], ByteWriterError> {
        let end = self.cursor + len;
        if end > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: len,
                available: self.buffer.len() - self.cursor,
            });
        }
        let slice = &mut self.buffer[self.cursor..end];
        self.cursor = end;
        Ok(slice)
    }

    /// Write one octet.
    pub fn write_u8(&mut self, value: u8) -> Result<(), ByteWriterError> {
        self.reserve(1).map(|s| s[0] = value)
    }

    /// Write a big-endian 16-bit unsigned integer.
    pub fn write_u16(&mut self, value: u16) -> Result<(), ByteWriterError> {
        self.reserve(2)
            .map(|s| s.copy_from_slice(&value.to_be_bytes()))
    }

    /// Write a big-endian 32-bit unsigned integer.
    pub fn write_u32(&mut self, value: u32) -> Result<(), ByteWriterError> {
        self.reserve(4)
            .map(|s| s.copy_from_slice(&value.to_be_bytes()))
    }

    /// Copy a byte slice into the buffer at the current position.
    pub fn write_slice(&mut self, slice: &[u8]) -> Result<(), ByteWriterError> {
        self.reserve(slice.len())
            .map(|s| s.copy_from_slice(slice))
    }
}

//==================================================================================TESTS
