use core::{convert::Infallible, fmt::Debug};

use embedded_nal::nb;

use crate::buffer::ByteBuffer;

pub trait Read {
    type Error: Debug;

    /// Read into `buffer`, returning how many bytes were read. `Ok(0)` with a non-empty `buffer` means the
    /// source is exhausted.
    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error>;

    /// Read a single byte, `None` once the source is exhausted.
    fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error> {
        let mut byte = [0];
        match self.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Pull-based byte source over a [`ByteBuffer`], reading from its position up to its limit.
///
/// Only the cursor of the buffer is touched, never its contents.
pub struct ByteBufferReader<'r, 'a> {
    buf: &'r mut ByteBuffer<'a>,
}

impl<'r, 'a> ByteBufferReader<'r, 'a> {
    pub fn new(buf: &'r mut ByteBuffer<'a>) -> Self {
        Self { buf }
    }

    /// Next unread byte, or `None` at the end of the data.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        self.buf.get().ok()
    }

    /// Copy as much as fits from the unread data into `dst` and return the count, or `None` if there is
    /// nothing left to read.
    ///
    /// At most `remaining()` bytes are copied regardless of how large `dst` is.
    pub fn read_into(&mut self, dst: &mut [u8]) -> Option<usize> {
        if !self.buf.has_remaining() {
            return None;
        }

        let amt = dst.len().min(self.buf.remaining());
        self.buf.get_slice(&mut dst[..amt]).ok()?;
        Some(amt)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn into_inner(self) -> &'r mut ByteBuffer<'a> {
        self.buf
    }
}

impl Read for ByteBufferReader<'_, '_> {
    type Error = Infallible;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        Ok(self.read_into(buffer).unwrap_or(0))
    }

    #[inline]
    fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error> {
        Ok(ByteBufferReader::read_byte(self))
    }
}

#[cfg(feature = "std")]
impl std::io::Read for ByteBufferReader<'_, '_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.read_into(buf).unwrap_or(0))
    }
}
