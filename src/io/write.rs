use core::fmt::Debug;

use embedded_nal::nb::{self, block};

use crate::buffer::{BufferError, ByteBuffer};

pub trait Write {
    type Error: Debug;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error>;

    // FIXME: Blocking for simplicity
    fn write_all(&mut self, mut buffer: &[u8]) -> Result<(), Self::Error> {
        while !buffer.is_empty() {
            let written = block!(self.write(buffer))?;
            buffer = &buffer[written..];
        }
        Ok(())
    }

    // FIXME: Blocking for simplicity
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_all(&[byte])
    }
}

/// Push-based byte sink over a [`ByteBuffer`], writing at its position up to its limit.
pub struct ByteBufferWriter<'w, 'a> {
    buf: &'w mut ByteBuffer<'a>,
}

impl<'w, 'a> ByteBufferWriter<'w, 'a> {
    pub fn new(buf: &'w mut ByteBuffer<'a>) -> Self {
        Self { buf }
    }

    /// Write one byte at the cursor. Fails if the cursor already sits on the limit.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), CapacityExceeded> {
        self.buf.put(byte).map_err(CapacityExceeded::from_buffer)
    }

    /// Write all of `src` at the cursor, or nothing at all if it does not fit.
    pub fn write_from(&mut self, src: &[u8]) -> Result<(), CapacityExceeded> {
        self.buf.put_slice(src).map_err(CapacityExceeded::from_buffer)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn into_inner(self) -> &'w mut ByteBuffer<'a> {
        self.buf
    }
}

impl Write for ByteBufferWriter<'_, '_> {
    type Error = CapacityExceeded;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.write_from(buffer)?;
        Ok(buffer.len())
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        ByteBufferWriter::write_byte(self, byte)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for ByteBufferWriter<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_from(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::WriteZero, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// The sink has less room left than the write needed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("capacity exceeded: {requested} byte(s) requested, {remaining} remaining")]
pub struct CapacityExceeded {
    pub requested: usize,
    pub remaining: usize,
}

impl CapacityExceeded {
    pub(crate) fn new(requested: usize, remaining: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(requested, remaining, "write rejected, sink is full");

        Self {
            requested,
            remaining,
        }
    }

    fn from_buffer(e: BufferError) -> Self {
        match e {
            BufferError::Overflow {
                requested,
                remaining,
            } => Self::new(requested, remaining),
            // put/put_slice only ever overflow
            _ => Self::new(0, 0),
        }
    }
}
