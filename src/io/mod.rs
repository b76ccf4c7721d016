use embedded_nal::nb;

mod read;
pub use read::*;

mod write;
pub use write::*;

/// An owned fixed-capacity sink. Like [`ByteBufferWriter`], a write that does not fit is rejected whole.
impl<const N: usize> Write for heapless::Vec<u8, N> {
    type Error = CapacityExceeded;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        let remaining = N - self.len();
        self.extend_from_slice(buffer)
            .map_err(|()| CapacityExceeded::new(buffer.len(), remaining))?;
        Ok(buffer.len())
    }
}
