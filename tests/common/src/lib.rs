use bytebuf_nal::io::Read;
use embedded_nal::nb;
use tracing_subscriber::EnvFilter;

/// Deterministic, non-repeating-looking bytes covering the whole `u8` range.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(151) ^ (i >> 3)) as u8).collect()
}

/// Wraps a reader, answering every other call with `WouldBlock` and never handing out more than `chunk`
/// bytes at once.
pub struct ChunkedReader<R> {
    inner: R,
    chunk: usize,
    ready: bool,
}

impl<R: Read> ChunkedReader<R> {
    pub fn new(inner: R, chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be positive");
        Self {
            inner,
            chunk,
            ready: false,
        }
    }
}

impl<R: Read> Read for ChunkedReader<R> {
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.ready = !self.ready;
        if !self.ready {
            return Err(nb::Error::WouldBlock);
        }
        let len = buffer.len().min(self.chunk);
        self.inner.read(&mut buffer[..len])
    }
}

/// Install a fmt subscriber honoring `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
