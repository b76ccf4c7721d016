use core::fmt::Debug;

/// A fixed-capacity window over caller-owned storage, with a cursor (`position`) and an end of valid
/// data (`limit`).
///
/// The buffer never grows. `0 <= position <= limit <= capacity` holds at all times.
pub struct ByteBuffer<'a> {
    data: &'a mut [u8],
    position: usize,
    limit: usize,
}

impl<'a> ByteBuffer<'a> {
    /// Wrap `data` for writing: position at 0, limit at the full capacity.
    pub fn new(data: &'a mut [u8]) -> Self {
        let limit = data.len();
        Self {
            data,
            position: 0,
            limit,
        }
    }

    /// Wrap `data` that already holds `len` valid bytes, ready to be read back.
    pub fn with_filled(data: &'a mut [u8], len: usize) -> Result<Self, BufferError> {
        let mut buf = Self::new(data);
        buf.set_limit(len)?;
        Ok(buf)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            return Err(BufferError::InvalidPosition {
                position,
                limit: self.limit,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Move the limit. A position past the new limit is pulled back onto it.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        if limit > self.capacity() {
            return Err(BufferError::InvalidLimit {
                limit,
                capacity: self.capacity(),
            });
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    /// Switch from writing to reading: the written region becomes the readable one.
    pub fn flip(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(filled = self.position, "flip byte buffer");

        self.limit = self.position;
        self.position = 0;
    }

    /// Make the whole capacity writable again. Contents are left as they are.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Move the unread bytes to the front and get ready to write after them.
    pub fn compact(&mut self) {
        let remaining = self.remaining();

        #[cfg(feature = "tracing")]
        tracing::trace!(remaining, discarded = self.position, "compact byte buffer");

        self.data.copy_within(self.position..self.limit, 0);
        self.position = remaining;
        self.limit = self.capacity();
    }

    /// The unread block `[position, limit)`.
    #[inline]
    pub fn as_remaining(&self) -> &[u8] {
        &self.data[self.position..self.limit]
    }

    /// The block before the cursor, i.e. what has been written (or already read).
    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.position]
    }

    pub fn get(&mut self) -> Result<u8, BufferError> {
        if !self.has_remaining() {
            return Err(BufferError::Underflow {
                requested: 1,
                remaining: 0,
            });
        }
        let byte = self.data[self.position];
        self.position += 1;
        Ok(byte)
    }

    pub fn put(&mut self, byte: u8) -> Result<(), BufferError> {
        if !self.has_remaining() {
            return Err(BufferError::Overflow {
                requested: 1,
                remaining: 0,
            });
        }
        self.data[self.position] = byte;
        self.position += 1;
        Ok(())
    }

    /// Fill the whole of `dst`, or fail without moving the cursor.
    pub fn get_slice(&mut self, dst: &mut [u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if dst.len() > remaining {
            return Err(BufferError::Underflow {
                requested: dst.len(),
                remaining,
            });
        }
        let end = self.position + dst.len();
        dst.copy_from_slice(&self.data[self.position..end]);
        self.position = end;
        Ok(())
    }

    /// Write the whole of `src`, or fail without moving the cursor.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if src.len() > remaining {
            return Err(BufferError::Overflow {
                requested: src.len(),
                remaining,
            });
        }
        let end = self.position + src.len();
        self.data[self.position..end].copy_from_slice(src);
        self.position = end;
        Ok(())
    }
}

impl Debug for ByteBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer overflow: {requested} byte(s) requested, {remaining} remaining")]
    Overflow { requested: usize, remaining: usize },
    #[error("buffer underflow: {requested} byte(s) requested, {remaining} remaining")]
    Underflow { requested: usize, remaining: usize },
    #[error("position {position} is past the limit {limit}")]
    InvalidPosition { position: usize, limit: usize },
    #[error("limit {limit} is past the capacity {capacity}")]
    InvalidLimit { limit: usize, capacity: usize },
}
