//! Bounds-checked monotonic cursor over the input buffer.
//!
//! All header and trailer reads go through [`InputCursor`]. The position
//! only ever advances; any advance that would pass the end of the buffer
//! fails with [`GzipError::BadData`] before it occurs, so no read can land
//! outside `[0, len)`.

use crate::container::types::GzipError;

/// Read-only cursor `(position, end)` over an immutable byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct InputCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    /// Position the cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        InputCursor { buf, pos: 0 }
    }

    /// Bytes consumed so far (distance from the start of the buffer).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume and return one byte.
    #[inline]
    pub fn take_u8(&mut self) -> Result<u8, GzipError> {
        let b = *self.buf.get(self.pos).ok_or(GzipError::BadData)?;
        self.pos += 1;
        Ok(b)
    }

    /// Advance past `n` bytes without reading them.
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<(), GzipError> {
        if n > self.remaining() {
            return Err(GzipError::BadData);
        }
        self.pos += n;
        Ok(())
    }

    /// Consume 2 bytes as a little-endian `u16`.
    #[inline]
    pub fn read_le16(&mut self) -> Result<u16, GzipError> {
        let bytes = self.take_array::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    /// Consume 4 bytes as a little-endian `u32`.
    #[inline]
    pub fn read_le32(&mut self) -> Result<u32, GzipError> {
        let bytes = self.take_array::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Scan forward past the next zero byte, consuming it too.
    ///
    /// If no zero byte occurs before the end of the buffer, the cursor lands
    /// exactly at the end — never beyond it. That case is not an error here;
    /// the caller's footer-reservation check fails deterministically instead.
    pub fn skip_past_nul(&mut self) {
        match self.buf[self.pos..].iter().position(|&b| b == 0) {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.buf.len(),
        }
    }

    /// The unconsumed tail of the buffer, starting at the cursor.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], GzipError> {
        let end = self.pos.checked_add(N).ok_or(GzipError::BadData)?;
        let slice = self.buf.get(self.pos..end).ok_or(GzipError::BadData)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        self.pos = end;
        Ok(out)
    }
}
