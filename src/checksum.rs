//! Thin wrapper around the `crc32fast` crate providing the CRC-32 used by
//! the gzip trailer check.
//!
//! The polynomial and bit order are the IEEE 802.3 ones gzip mandates;
//! `crc32fast` dispatches to hardware CRC instructions where available.

/// One-shot CRC-32 over `data`, seeded with `init`.
///
/// Pass `init = 0` for a fresh checksum; a previous result may be passed
/// back in to continue over more data.
///
/// # Parity vectors
/// * `crc32(0, b"")` == `0`
/// * `crc32(0, b"123456789")` == `0xCBF43926`
#[inline]
pub fn crc32(init: u32, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(init);
    hasher.update(data);
    hasher.finalize()
}
