//! Shared gzip-member builders for the integration suites.
//!
//! Test vectors are assembled by hand from stored (BTYPE=00) DEFLATE blocks
//! and the canonical two-byte empty stream, so no encoder is needed to
//! produce bit-exact members.

#![allow(dead_code)] // each test crate uses a subset

use gzip::checksum::crc32;

/// `03 00`: fixed-Huffman final block holding only the end-of-block symbol.
pub const DEFLATE_EMPTY: [u8; 2] = [0x03, 0x00];

/// Encode `payload` as a chain of stored DEFLATE blocks (BFINAL on the
/// last). Stored blocks cap at 65535 bytes each.
pub fn deflate_stored(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut chunks = payload.chunks(0xFFFF).peekable();
    loop {
        let chunk: &[u8] = match chunks.next() {
            Some(c) => c,
            None => &[],
        };
        let last = chunks.peek().is_none();
        let len = chunk.len() as u16;
        out.push(u8::from(last));
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(chunk);
        if last {
            break;
        }
    }
    out
}

/// Assemble a gzip member from parts: fixed header with `flg`, the raw
/// optional-field bytes, the DEFLATE `body`, and a trailer computed over
/// `payload` (the expected decompressed bytes).
pub fn gzip_member_with(flg: u8, optional: &[u8], body: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut m = vec![0x1F, 0x8B, 0x08, flg, 0, 0, 0, 0, 0, 0xFF];
    m.extend_from_slice(optional);
    m.extend_from_slice(body);
    m.extend_from_slice(&crc32(0, payload).to_le_bytes());
    m.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    m
}

/// A plain member (no optional fields) carrying `payload` in stored blocks.
pub fn gzip_member(payload: &[u8]) -> Vec<u8> {
    gzip_member_with(0, &[], &deflate_stored(payload), payload)
}

/// The minimal 20-byte member: empty payload, no optional fields.
pub fn gzip_member_empty() -> Vec<u8> {
    gzip_member_with(0, &[], &DEFLATE_EMPTY, &[])
}
