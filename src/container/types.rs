//! Gzip wire-format constants, header flag bits, and error handling.
//!
//! Covers:
//! - Fixed header bytes (`GZIP_ID1`, `GZIP_ID2`, `GZIP_CM_DEFLATE`)
//! - FLG bit masks (`GZIP_FTEXT` .. `GZIP_FRESERVED`)
//! - Size constants (`GZIP_FHDR_SIZE`, `GZIP_FOOTER_SIZE`, `GZIP_MIN_OVERHEAD`)
//! - [`GzipError`] with `Display` + `Error` impls
//! - [`DecodeInfo`], the success record of an extended decode

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed header bytes
// ─────────────────────────────────────────────────────────────────────────────

/// First magic byte of every gzip member.
pub const GZIP_ID1: u8 = 0x1F;

/// Second magic byte of every gzip member.
pub const GZIP_ID2: u8 = 0x8B;

/// Compression method byte: DEFLATE is the only method gzip ever defined.
pub const GZIP_CM_DEFLATE: u8 = 8;

// ─────────────────────────────────────────────────────────────────────────────
// FLG bit masks
// ─────────────────────────────────────────────────────────────────────────────

/// Bit 0: probably-ASCII hint. Carries no structural meaning; ignored.
pub const GZIP_FTEXT: u8 = 0x01;

/// Bit 1: a CRC-16 of the header follows the optional fields.
pub const GZIP_FHCRC: u8 = 0x02;

/// Bit 2: an extra field (2-byte length prefix) follows the fixed header.
pub const GZIP_FEXTRA: u8 = 0x04;

/// Bit 3: a NUL-terminated original file name is present.
pub const GZIP_FNAME: u8 = 0x08;

/// Bit 4: a NUL-terminated file comment is present.
pub const GZIP_FCOMMENT: u8 = 0x10;

/// Bits 5-7: reserved, must be zero. Any set bit is a format violation.
pub const GZIP_FRESERVED: u8 = 0xE0;

// ─────────────────────────────────────────────────────────────────────────────
// Size constants
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed header size: ID1, ID2, CM, FLG, MTIME(4), XFL, OS.
pub const GZIP_FHDR_SIZE: usize = 10;

/// Trailer size: CRC-32(4) + ISIZE(4). This many bytes must remain
/// unconsumed after every variable-length header field is skipped.
pub const GZIP_FOOTER_SIZE: usize = 8;

/// Smallest byte count any gzip member can occupy: fixed header + trailer.
/// Inputs below this are rejected before any field is read.
pub const GZIP_MIN_OVERHEAD: usize = GZIP_FHDR_SIZE + GZIP_FOOTER_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Decode failure taxonomy surfaced to the caller.
///
/// Every failure is terminal for the call: no retries happen inside the
/// container layer, and the output buffer may hold partially written bytes
/// that callers must discard on any `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GzipError {
    /// Header magic/method/reserved-bit violation, footer-reservation
    /// violation, trailer CRC-32 or ISIZE mismatch, or delegate-reported
    /// stream corruption.
    BadData,
    /// The delegate ran out of room in the caller's output buffer.
    InsufficientSpace,
}

impl GzipError {
    /// Stable human-readable name for this error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GzipError::BadData => "invalid or corrupted gzip data",
            GzipError::InsufficientSpace => "output buffer too small",
        }
    }
}

impl fmt::Display for GzipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for GzipError {}

// ─────────────────────────────────────────────────────────────────────────────
// Success record
// ─────────────────────────────────────────────────────────────────────────────

/// Byte counts reported by a successful extended decode.
///
/// `in_nbytes` is the total input consumed, measured from the start of the
/// buffer through the last trailer byte — for a buffer holding one member
/// plus trailing data this is the member's exact length. `out_nbytes` is
/// the decompressed size written into the caller's output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeInfo {
    /// Input bytes consumed (header + payload + trailer).
    pub in_nbytes: usize,
    /// Output bytes produced by the delegate.
    pub out_nbytes: usize,
}
