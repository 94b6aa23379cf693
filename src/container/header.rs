//! Gzip member header parsing.
//!
//! The header is variable-length: a 10-byte fixed part followed by optional
//! fields whose presence is governed by the FLG byte, in this fixed order:
//! extra field (2-byte little-endian length prefix), original file name
//! (NUL-terminated), comment (NUL-terminated), header CRC-16.
//!
//! The parser validates only the structure — magic bytes, method, reserved
//! flag bits, and declared field lengths. Skipped content (timestamp, OS
//! byte, extra data, name, comment, header CRC) is never inspected.

use crate::container::cursor::InputCursor;
use crate::container::types::{
    GzipError, GZIP_CM_DEFLATE, GZIP_FCOMMENT, GZIP_FEXTRA, GZIP_FHCRC, GZIP_FNAME,
    GZIP_FOOTER_SIZE, GZIP_FRESERVED, GZIP_ID1, GZIP_ID2, GZIP_MIN_OVERHEAD,
};

/// Parse the header, leaving the cursor at the first payload byte.
///
/// Every variable-length skip re-checks that [`GZIP_FOOTER_SIZE`] bytes
/// remain for the trailer; violating that reservation aborts the decode
/// with [`GzipError::BadData`] no matter how far parsing had progressed.
pub fn parse_header(cur: &mut InputCursor<'_>) -> Result<(), GzipError> {
    if cur.remaining() < GZIP_MIN_OVERHEAD {
        return Err(GzipError::BadData);
    }

    // ID1, ID2, CM — exact match required, no partial tolerance.
    if cur.take_u8()? != GZIP_ID1 {
        return Err(GzipError::BadData);
    }
    if cur.take_u8()? != GZIP_ID2 {
        return Err(GzipError::BadData);
    }
    if cur.take_u8()? != GZIP_CM_DEFLATE {
        return Err(GzipError::BadData);
    }

    let flg = cur.take_u8()?;
    if flg & GZIP_FRESERVED != 0 {
        return Err(GzipError::BadData);
    }

    // MTIME(4) + XFL + OS: skipped, never validated.
    cur.skip(6)?;

    if flg & GZIP_FEXTRA != 0 {
        let xlen = cur.read_le16()? as usize;
        if cur.remaining() < xlen + GZIP_FOOTER_SIZE {
            return Err(GzipError::BadData);
        }
        cur.skip(xlen)?;
    }

    if flg & GZIP_FNAME != 0 {
        cur.skip_past_nul();
        if cur.remaining() < GZIP_FOOTER_SIZE {
            return Err(GzipError::BadData);
        }
    }

    if flg & GZIP_FCOMMENT != 0 {
        cur.skip_past_nul();
        if cur.remaining() < GZIP_FOOTER_SIZE {
            return Err(GzipError::BadData);
        }
    }

    if flg & GZIP_FHCRC != 0 {
        cur.skip(2)?;
        if cur.remaining() < GZIP_FOOTER_SIZE {
            return Err(GzipError::BadData);
        }
    }

    Ok(())
}
