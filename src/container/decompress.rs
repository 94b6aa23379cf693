//! One-shot gzip member decoding.
//!
//! The orchestrator drives four stages in strict forward order — header
//! parsing, delegate decode, CRC-32 check, ISIZE check — and short-circuits
//! at the first failure. The whole decode is one blocking call: no state is
//! revisited, there is no partial-output guarantee on failure, and every
//! path, success or not, flows through a single finalization point so the
//! timing accumulator is always left consistent.

use crate::checksum::crc32;
use crate::container::cursor::InputCursor;
use crate::container::header::parse_header;
use crate::container::types::{DecodeInfo, GzipError, GZIP_FOOTER_SIZE};
use crate::inflate::{InflateDecoder, RawDecoder};
use crate::timing::Timings;

// ─────────────────────────────────────────────────────────────────────────────
// Decompressor instance
// ─────────────────────────────────────────────────────────────────────────────

/// Reusable decompressor: the raw-DEFLATE delegate plus the per-call timing
/// accumulator.
///
/// One instance serves any number of sequential decodes, but each call
/// resets and owns the accumulator for its duration — two threads must not
/// share an instance concurrently (the `&mut` receiver enforces this; use
/// one instance per thread instead).
pub struct Decompressor<D: RawDecoder = InflateDecoder> {
    raw: D,
    timings: Timings,
}

impl Decompressor<InflateDecoder> {
    /// A decompressor backed by the default `miniz_oxide` delegate.
    pub fn new() -> Self {
        Decompressor::with_decoder(InflateDecoder::new())
    }
}

impl Default for Decompressor<InflateDecoder> {
    fn default() -> Self {
        Decompressor::new()
    }
}

impl<D: RawDecoder> Decompressor<D> {
    /// A decompressor over a caller-supplied raw delegate.
    pub fn with_decoder(raw: D) -> Self {
        Decompressor {
            raw,
            timings: Timings::default(),
        }
    }

    /// Phase timings recorded by the most recent decode call.
    #[cfg(feature = "timing")]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Decode one gzip member from `input` into `output`, reporting both the
/// consumed-input and produced-output byte counts.
///
/// `input` must start with the member's header; bytes past the member's
/// trailer are permitted and ignored — `DecodeInfo::in_nbytes` reports
/// exactly where the member ended. On `Err`, `output` may contain partially
/// written bytes that the caller must disregard.
pub fn gzip_decompress_ex<D: RawDecoder>(
    d: &mut Decompressor<D>,
    input: &[u8],
    output: &mut [u8],
) -> Result<DecodeInfo, GzipError> {
    d.timings.begin();
    let result = decode_member(d, input, output);
    // Single cleanup point, reached from every exit of decode_member.
    d.timings.set_checksum_done();
    d.timings.finish();
    result
}

/// Decode one gzip member, reporting only the produced-output byte count.
///
/// Identical to [`gzip_decompress_ex`] minus the consumed-input report;
/// fits callers that know the input holds exactly one member with no
/// trailing data.
pub fn gzip_decompress<D: RawDecoder>(
    d: &mut Decompressor<D>,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, GzipError> {
    gzip_decompress_ex(d, input, output).map(|info| info.out_nbytes)
}

// ─────────────────────────────────────────────────────────────────────────────
// Stage sequencing
// ─────────────────────────────────────────────────────────────────────────────

fn decode_member<D: RawDecoder>(
    d: &mut Decompressor<D>,
    input: &[u8],
    output: &mut [u8],
) -> Result<DecodeInfo, GzipError> {
    let mut cur = InputCursor::new(input);

    // Header. On failure the wrapper section still closes, so an early
    // reject records non-zero wrapper time and zero core/checksum time.
    let wrapper_start = d.timings.section_begin();
    let parsed = parse_header(&mut cur);
    match parsed {
        Ok(()) => d.timings.wrapper_end(wrapper_start, true),
        Err(err) => {
            d.timings.wrapper_end(wrapper_start, false);
            return Err(err);
        }
    }

    // Delegate decode over the payload region: cursor to end minus the
    // trailer reservation (the header parser guarantees those 8 bytes).
    let payload = &input[cur.position()..input.len() - GZIP_FOOTER_SIZE];
    d.timings.core_begin();
    let decoded = d.raw.decompress(payload, output);
    d.timings.core_end();
    let decoded = decoded?;

    // Advance by what the delegate actually consumed — it may be less than
    // the payload it was offered, and its count is trusted exactly.
    let wrapper_start = d.timings.section_begin();
    let advanced = cur.skip(decoded.in_nbytes);
    d.timings.wrapper_end(wrapper_start, false);
    advanced?;

    // CRC-32 over the full produced output.
    let checksum_start = d.timings.checksum_begin();
    let computed_crc = crc32(0, &output[..decoded.out_nbytes]);
    d.timings.checksum_end(checksum_start);

    // Trailer fields, fixed order: CRC-32 then ISIZE.
    let wrapper_start = d.timings.section_begin();
    let verdict = validate_trailer(&mut cur, computed_crc, decoded.out_nbytes);
    d.timings.wrapper_end(wrapper_start, false);
    verdict?;

    Ok(DecodeInfo {
        in_nbytes: cur.position(),
        out_nbytes: decoded.out_nbytes,
    })
}

/// Compare the stored trailer against the decode results: the CRC-32 first,
/// then ISIZE against the low 32 bits of the produced byte count (gzip
/// stores only the low-order 32 bits of the uncompressed size).
fn validate_trailer(
    cur: &mut InputCursor<'_>,
    computed_crc: u32,
    out_nbytes: usize,
) -> Result<(), GzipError> {
    let stored_crc = cur.read_le32()?;
    if computed_crc != stored_crc {
        return Err(GzipError::BadData);
    }
    let stored_isize = cur.read_le32()?;
    if out_nbytes as u32 != stored_isize {
        return Err(GzipError::BadData);
    }
    Ok(())
}
