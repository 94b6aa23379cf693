//! Raw DEFLATE delegate seam.
//!
//! The container layer never touches the DEFLATE bitstream itself. It hands
//! the payload region to a [`RawDecoder`] and trusts the consumed/produced
//! counts the delegate reports — a delegate may legitimately consume fewer
//! bytes than it was offered, since the payload region it sees extends to
//! the start of the trailer only by upper bound.
//!
//! The default delegate is backed by `miniz_oxide`'s low-level inflate
//! core, driven in one-shot raw mode (no zlib framing, whole output buffer
//! available up front).

use miniz_oxide::inflate::core::inflate_flags::TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF;
use miniz_oxide::inflate::core::{decompress, DecompressorOxide};
use miniz_oxide::inflate::TINFLStatus;

use crate::container::types::GzipError;

/// Byte counts reported by a successful raw decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDecode {
    /// Bytes consumed from the payload region.
    pub in_nbytes: usize,
    /// Bytes written into the output buffer.
    pub out_nbytes: usize,
}

/// One-shot raw DEFLATE decoding over caller-owned buffers.
///
/// Implementations must decode exactly one complete DEFLATE stream from
/// the front of `src`, write the decompressed bytes to the front of `dst`,
/// and report how much of each buffer was actually used. Errors surface in
/// the container's own taxonomy and are propagated verbatim by the
/// orchestrator: out of output room is [`GzipError::InsufficientSpace`],
/// anything malformed or truncated is [`GzipError::BadData`].
pub trait RawDecoder {
    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<RawDecode, GzipError>;
}

/// Default delegate: `miniz_oxide` inflate state, reset on every call so
/// one decoder instance serves any number of sequential decodes.
pub struct InflateDecoder {
    // Boxed: the tinfl state machine is ~11 KiB of Huffman tables.
    state: Box<DecompressorOxide>,
}

impl InflateDecoder {
    pub fn new() -> Self {
        InflateDecoder {
            state: Box::new(DecompressorOxide::new()),
        }
    }
}

impl Default for InflateDecoder {
    fn default() -> Self {
        InflateDecoder::new()
    }
}

impl RawDecoder for InflateDecoder {
    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<RawDecode, GzipError> {
        self.state.init();
        let (status, in_nbytes, out_nbytes) = decompress(
            &mut self.state,
            src,
            dst,
            0,
            TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF,
        );
        match status {
            TINFLStatus::Done => Ok(RawDecode {
                in_nbytes,
                out_nbytes,
            }),
            TINFLStatus::HasMoreOutput => Err(GzipError::InsufficientSpace),
            // One-shot mode: NeedsMoreInput means the stream was truncated,
            // which is corruption from the container's point of view.
            _ => Err(GzipError::BadData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `03 00`: fixed-Huffman final block holding only the end-of-block
    // symbol — the canonical two-byte DEFLATE encoding of the empty stream.
    const DEFLATE_EMPTY: [u8; 2] = [0x03, 0x00];

    /// One stored (BTYPE=00, BFINAL=1) block wrapping `payload`.
    fn stored_block(payload: &[u8]) -> Vec<u8> {
        let len = payload.len() as u16;
        let mut out = vec![0x01];
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn empty_stream_decodes_to_nothing() {
        let mut dec = InflateDecoder::new();
        let mut out = [0u8; 16];
        let r = dec.decompress(&DEFLATE_EMPTY, &mut out).unwrap();
        assert_eq!(r.out_nbytes, 0);
        assert_eq!(r.in_nbytes, 2);
    }

    #[test]
    fn stored_block_roundtrip() {
        let payload = b"raw stored bytes pass through unchanged";
        let body = stored_block(payload);
        let mut dec = InflateDecoder::new();
        let mut out = vec![0u8; payload.len()];
        let r = dec.decompress(&body, &mut out).unwrap();
        assert_eq!(r.out_nbytes, payload.len());
        assert_eq!(r.in_nbytes, body.len());
        assert_eq!(&out[..r.out_nbytes], payload);
    }

    #[test]
    fn consumes_only_the_final_block() {
        // Trailing bytes after BFINAL must be left unconsumed.
        let payload = b"member body";
        let mut body = stored_block(payload);
        let body_len = body.len();
        body.extend_from_slice(b"trailing trailer bytes");
        let mut dec = InflateDecoder::new();
        let mut out = vec![0u8; payload.len()];
        let r = dec.decompress(&body, &mut out).unwrap();
        assert_eq!(r.in_nbytes, body_len);
    }

    #[test]
    fn truncated_stream_is_bad_data() {
        let body = stored_block(b"0123456789");
        let mut dec = InflateDecoder::new();
        let mut out = [0u8; 32];
        assert_eq!(
            dec.decompress(&body[..body.len() - 3], &mut out),
            Err(GzipError::BadData)
        );
    }

    #[test]
    fn small_output_is_insufficient_space() {
        let body = stored_block(b"0123456789");
        let mut dec = InflateDecoder::new();
        let mut out = [0u8; 4];
        assert_eq!(
            dec.decompress(&body, &mut out),
            Err(GzipError::InsufficientSpace)
        );
    }

    #[test]
    fn decoder_is_reusable_across_calls() {
        let mut dec = InflateDecoder::new();
        let mut out = [0u8; 32];
        // A failed decode must not poison the next call.
        let body = stored_block(b"abcdef");
        assert!(dec.decompress(&body[..2], &mut out).is_err());
        let r = dec.decompress(&body, &mut out).unwrap();
        assert_eq!(&out[..r.out_nbytes], b"abcdef");
    }
}
