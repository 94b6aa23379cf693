// gzipr — one-shot gzip container decoding over a pluggable raw DEFLATE decoder

pub mod checksum;
pub mod container;
pub mod inflate;
pub mod timing;

/// Crate version string, taken from the package manifest.
pub const GZIPR_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use container::decompress::{gzip_decompress, gzip_decompress_ex, Decompressor};
pub use container::types::{DecodeInfo, GzipError};
pub use inflate::{InflateDecoder, RawDecode, RawDecoder};
