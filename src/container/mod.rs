//! Gzip container format — one-shot member decoding.
//!
//! A gzip member is header + raw DEFLATE payload + 8-byte trailer. This
//! module validates the container and sequences the decode; the DEFLATE
//! bitstream itself is handled by the delegate seam in [`crate::inflate`].

pub mod cursor;
pub mod decompress;
pub mod header;
pub mod types;

// Re-export key public API items at the module level.
pub use cursor::InputCursor;
pub use decompress::{gzip_decompress, gzip_decompress_ex, Decompressor};
pub use header::parse_header;
pub use types::{DecodeInfo, GzipError};
