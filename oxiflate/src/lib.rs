//! # OxiFlate
//!
//! Whole-buffer DEFLATE compression and decompression.
//!
//! The caller hands over a complete input buffer and gets back a freshly
//! allocated output buffer; the chunked streaming loop that drives the
//! codec engine stays inside the crate.
//!
//! ## Pipeline
//!
//! ```text
//! input ──► ChunkFeeder ──► codec session ──► OutputSink ──► OutputBuffer
//!            (16 KiB windows)  (DEFLATE/INFLATE)  (exact growth)
//! ```
//!
//! - [`feeder`]: splits the input into fixed-size windows
//! - [`sink`]: growable output buffer, owned result type
//! - [`compress`](mod@compress) / [`decompress`](mod@decompress): the two drivers
//! - [`ext`]: slice extension trait for raw and zlib framing
//! - [`ffi`]: C ABI with null-on-failure and a matching free function
//!
//! ## Example
//!
//! ```rust
//! use oxiflate::{compress, decompress, release};
//!
//! let original = b"Hello, World! Hello, World!";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed.as_slice(), original);
//!
//! release(Some(compressed));
//! release(None);
//! ```
//!
//! ## Wire format
//!
//! The primary entry points produce and consume raw DEFLATE (RFC 1951)
//! without zlib or gzip framing. Lengths are 32-bit; inputs and outputs of
//! 4 GiB or more are rejected.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod compress;
pub mod decompress;
pub mod ext;
pub mod feeder;
pub mod ffi;
pub mod sink;

// Re-exports
pub use compress::{compress, compress_with, compress_with_engine};
pub use decompress::{decompress, decompress_with, decompress_with_engine};
pub use ext::DeflateExt;
pub use feeder::{ChunkFeeder, Window};
pub use oxiflate_core::{
    CompressionLevel, DEFAULT_CHUNK_SIZE, FailureKind, Format, GrowthPolicy, OxiFlateError,
    Result, StreamConfig,
};
pub use sink::{OutputBuffer, OutputSink};

/// Release a buffer returned by [`compress()`] or [`decompress()`].
///
/// `None` is a no-op. Taking the buffer by value makes a second release of
/// the same buffer impossible.
pub fn release(buffer: Option<OutputBuffer>) {
    if let Some(buffer) = buffer {
        log::trace!("released {} byte buffer", buffer.len());
        drop(buffer);
    }
}
