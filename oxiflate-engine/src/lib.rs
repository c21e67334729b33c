//! # OxiFlate Engine
//!
//! Codec sessions that implement the OxiFlate step traits on top of
//! [`flate2`]'s low-level `Compress` / `Decompress` streams.
//!
//! A session owns the engine state for exactly one stream. It is created
//! before the first step and released when the session is dropped, so the
//! state is torn down on every exit path of the code driving it.
//!
//! ## Example
//!
//! ```rust
//! use oxiflate_core::{CompressionLevel, Compressor, Decompressor, Format, FlushMode};
//! use oxiflate_core::{CompressStatus, DecompressStatus};
//! use oxiflate_engine::{DeflateSession, InflateSession};
//!
//! let mut deflater = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
//! let mut packed = [0u8; 64];
//! let (_, produced, status) = deflater.compress(b"hello hello", &mut packed, FlushMode::Finish).unwrap();
//! assert_eq!(status, CompressStatus::Done);
//!
//! let mut inflater = InflateSession::new(Format::Raw);
//! let mut unpacked = [0u8; 64];
//! let (_, n, status) = inflater.decompress(&packed[..produced], &mut unpacked).unwrap();
//! assert_eq!(status, DecompressStatus::Done);
//! assert_eq!(&unpacked[..n], b"hello hello");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod deflate;
pub mod inflate;

// Re-exports
pub use deflate::DeflateSession;
pub use inflate::InflateSession;
