//! # OxiFlate Core
//!
//! Core components shared by the OxiFlate crates.
//!
//! - [`error`]: Error type and the enumerated failure kinds
//! - [`traits`]: Step traits every codec engine implements
//! - [`config`]: Stream configuration (framing, chunk sizes, growth)
//!
//! ## Architecture
//!
//! OxiFlate is split in three layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Buffer API                                          │
//! │     compress / decompress / release, C ABI              │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec engine                                        │
//! │     DEFLATE / INFLATE sessions                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Errors, step traits, configuration                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiflate_core::config::{Format, StreamConfig};
//!
//! let config = StreamConfig::default()
//!     .with_chunk_size(4096)
//!     .with_format(Format::Zlib);
//! assert!(config.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod traits;

// Re-exports
pub use config::{DEFAULT_CHUNK_SIZE, Format, GrowthPolicy, StreamConfig};
pub use error::{FailureKind, OxiFlateError, Result};
pub use traits::{
    CompressStatus, CompressionLevel, Compressor, DecompressStatus, Decompressor, FlushMode,
};
