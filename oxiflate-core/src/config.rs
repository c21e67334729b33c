//! Stream configuration for whole-buffer operations.

use crate::error::{OxiFlateError, Result};

/// Default size of the input window and the output transfer chunk (16 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 16384;

/// Container framing around the DEFLATE bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Raw DEFLATE (RFC 1951), no header or trailer.
    #[default]
    Raw,
    /// zlib (RFC 1950): two-byte header and Adler-32 trailer.
    Zlib,
}

impl Format {
    /// Whether the engine should read/write the zlib header and trailer.
    pub fn zlib_header(&self) -> bool {
        matches!(self, Self::Zlib)
    }

    /// Window bits in zlib's signed convention (negative means raw).
    pub fn window_bits(&self) -> i8 {
        match self {
            Self::Raw => -15,
            Self::Zlib => 15,
        }
    }
}

/// How the output buffer grows as the engine produces bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Grow by exactly the produced byte count; capacity tracks length.
    #[default]
    Exact,
    /// Let the vector grow geometrically, trim once at the end.
    Amortized,
}

/// Configuration for one compress or decompress operation.
///
/// Compression always runs at the engine's default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Stream framing.
    pub format: Format,
    /// Size of each input window handed to the engine.
    pub input_chunk_size: usize,
    /// Size of the output transfer chunk.
    pub output_chunk_size: usize,
    /// Output buffer growth policy.
    pub growth: GrowthPolicy,
}

impl StreamConfig {
    /// Raw DEFLATE with 16 KiB chunks.
    pub const RAW: Self = Self {
        format: Format::Raw,
        input_chunk_size: DEFAULT_CHUNK_SIZE,
        output_chunk_size: DEFAULT_CHUNK_SIZE,
        growth: GrowthPolicy::Exact,
    };

    /// zlib-framed DEFLATE with 16 KiB chunks.
    pub const ZLIB: Self = Self {
        format: Format::Zlib,
        ..Self::RAW
    };

    /// Set the stream framing.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set both the input window and output chunk sizes.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.input_chunk_size = size;
        self.output_chunk_size = size;
        self
    }

    /// Set the input window size.
    pub fn with_input_chunk_size(mut self, size: usize) -> Self {
        self.input_chunk_size = size;
        self
    }

    /// Set the output transfer chunk size.
    pub fn with_output_chunk_size(mut self, size: usize) -> Self {
        self.output_chunk_size = size;
        self
    }

    /// Set the output growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Check that the configuration can drive an operation.
    pub fn validate(&self) -> Result<()> {
        if self.input_chunk_size == 0 {
            return Err(OxiFlateError::invalid_config(
                "input chunk size must be non-zero",
            ));
        }
        if self.output_chunk_size == 0 {
            return Err(OxiFlateError::invalid_config(
                "output chunk size must be non-zero",
            ));
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::RAW
    }
}
