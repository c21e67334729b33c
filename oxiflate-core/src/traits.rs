//! Step traits for codec engines.
//!
//! A codec engine is driven one step at a time: each call hands it a slice
//! of input and a fixed-size output chunk, and it reports how many bytes it
//! consumed, how many it produced, and where the stream stands. The buffer
//! drivers in the `oxiflate` crate only ever talk to engines through these
//! traits.

use crate::error::Result;

/// Where an INFLATE stream stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressStatus {
    /// Every offered byte was used; feed the next window.
    NeedsInput,
    /// The output chunk was filled; step again to drain it.
    NeedsOutput,
    /// The final block has been decoded (and the trailer checked, if any).
    Done,
}

/// Where a DEFLATE stream stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressStatus {
    /// Ready for the next window.
    NeedsInput,
    /// The output chunk was filled; step again to drain it.
    NeedsOutput,
    /// The final block (and trailer, if any) has been written.
    Done,
}

/// What the compressor should do with buffered input after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    /// Keep buffering; more windows follow.
    #[default]
    None,
    /// Last window: emit everything and terminate the stream.
    Finish,
}

/// INFLATE side of a codec session.
///
/// `decompress` returns `(consumed, produced, status)`. While `output` has
/// room an implementation uses all of `input`; after the end of the stream
/// it keeps answering `(0, 0, Done)`.
pub trait Decompressor {
    /// Decode from `input` into the `output` chunk.
    fn decompress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(usize, usize, DecompressStatus)>;

    /// Forget the current stream and start over.
    fn reset(&mut self);

    /// `true` once [`DecompressStatus::Done`] has been reported.
    fn is_finished(&self) -> bool;
}

/// DEFLATE side of a codec session.
///
/// Same contract as [`Decompressor`]; [`CompressStatus::Done`] is only
/// reached after a [`FlushMode::Finish`] step has drained everything.
pub trait Compressor {
    /// Encode from `input` into the `output` chunk.
    fn compress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<(usize, usize, CompressStatus)>;

    /// Forget the current stream and start over.
    fn reset(&mut self);

    /// `true` once [`CompressStatus::Done`] has been reported.
    fn is_finished(&self) -> bool;
}

/// DEFLATE effort, 0 (stored blocks) through 9.
///
/// The buffer API always compresses at [`CompressionLevel::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Stored blocks only.
    pub const NONE: Self = Self(0);
    /// Level 1.
    pub const FAST: Self = Self(1);
    /// Level 6, zlib's default.
    pub const DEFAULT: Self = Self(6);
    /// Level 9.
    pub const BEST: Self = Self(9);

    /// Clamp `level` into 0..=9.
    pub const fn new(level: u8) -> Self {
        Self(if level > 9 { 9 } else { level })
    }

    /// Numeric level.
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}
