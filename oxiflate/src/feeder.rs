//! Input windowing.
//!
//! The feeder walks the caller's buffer in fixed-size windows. Windows are
//! borrowed sub-slices, so no input byte is copied before the engine sees
//! it. Once the input is exhausted the feeder keeps returning empty windows,
//! which is how both drivers detect the end of their input.

/// One window of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// Bytes of this window (at most the chunk size).
    pub bytes: &'a [u8],
    /// Whether no input remains after this window.
    pub is_last: bool,
    /// Zero-based window number.
    pub index: usize,
}

impl Window<'_> {
    /// Number of bytes in this window.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether this window is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Splits an input buffer into fixed-size windows.
#[derive(Debug, Clone)]
pub struct ChunkFeeder<'a> {
    remaining: &'a [u8],
    chunk_size: usize,
    windows: usize,
}

impl<'a> ChunkFeeder<'a> {
    /// Create a feeder over `input` with the given window size.
    ///
    /// `chunk_size` must be non-zero; [`StreamConfig::validate`] enforces
    /// this for the drivers.
    ///
    /// [`StreamConfig::validate`]: oxiflate_core::StreamConfig::validate
    pub fn new(input: &'a [u8], chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            remaining: input,
            chunk_size,
            windows: 0,
        }
    }

    /// Take the next window: `min(chunk_size, remaining)` bytes.
    pub fn next_window(&mut self) -> Window<'a> {
        let size = self.chunk_size.min(self.remaining.len());
        let (bytes, rest) = self.remaining.split_at(size);
        self.remaining = rest;

        let window = Window {
            bytes,
            is_last: rest.is_empty(),
            index: self.windows,
        };
        self.windows += 1;
        window
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Number of windows handed out so far.
    pub fn windows_fed(&self) -> usize {
        self.windows
    }
}
