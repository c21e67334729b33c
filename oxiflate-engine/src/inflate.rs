//! INFLATE decompression session.

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;
use oxiflate_core::config::{Format, StreamConfig};
use oxiflate_core::error::{OxiFlateError, Result};
use oxiflate_core::traits::{DecompressStatus, Decompressor};

/// An INFLATE decompression session.
///
/// Preset dictionaries are not supported: a stream that asks for one is
/// reported as [`OxiFlateError::DictionaryRequired`]. Allocation failure
/// aborts inside `flate2`, so this session never returns
/// [`OxiFlateError::OutOfMemory`].
pub struct InflateSession {
    inner: Decompress,
    format: Format,
    finished: bool,
}

impl InflateSession {
    /// Open a decompression session.
    pub fn new(format: Format) -> Self {
        trace!(
            "inflate session opened: window bits {}",
            format.window_bits()
        );
        Self {
            inner: Decompress::new(format.zlib_header()),
            format,
            finished: false,
        }
    }

    /// Open a decompression session for the framing of `config`.
    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.format)
    }

    /// Stream framing of this session.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Total input bytes consumed so far.
    pub fn total_in(&self) -> u64 {
        self.inner.total_in()
    }

    /// Total output bytes produced so far.
    pub fn total_out(&self) -> u64 {
        self.inner.total_out()
    }
}

impl Decompressor for InflateSession {
    fn decompress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(usize, usize, DecompressStatus)> {
        if self.finished {
            return Ok((0, 0, DecompressStatus::Done));
        }

        let before_in = self.inner.total_in();
        let before_out = self.inner.total_out();

        let status = match self.inner.decompress(input, output, FlushDecompress::None) {
            Ok(status) => status,
            Err(e) => {
                return Err(match e.needs_dictionary() {
                    Some(checksum) => OxiFlateError::dictionary_required(checksum),
                    None => OxiFlateError::corrupted(self.inner.total_in(), e.to_string()),
                });
            }
        };

        let consumed = (self.inner.total_in() - before_in) as usize;
        let produced = (self.inner.total_out() - before_out) as usize;

        let status = match status {
            Status::StreamEnd => {
                self.finished = true;
                DecompressStatus::Done
            }
            Status::Ok | Status::BufError if produced == output.len() => {
                DecompressStatus::NeedsOutput
            }
            Status::Ok | Status::BufError => DecompressStatus::NeedsInput,
        };

        trace!(
            "inflate step: consumed {}, produced {}, {:?}",
            consumed, produced, status
        );

        Ok((consumed, produced, status))
    }

    fn reset(&mut self) {
        self.inner.reset(self.format.zlib_header());
        self.finished = false;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for InflateSession {
    fn drop(&mut self) {
        trace!(
            "inflate session closed: {} bytes in, {} bytes out, finished: {}",
            self.inner.total_in(),
            self.inner.total_out(),
            self.finished
        );
    }
}
