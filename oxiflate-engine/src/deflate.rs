//! DEFLATE compression session.

use flate2::{Compress, Compression, FlushCompress, Status};
use log::trace;
use oxiflate_core::config::{Format, StreamConfig};
use oxiflate_core::error::{OxiFlateError, Result};
use oxiflate_core::traits::{CompressStatus, CompressionLevel, Compressor, FlushMode};

/// A DEFLATE compression session.
pub struct DeflateSession {
    inner: Compress,
    level: CompressionLevel,
    format: Format,
    finished: bool,
}

impl DeflateSession {
    /// Open a compression session.
    pub fn new(level: CompressionLevel, format: Format) -> Self {
        trace!(
            "deflate session opened: level {}, window bits {}",
            level.level(),
            format.window_bits()
        );
        Self {
            inner: Compress::new(Compression::new(level.level() as u32), format.zlib_header()),
            level,
            format,
            finished: false,
        }
    }

    /// Open a default-level compression session for the framing of `config`.
    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(CompressionLevel::DEFAULT, config.format)
    }

    /// Compression level of this session.
    pub fn level(&self) -> CompressionLevel {
        self.level
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

fn flush_compress(flush: FlushMode) -> FlushCompress {
    match flush {
        FlushMode::None => FlushCompress::None,
        FlushMode::Finish => FlushCompress::Finish,
    }
}

impl Compressor for DeflateSession {
    fn compress(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<(usize, usize, CompressStatus)> {
        if self.finished {
            return Ok((0, 0, CompressStatus::Done));
        }

        let before_in = self.inner.total_in();
        let before_out = self.inner.total_out();

        // A stream error here means the session state is no longer usable.
        let status = self
            .inner
            .compress(input, output, flush_compress(flush))
            .map_err(|e| OxiFlateError::engine_contract(format!("deflate step failed: {e}")))?;

        let consumed = (self.inner.total_in() - before_in) as usize;
        let produced = (self.inner.total_out() - before_out) as usize;

        let status = match status {
            Status::StreamEnd => {
                self.finished = true;
                CompressStatus::Done
            }
            Status::Ok | Status::BufError if produced == output.len() => {
                CompressStatus::NeedsOutput
            }
            Status::Ok | Status::BufError => CompressStatus::NeedsInput,
        };

        trace!(
            "deflate step: {:?}, consumed {}, produced {}, {:?}",
            flush, consumed, produced, status
        );

        Ok((consumed, produced, status))
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.finished = false;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for DeflateSession {
    fn drop(&mut self) {
        trace!(
            "deflate session closed: {} bytes in, {} bytes out, finished: {}",
            self.inner.total_in(),
            self.inner.total_out(),
            self.finished
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raw_stream() {
        let mut session = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
        let mut out = [0u8; 32];
        let (consumed, produced, status) =
            session.compress(&[], &mut out, FlushMode::Finish).unwrap();

        assert_eq!(consumed, 0);
        assert_eq!(status, CompressStatus::Done);
        // A single block with BFINAL set.
        assert!(produced > 0);
        assert_eq!(out[0] & 1, 1);
        assert!(session.is_finished());
    }

    #[test]
    fn test_zlib_header() {
        let mut session = DeflateSession::new(CompressionLevel::DEFAULT, Format::Zlib);
        let mut out = [0u8; 64];
        let (_, produced, status) = session
            .compress(b"abc", &mut out, FlushMode::Finish)
            .unwrap();

        assert_eq!(status, CompressStatus::Done);
        assert_eq!(out[0], 0x78);
        assert_eq!(((out[0] as u16) << 8 | out[1] as u16) % 31, 0);
        // Adler-32 of "abc" closes the stream.
        assert_eq!(&out[produced - 4..produced], &[0x02, 0x4D, 0x01, 0x27]);
    }

    #[test]
    fn test_small_output_chunk_needs_output() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 251) as u8).collect();
        let mut session = DeflateSession::new(CompressionLevel::FAST, Format::Raw);
        let mut out = [0u8; 8];

        let (_, produced, status) = session.compress(&data, &mut out, FlushMode::Finish).unwrap();
        assert_eq!(produced, 8);
        assert_eq!(status, CompressStatus::NeedsOutput);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_no_flush_buffers_until_finish() {
        let mut session = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
        let mut out = [0u8; 64];
        let (consumed, _, status) = session
            .compress(b"buffered", &mut out, FlushMode::None)
            .unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(status, CompressStatus::NeedsInput);
        assert!(!session.is_finished());

        let (_, _, status) = session.compress(&[], &mut out, FlushMode::Finish).unwrap();
        assert_eq!(status, CompressStatus::Done);
        assert!(session.is_finished());
    }

    #[test]
    fn test_finished_session_is_inert() {
        let mut session = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
        let mut out = [0u8; 32];
        session.compress(b"x", &mut out, FlushMode::Finish).unwrap();

        let step = session.compress(b"more", &mut out, FlushMode::None).unwrap();
        assert_eq!(step, (0, 0, CompressStatus::Done));
    }

    #[test]
    fn test_reset_restarts_stream() {
        let mut session = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
        let mut first = [0u8; 64];
        let (_, n1, _) = session
            .compress(b"repeat me", &mut first, FlushMode::Finish)
            .unwrap();

        session.reset();
        assert!(!session.is_finished());
        assert_eq!(session.total_in(), 0);

        let mut second = [0u8; 64];
        let (_, n2, status) = session
            .compress(b"repeat me", &mut second, FlushMode::Finish)
            .unwrap();
        assert_eq!(status, CompressStatus::Done);
        assert_eq!(&first[..n1], &second[..n2]);
    }
}
