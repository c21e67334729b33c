//! Slice extension methods for both stream framings.

use crate::compress::compress_with;
use crate::decompress::decompress_with;
use oxiflate_core::config::StreamConfig;
use oxiflate_core::error::Result;

/// Compress and decompress byte slices in place of the free functions.
///
/// # Example
///
/// ```
/// use oxiflate::DeflateExt;
///
/// let data = b"ABABABABABABABABABAB".to_vec();
/// let zlib = data.zlib_compressed().unwrap();
/// assert_eq!(zlib[0], 0x78);
/// assert_eq!(zlib.zlib_decompressed().unwrap(), data);
/// ```
pub trait DeflateExt {
    /// Compress as a raw DEFLATE stream.
    fn deflate_compressed(&self) -> Result<Vec<u8>>;

    /// Decompress a raw DEFLATE stream.
    fn deflate_decompressed(&self) -> Result<Vec<u8>>;

    /// Compress as a zlib stream (header and Adler-32 trailer).
    fn zlib_compressed(&self) -> Result<Vec<u8>>;

    /// Decompress a zlib stream, checking its Adler-32 trailer.
    fn zlib_decompressed(&self) -> Result<Vec<u8>>;
}

impl DeflateExt for [u8] {
    fn deflate_compressed(&self) -> Result<Vec<u8>> {
        compress_with(self, &StreamConfig::RAW).map(Into::into)
    }

    fn deflate_decompressed(&self) -> Result<Vec<u8>> {
        decompress_with(self, &StreamConfig::RAW).map(Into::into)
    }

    fn zlib_compressed(&self) -> Result<Vec<u8>> {
        compress_with(self, &StreamConfig::ZLIB).map(Into::into)
    }

    fn zlib_decompressed(&self) -> Result<Vec<u8>> {
        decompress_with(self, &StreamConfig::ZLIB).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiflate_core::FailureKind;

    #[test]
    fn test_raw_roundtrip() {
        let data = b"raw deflate, no framing at all".to_vec();
        let packed = data.deflate_compressed().unwrap();
        assert_eq!(packed.deflate_decompressed().unwrap(), data);
    }

    #[test]
    fn test_zlib_roundtrip() {
        let data: Vec<u8> = (0..64u8).collect();
        let packed = data.zlib_compressed().unwrap();
        assert_eq!(packed.zlib_decompressed().unwrap(), data);
    }

    #[test]
    fn test_framings_do_not_mix() {
        let data = b"framing matters".to_vec();
        let zlib = data.zlib_compressed().unwrap();
        let raw = data.deflate_compressed().unwrap();

        // A raw stream starts with BFINAL set, never a valid zlib CM nibble.
        assert!(raw.zlib_decompressed().is_err());
        assert!(zlib.deflate_decompressed().is_err());
    }

    #[test]
    fn test_zlib_trailer_corruption() {
        let data = vec![0x5Au8; 2048];
        let mut packed = data.zlib_compressed().unwrap();
        let last = packed.len() - 2;
        packed[last] ^= 0x01;
        let err = packed.zlib_decompressed().unwrap_err();
        assert_eq!(err.kind(), FailureKind::DataCorruption);
    }
}
