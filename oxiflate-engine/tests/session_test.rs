//! Integration tests stepping the codec sessions by hand.
//!
//! These drive the sessions the way a buffer driver does: small input
//! windows, small output chunks, and a finish flag on the last window.

use oxiflate_core::traits::{
    CompressStatus, CompressionLevel, Compressor, DecompressStatus, Decompressor, FlushMode,
};
use oxiflate_core::{FailureKind, Format};
use oxiflate_engine::{DeflateSession, InflateSession};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(size: usize) -> Vec<u8> {
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    pattern.iter().copied().cycle().take(size).collect()
}

fn deflate_in_windows(session: &mut DeflateSession, data: &[u8], window: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut chunk = [0u8; 13];

    // An empty input still needs one finishing step.
    let windows: Vec<&[u8]> = if data.is_empty() {
        vec![data]
    } else {
        data.chunks(window).collect()
    };

    for (index, w) in windows.iter().enumerate() {
        let flush = if index + 1 == windows.len() {
            FlushMode::Finish
        } else {
            FlushMode::None
        };
        let mut pos = 0;
        loop {
            let (consumed, produced, status) =
                session.compress(&w[pos..], &mut chunk, flush).unwrap();
            pos += consumed;
            out.extend_from_slice(&chunk[..produced]);
            if status == CompressStatus::Done {
                return out;
            }
            if produced < chunk.len() && pos == w.len() {
                break;
            }
        }
    }

    panic!("finish never reached stream end");
}

fn inflate_in_windows(session: &mut InflateSession, data: &[u8], window: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut chunk = [0u8; 11];

    for w in data.chunks(window) {
        let mut pos = 0;
        loop {
            let (consumed, produced, status) = session.decompress(&w[pos..], &mut chunk).unwrap();
            pos += consumed;
            out.extend_from_slice(&chunk[..produced]);
            if status == DecompressStatus::Done {
                return out;
            }
            if produced < chunk.len() && pos == w.len() {
                break;
            }
        }
    }

    panic!("stream did not terminate");
}

#[test]
fn test_windowed_roundtrip_raw() {
    init_logger();
    let data = text(10_000);

    let mut deflater = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
    let compressed = deflate_in_windows(&mut deflater, &data, 97);
    assert!(deflater.is_finished());
    assert_eq!(deflater.total_in(), data.len() as u64);
    assert_eq!(deflater.total_out(), compressed.len() as u64);

    let mut inflater = InflateSession::new(Format::Raw);
    let decompressed = inflate_in_windows(&mut inflater, &compressed, 5);
    assert!(inflater.is_finished());
    assert_eq!(decompressed, data);
}

#[test]
fn test_windowed_roundtrip_zlib() {
    init_logger();
    let data = text(3_000);

    let mut deflater = DeflateSession::new(CompressionLevel::BEST, Format::Zlib);
    let compressed = deflate_in_windows(&mut deflater, &data, 1000);

    let mut inflater = InflateSession::new(Format::Zlib);
    assert_eq!(inflate_in_windows(&mut inflater, &compressed, 64), data);
}

#[test]
fn test_empty_roundtrip() {
    init_logger();
    let mut deflater = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
    let compressed = deflate_in_windows(&mut deflater, &[], 16);
    assert!(!compressed.is_empty());

    let mut inflater = InflateSession::new(Format::Raw);
    assert!(inflate_in_windows(&mut inflater, &compressed, 16).is_empty());
}

#[test]
fn test_interop_with_flate2_reader() {
    use std::io::Read;

    init_logger();
    let data = text(50_000);
    let mut deflater = DeflateSession::new(CompressionLevel::DEFAULT, Format::Raw);
    let compressed = deflate_in_windows(&mut deflater, &data, 4096);

    let mut decoded = Vec::new();
    flate2::read::DeflateDecoder::new(&compressed[..])
        .read_to_end(&mut decoded)
        .unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_zlib_checksum_mismatch() {
    init_logger();
    let data = text(500);
    let mut deflater = DeflateSession::new(CompressionLevel::DEFAULT, Format::Zlib);
    let mut compressed = deflate_in_windows(&mut deflater, &data, 500);

    let last = compressed.len() - 1;
    compressed[last] ^= 0xFF;

    let mut inflater = InflateSession::new(Format::Zlib);
    let mut out = vec![0u8; 1024];
    let err = inflater.decompress(&compressed, &mut out).unwrap_err();
    assert_eq!(err.kind(), FailureKind::DataCorruption);
}
