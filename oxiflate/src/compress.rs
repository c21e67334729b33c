//! Whole-buffer compression.

use crate::feeder::ChunkFeeder;
use crate::sink::{OutputBuffer, OutputSink};
use log::{debug, trace, warn};
use oxiflate_core::config::StreamConfig;
use oxiflate_core::error::{OxiFlateError, Result};
use oxiflate_core::traits::{CompressStatus, Compressor, FlushMode};
use oxiflate_engine::DeflateSession;

/// Compress `input` into a raw DEFLATE stream at the default level.
///
/// An empty input still yields a valid (non-empty) stream.
///
/// # Example
///
/// ```
/// let compressed = oxiflate::compress(b"Hello, World! Hello, World!").unwrap();
/// let decompressed = oxiflate::decompress(&compressed).unwrap();
/// assert_eq!(decompressed.as_slice(), b"Hello, World! Hello, World!");
/// ```
pub fn compress(input: &[u8]) -> Result<OutputBuffer> {
    compress_with(input, &StreamConfig::RAW)
}

/// Compress `input` with an explicit configuration.
pub fn compress_with(input: &[u8], config: &StreamConfig) -> Result<OutputBuffer> {
    compress_with_engine(input, config, || Ok(DeflateSession::from_config(config)))
}

/// Compress `input` with the engine returned by `open`.
///
/// The session is opened once, stepped window by window, and dropped on
/// every exit path.
pub fn compress_with_engine<C, F>(
    input: &[u8],
    config: &StreamConfig,
    open: F,
) -> Result<OutputBuffer>
where
    C: Compressor,
    F: FnOnce() -> Result<C>,
{
    config.validate()?;
    if u32::try_from(input.len()).is_err() {
        return Err(OxiFlateError::input_too_large(input.len()));
    }

    debug!("compress: {} bytes, {:?}", input.len(), config.format);

    let mut session = open().inspect_err(|e| warn!("compress: {e}"))?;
    let mut sink = OutputSink::new(config.growth);
    let mut chunk = vec![0u8; config.output_chunk_size];
    let mut feeder = ChunkFeeder::new(input, config.input_chunk_size);

    loop {
        let window = feeder.next_window();
        let flush = if window.is_last {
            FlushMode::Finish
        } else {
            FlushMode::None
        };

        // Step until the engine stops filling the output chunk.
        let mut offset = 0;
        let mut status;
        loop {
            let (consumed, produced, step) =
                session.compress(&window.bytes[offset..], &mut chunk, flush)?;
            offset += consumed;
            sink.append(&chunk[..produced])?;
            status = step;

            // The engine may drain buffered output without taking input,
            // so any progress means the remaining input is still wanted.
            let output_full = produced == chunk.len();
            let input_left = offset < window.len() && (consumed > 0 || produced > 0);
            if !output_full && !input_left {
                break;
            }
        }

        trace!(
            "compress window {}: {} bytes, {:?}, output now {} bytes",
            window.index,
            window.len(),
            flush,
            sink.len()
        );

        debug_assert_eq!(offset, window.len(), "engine left window input unconsumed");
        if offset != window.len() {
            return Err(OxiFlateError::engine_contract(format!(
                "window {} consumed {} of {} bytes",
                window.index,
                offset,
                window.len()
            )));
        }

        if window.is_last {
            debug_assert_eq!(status, CompressStatus::Done, "no stream end after finish");
            if status != CompressStatus::Done {
                return Err(OxiFlateError::engine_contract(
                    "finish did not reach stream end",
                ));
            }
            break;
        }
    }

    drop(session);
    let output = sink.finish();
    debug!(
        "compress: {} -> {} bytes in {} windows",
        input.len(),
        output.len(),
        feeder.windows_fed()
    );
    Ok(output)
}
