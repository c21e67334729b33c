//! Whole-buffer decompression.

use crate::feeder::ChunkFeeder;
use crate::sink::{OutputBuffer, OutputSink};
use log::{debug, trace, warn};
use oxiflate_core::config::StreamConfig;
use oxiflate_core::error::{OxiFlateError, Result};
use oxiflate_core::traits::{DecompressStatus, Decompressor};
use oxiflate_engine::InflateSession;

/// Decompress a raw DEFLATE stream.
///
/// Fails with [`OxiFlateError::IncompleteStream`] if the input ends before
/// the end-of-stream marker (an empty input always does), and with a
/// data-corruption error if the stream is malformed. Bytes after the end of
/// the stream are ignored.
pub fn decompress(input: &[u8]) -> Result<OutputBuffer> {
    decompress_with(input, &StreamConfig::RAW)
}

/// Decompress `input` with an explicit configuration.
pub fn decompress_with(input: &[u8], config: &StreamConfig) -> Result<OutputBuffer> {
    decompress_with_engine(input, config, || Ok(InflateSession::from_config(config)))
}

/// Decompress `input` with the engine returned by `open`.
///
/// The session is dropped on every exit path; on failure the partial
/// output is dropped with it.
pub fn decompress_with_engine<D, F>(
    input: &[u8],
    config: &StreamConfig,
    open: F,
) -> Result<OutputBuffer>
where
    D: Decompressor,
    F: FnOnce() -> Result<D>,
{
    config.validate()?;
    if u32::try_from(input.len()).is_err() {
        return Err(OxiFlateError::input_too_large(input.len()));
    }

    debug!("decompress: {} bytes, {:?}", input.len(), config.format);

    let mut session = open().inspect_err(|e| warn!("decompress: {e}"))?;
    let mut sink = OutputSink::new(config.growth);
    let mut chunk = vec![0u8; config.output_chunk_size];
    let mut feeder = ChunkFeeder::new(input, config.input_chunk_size);
    let mut consumed_total = 0u64;
    let mut stream_end = false;

    while !stream_end {
        let window = feeder.next_window();
        if window.is_empty() {
            break;
        }

        let mut offset = 0;
        loop {
            let (consumed, produced, status) = session
                .decompress(&window.bytes[offset..], &mut chunk)
                .inspect_err(|e| {
                    warn!(
                        "decompress: {e} (window {}, {} bytes produced)",
                        window.index,
                        sink.len()
                    )
                })?;
            offset += consumed;
            sink.append(&chunk[..produced])?;

            if status == DecompressStatus::Done {
                stream_end = true;
                break;
            }

            // The engine may drain buffered output without taking input,
            // so any progress means the remaining input is still wanted.
            let output_full = produced == chunk.len();
            let input_left = offset < window.len() && (consumed > 0 || produced > 0);
            if !output_full && !input_left {
                break;
            }
        }
        consumed_total += offset as u64;

        trace!(
            "decompress window {}: consumed {} of {} bytes, output now {} bytes",
            window.index,
            offset,
            window.len(),
            sink.len()
        );

        if stream_end {
            let trailing = window.len() - offset + feeder.remaining();
            if trailing > 0 {
                debug!("decompress: ignoring {trailing} bytes after end of stream");
            }
        } else {
            debug_assert_eq!(offset, window.len(), "engine left window input unconsumed");
            if offset != window.len() {
                return Err(OxiFlateError::engine_contract(format!(
                    "window {} consumed {} of {} bytes",
                    window.index,
                    offset,
                    window.len()
                )));
            }
        }
    }

    drop(session);
    if !stream_end {
        let err = OxiFlateError::incomplete(consumed_total, sink.len() as u64);
        warn!("decompress: {err}");
        return Err(err);
    }

    let output = sink.finish();
    debug!(
        "decompress: {} -> {} bytes in {} windows",
        consumed_total,
        output.len(),
        feeder.windows_fed()
    );
    Ok(output)
}
