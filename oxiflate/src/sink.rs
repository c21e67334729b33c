//! Growable output buffer.

use log::trace;
use oxiflate_core::config::GrowthPolicy;
use oxiflate_core::error::{OxiFlateError, Result};
use std::ops::Deref;

/// Accumulates engine output into one contiguous buffer.
///
/// Under [`GrowthPolicy::Exact`] the capacity is raised by exactly the
/// appended byte count, so capacity equals length after every append.
#[derive(Debug)]
pub struct OutputSink {
    buf: Vec<u8>,
    policy: GrowthPolicy,
    appends: usize,
}

impl OutputSink {
    /// Create an empty sink.
    pub fn new(policy: GrowthPolicy) -> Self {
        Self {
            buf: Vec::new(),
            policy,
            appends: 0,
        }
    }

    /// Append produced bytes.
    ///
    /// Fails if the total would no longer fit a 32-bit length.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }

        let new_len = self.buf.len() + bytes.len();
        if u32::try_from(new_len).is_err() {
            return Err(OxiFlateError::output_too_large(new_len));
        }

        if self.policy == GrowthPolicy::Exact {
            self.buf.reserve_exact(bytes.len());
        }
        self.buf.extend_from_slice(bytes);
        self.appends += 1;
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current allocated capacity.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of non-empty appends.
    pub fn appends(&self) -> usize {
        self.appends
    }

    /// Trim to the final length and hand the bytes over.
    pub fn finish(self) -> OutputBuffer {
        let mut data = self.buf;
        data.shrink_to_fit();
        trace!("output sink finished: {} bytes in {} appends", data.len(), self.appends);
        OutputBuffer { data }
    }
}

/// Owned result of a compress or decompress operation.
///
/// The length always fits in a `u32`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Length as the 32-bit count reported across the C boundary.
    pub fn len_u32(&self) -> u32 {
        // OutputSink::append refuses to grow past u32::MAX.
        self.data.len() as u32
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Take the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for OutputBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for OutputBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<OutputBuffer> for Vec<u8> {
    fn from(buffer: OutputBuffer) -> Self {
        buffer.data
    }
}
