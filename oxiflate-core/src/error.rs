//! Error types for OxiFlate operations.
//!
//! Every failure of a whole-buffer operation is reported as an
//! [`OxiFlateError`]. Callers that only care about the broad cause can use
//! [`OxiFlateError::kind`], which folds the variants into a [`FailureKind`].

use thiserror::Error;

/// Broad classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The codec session could not be created.
    EngineInit,
    /// The compressed stream is malformed or needs a preset dictionary.
    DataCorruption,
    /// The input ended before the stream terminator.
    IncompleteStream,
    /// A buffer length does not fit the 32-bit length field.
    LengthOverflow,
    /// The stream configuration is unusable.
    InvalidConfig,
    /// The codec engine broke its step contract.
    Internal,
}

/// The main error type for OxiFlate operations.
#[derive(Debug, Error)]
pub enum OxiFlateError {
    /// Codec session initialization failed.
    #[error("Codec engine initialization failed: {message}")]
    EngineInit {
        /// Description reported by the engine.
        message: String,
    },

    /// Malformed compressed data.
    #[error("Corrupted data at input offset {offset}: {message}")]
    CorruptedData {
        /// Number of input bytes consumed when the error was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// The stream asks for a preset dictionary, which is not supported.
    #[error("Stream requires a preset dictionary (adler32 {checksum:#010x})")]
    DictionaryRequired {
        /// Adler-32 of the requested dictionary.
        checksum: u32,
    },

    /// The engine ran out of memory while processing the stream.
    ///
    /// Engines that report allocation failure return this. The `flate2`
    /// sessions never do: `flate2` has no recoverable memory error and
    /// aborts on allocation failure like the rest of the process.
    #[error("Codec engine ran out of memory")]
    OutOfMemory,

    /// Input exhausted before the end-of-stream marker.
    #[error("Incomplete stream: {consumed} input bytes consumed, {produced} bytes produced")]
    IncompleteStream {
        /// Input bytes handed to the engine.
        consumed: u64,
        /// Output bytes produced before the input ran out.
        produced: u64,
    },

    /// Input longer than a 32-bit length can describe.
    #[error("Input too large: {len} bytes exceeds {max}", max = u32::MAX)]
    InputTooLarge {
        /// Length of the rejected input.
        len: usize,
    },

    /// Output grew past what a 32-bit length can describe.
    #[error("Output too large: {len} bytes exceeds {max}", max = u32::MAX)]
    OutputTooLarge {
        /// Length the output would have reached.
        len: usize,
    },

    /// Unusable stream configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// The engine violated its step contract.
    #[error("Codec engine contract violated: {message}")]
    EngineContract {
        /// Description of the violation.
        message: String,
    },
}

/// Result type alias for OxiFlate operations.
pub type Result<T> = std::result::Result<T, OxiFlateError>;

impl OxiFlateError {
    /// Create an engine initialization error.
    pub fn engine_init(message: impl Into<String>) -> Self {
        Self::EngineInit {
            message: message.into(),
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create a dictionary required error.
    pub fn dictionary_required(checksum: u32) -> Self {
        Self::DictionaryRequired { checksum }
    }

    /// Create an incomplete stream error.
    pub fn incomplete(consumed: u64, produced: u64) -> Self {
        Self::IncompleteStream { consumed, produced }
    }

    /// Create an input too large error.
    pub fn input_too_large(len: usize) -> Self {
        Self::InputTooLarge { len }
    }

    /// Create an output too large error.
    pub fn output_too_large(len: usize) -> Self {
        Self::OutputTooLarge { len }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an engine contract error.
    pub fn engine_contract(message: impl Into<String>) -> Self {
        Self::EngineContract {
            message: message.into(),
        }
    }

    /// Fold this error into its broad failure kind.
    ///
    /// A dictionary request and an out-of-memory report are both treated as
    /// data corruption, the same way the decompressor handles them.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::EngineInit { .. } => FailureKind::EngineInit,
            Self::CorruptedData { .. } | Self::DictionaryRequired { .. } | Self::OutOfMemory => {
                FailureKind::DataCorruption
            }
            Self::IncompleteStream { .. } => FailureKind::IncompleteStream,
            Self::InputTooLarge { .. } | Self::OutputTooLarge { .. } => {
                FailureKind::LengthOverflow
            }
            Self::InvalidConfig { .. } => FailureKind::InvalidConfig,
            Self::EngineContract { .. } => FailureKind::Internal,
        }
    }
}
