//! Error types for building, applying and persisting Huffman codes.

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A tree was requested for an empty alphabet, or a frequency table was
    /// given a zero count.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The symbol being encoded has no entry in the code table.
    #[error("no code for symbol with ordinal {ordinal}")]
    UnknownSymbol { ordinal: u32 },

    /// A persisted artifact could not be parsed.
    #[error("malformed artifact at line {line}: {reason}")]
    MalformedArtifact { line: usize, reason: String },

    /// Decoding ended with bits that do not form a complete code.
    #[error("truncated stream: {pending} trailing bit(s) do not form a code")]
    TruncatedStream { pending: usize },

    /// The decode cursor outgrew every code in the table.
    #[error("invalid code ending at bit offset {offset}")]
    InvalidCode { offset: usize },

    /// An I/O error while reading or writing an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedArtifact {
            line,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
