use thiserror::Error;

/// Why a [`Checkpoint`][crate::Checkpoint] could not be imported.
///
/// Importing is the only fallible operation of the crate.
/// A failed import never leaves a half-restored hash behind.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ImportError {
    #[error("checkpoint is truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("checkpoint is oversized: expected {expected} bytes, got {actual}")]
    Oversized { expected: usize, actual: usize },
    #[error("checkpoint does not start with the expected format tag")]
    UnknownFormat,
    #[error("unsupported checkpoint version {0}")]
    UnsupportedVersion(u8),
    #[error(
        "no supported configuration with rate {rate}, domain separator {dsbyte:#04x} and output length {output_len}"
    )]
    UnsupportedConfiguration {
        rate: usize,
        dsbyte: u8,
        output_len: usize,
    },
    #[error("{count} buffered bytes do not fit below the rate of {rate}")]
    BufferOverflow { count: usize, rate: usize },
    #[error("invalid sponge direction {0:#04x}")]
    InvalidDirection(u8),
}
