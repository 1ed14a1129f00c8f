//! Error taxonomy for the container codec.

use thiserror::Error;

/// Everything the codec can fail with.
///
/// None of these are retryable: they all describe a problem with the input
/// handed to the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Input is shorter than the magic, or the magic does not match.
    #[error("header mismatch: {0}")]
    HeaderMismatch(String),
    /// Size prefix missing, block malformed or truncated, or the block
    /// decompressed to a length other than the declared size.
    #[error("decompression error: {0}")]
    Decompression(String),
    /// The block compressor could not produce a payload.
    #[error("compression error: {0}")]
    Compression(String),
    /// Decompressed bytes are not valid UTF-8 JSON.
    #[error("JSON decode error: {0}")]
    JsonDecode(#[source] serde_json::Error),
    /// A value could not be serialized to JSON.
    #[error("JSON encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
}

/// Payload-free discriminant of [`Error`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    HeaderMismatch,
    Decompression,
    Compression,
    JsonDecode,
    JsonEncode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::HeaderMismatch(_) => ErrorKind::HeaderMismatch,
            Error::Decompression(_) => ErrorKind::Decompression,
            Error::Compression(_) => ErrorKind::Compression,
            Error::JsonDecode(_) => ErrorKind::JsonDecode,
            Error::JsonEncode(_) => ErrorKind::JsonEncode,
        }
    }
}

/// Result alias used throughout mozlz4_core.
pub type Result<T> = std::result::Result<T, Error>;
