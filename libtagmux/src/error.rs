use thiserror::Error;

/// Result type alias using `TagError`
pub type Result<T> = std::result::Result<T, TagError>;

/// Errors produced while reading tag metadata from a stream
#[derive(Error, Debug)]
pub enum TagError {
    /// The FLAC signature is absent at the expected position
    #[error("expected a FLAC stream marker")]
    InvalidStreamMarker,

    /// The stream ended before a declared length was satisfied
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,

    /// A block's declared lengths are internally inconsistent
    #[error("malformed metadata block: {0}")]
    MalformedBlock(&'static str),

    /// I/O error from the underlying stream
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
