//! Codec error types.

use std::fmt;
use std::io;

/// Top-level codec error.
///
/// Corruption is only ever reported by `decode`; `encode` accepts any finite
/// byte sequence and can fail solely through its source or sink.
#[derive(Debug)]
pub enum Error {
    /// The 257-byte header is truncated, its `ignore_bits` field is out of
    /// range, or the length table does not describe a complete prefix code.
    CorruptHeader,
    /// The compressed body contains bits that do not resolve to a symbol of
    /// the header's code.
    CorruptMessage,
    /// The underlying byte source or sink failed. Fatal for the in-flight
    /// operation; no partial output is guaranteed to be valid.
    Io(io::Error),
}

impl Error {
    /// True for the two corruption kinds, false for I/O failures.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::CorruptHeader | Error::CorruptMessage)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CorruptHeader => write!(f, "corrupted stream header"),
            Error::CorruptMessage => write!(f, "corrupted stream body"),
            Error::Io(e) => write!(f, "stream I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
