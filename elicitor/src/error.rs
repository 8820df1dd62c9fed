//! Represents an error

use std::convert::Infallible;
use std::fmt;
use std::error::Error as StdError;
use std::io::{Error as IoError, ErrorKind};

pub use error_code::ErrorCode;

pub mod error_code;

type BoxError = Box<
    dyn StdError
    + Send
    + Sync
>;

/// Represents an elicitation error
#[derive(Debug)]
pub struct Error {
    pub(crate) code: ErrorCode,
    inner: BoxError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Self {
            inner: err.into(),
            code: ErrorCode::ParseError
        }
    }
}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        let code = match err.kind() {
            ErrorKind::UnexpectedEof
            | ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted => ErrorCode::TransportClosed,
            _ => ErrorCode::InternalError,
        };
        Self {
            inner: err.into(),
            code
        }
    }
}

impl From<Infallible> for Error {
    fn from(infallible: Infallible) -> Error {
        match infallible {}
    }
}

impl Error {
    /// Creates a new [`Error`]
    #[inline]
    pub fn new(code: impl TryInto<ErrorCode>, err: impl Into<BoxError>) -> Error {
        Self {
            inner: err.into(),
            code: code
                .try_into()
                .unwrap_or_default()
        }
    }

    /// Returns the [`ErrorCode`] of this error
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns _true_ if the input source or the surrounding session has gone away
    #[inline]
    pub fn is_transport_closed(&self) -> bool {
        self.code == ErrorCode::TransportClosed
    }
}
