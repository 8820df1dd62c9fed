//! Represents error code tools

use std::fmt::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::error::Error;

/// Error codes reported by the prompter and the console it reads from.
///
/// Numeric values follow JSON-RPC conventions so that an error can be
/// forwarded to the surrounding MCP session as-is.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorCode {
    /// Invalid JSON was received.
    ParseError = -32700,

    /// A raw input could not be coerced into the declared property type.
    InvalidValue = -32602,

    /// Internal error.
    #[default]
    InternalError = -32603,

    /// The input stream or the surrounding session has been closed.
    TransportClosed = -32000,

    /// A required property received an empty value and has no default.
    MissingRequired = -32010,

    /// The schema is missing or is not an object.
    MalformedSchema = -32011,
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code as i32
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = ();

    #[inline]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -32700 => Ok(ErrorCode::ParseError),
            -32602 => Ok(ErrorCode::InvalidValue),
            -32603 => Ok(ErrorCode::InternalError),
            -32000 => Ok(ErrorCode::TransportClosed),
            -32010 => Ok(ErrorCode::MissingRequired),
            -32011 => Ok(ErrorCode::MalformedSchema),
            _ => Err(()),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let code: i32 = (*self).into();
        serializer.serialize_i32(code)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<ErrorCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        ErrorCode::try_from(value).map_err(|_| {
            serde::de::Error::custom(format!("Invalid error code: {value}"))
        })
    }
}

impl Display for ErrorCode {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ParseError => write!(f, "Parse error"),
            ErrorCode::InvalidValue => write!(f, "Invalid value"),
            ErrorCode::InternalError => write!(f, "Internal error"),
            ErrorCode::TransportClosed => write!(f, "Transport closed"),
            ErrorCode::MissingRequired => write!(f, "Required."),
            ErrorCode::MalformedSchema => write!(f, "Malformed schema"),
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Error::new(code, code.to_string())
    }
}
