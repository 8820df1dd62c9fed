//! A set of helpers for types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// Represents a declared property type
///
/// The recognized set is closed; anything else is kept verbatim in
/// [`PropertyType::Other`] and is collected the same way as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// String type
    String,

    /// Integer type
    Integer,

    /// Number type
    Number,

    /// Boolean type
    Bool,

    /// Array type
    Array,

    /// Unrecognized type, holds the declared name
    Other(String),
}

impl Default for PropertyType {
    #[inline]
    fn default() -> Self {
        Self::String
    }
}

impl From<&str> for PropertyType {
    #[inline]
    fn from(s: &str) -> Self {
        match s {
            "string" => PropertyType::String,
            "integer" => PropertyType::Integer,
            "number" => PropertyType::Number,
            "boolean" => PropertyType::Bool,
            "array" => PropertyType::Array,
            other => PropertyType::Other(other.into()),
        }
    }
}

impl From<String> for PropertyType {
    #[inline]
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&Value> for PropertyType {
    /// Reads a `type` keyword.
    ///
    /// A nullable union like `["integer", "null"]` resolves to its single
    /// non-`null` member, anything else that is not a string falls back
    /// to [`PropertyType::String`].
    fn from(value: &Value) -> Self {
        match value {
            Value::String(name) => PropertyType::from(name.as_str()),
            Value::Array(names) => {
                let mut members = names
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|name| *name != "null");
                match (members.next(), members.next()) {
                    (Some(name), None) => PropertyType::from(name),
                    _ => PropertyType::String,
                }
            },
            _ => PropertyType::String,
        }
    }
}

impl Display for PropertyType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Integer => write!(f, "integer"),
            PropertyType::Number => write!(f, "number"),
            PropertyType::Bool => write!(f, "boolean"),
            PropertyType::Array => write!(f, "array"),
            PropertyType::Other(name) => write!(f, "{name}"),
        }
    }
}

impl Serialize for PropertyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(PropertyType::from(&value))
    }
}

/// Renders a JSON value the way it is shown to a human: strings without quotes
#[inline]
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
