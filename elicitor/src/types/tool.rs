//! Represents an MCP tool as seen by a client

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::types::{CollectedValues, ObjectSchema};

/// Represents a tool that the server is capable of calling. Part of the [`ListToolsResult`].
///
/// See the [schema](https://github.com/modelcontextprotocol/specification/blob/main/schema/) for details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// The name of the tool.
    pub name: String,

    /// A human-readable title of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A human-readable description of the tool.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,

    /// A JSON Schema object defining the expected parameters for the tool, kept as delivered.
    ///
    /// Accepted as both `inputSchema` and `input_schema`.
    #[serde(rename = "inputSchema", alias = "input_schema", default)]
    pub input_schema: Value,
}

/// A response to a request to list the tools available on the server.
///
/// See the [schema](https://github.com/modelcontextprotocol/specification/blob/main/schema/) for details
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
    /// The server's response to a tools/list request from the client.
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Used by the client to invoke a tool provided by the server.
///
/// See the [schema](https://github.com/modelcontextprotocol/specification/blob/main/schema/) for details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolRequestParams {
    /// Tool name.
    pub name: String,

    /// Collected tool arguments.
    #[serde(rename = "arguments", default)]
    pub args: CollectedValues,
}

impl Tool {
    /// Creates a new [`Tool`]
    #[inline]
    pub fn new(name: impl Into<String>, input_schema: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            title: None,
            descr: None,
            input_schema: input_schema.into(),
        }
    }

    /// Sets a description for the tool
    #[inline]
    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    /// Returns the normalized view of the input schema
    #[inline]
    pub fn schema(&self) -> ObjectSchema {
        ObjectSchema::from(&self.input_schema)
    }
}

impl From<Vec<Tool>> for ListToolsResult {
    #[inline]
    fn from(tools: Vec<Tool>) -> Self {
        Self { tools }
    }
}

impl CallToolRequestParams {
    /// Creates a new [`CallToolRequestParams`]
    #[inline]
    pub fn new(name: impl Into<String>, args: CollectedValues) -> Self {
        Self { name: name.into(), args }
    }
}
