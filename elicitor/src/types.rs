//! Types exchanged with the surrounding MCP session
//!
//! See the [specification](https://github.com/modelcontextprotocol/specification) for details

use serde_json::{Map, Value};

pub use helpers::PropertyType;
pub use schema::{ObjectSchema, PropertySchema};
pub use elicitation::{
    ElicitRequest,
    FormElicitation,
    UrlElicitation,
    ElicitationAction,
    ElicitResult,
};
pub use tool::{
    Tool,
    ListToolsResult,
    CallToolRequestParams,
};

pub mod schema;
pub mod elicitation;
pub mod tool;
pub(crate) mod helpers;

/// Values collected for one schema, keyed by property name, in prompt order
pub type CollectedValues = Map<String, Value>;
