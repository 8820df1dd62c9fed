//! Utilities for Elicitation

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use crate::types::{CollectedValues, ObjectSchema, helpers::display_value};

/// Represents a message issued from the server to elicit additional information from the user via the client.
///
/// Both `snake_case` and `camelCase` field names are accepted on input and
/// normalized here, so nothing downstream depends on the naming variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElicitRequest {
    /// Fields are collected inline, one at a time.
    Form(FormElicitation),

    /// The user confirms out-of-band at an external URL.
    Url(UrlElicitation),
}

/// Form-mode elicitation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormElicitation {
    /// The message to present to the user.
    pub message: String,

    /// The requested schema, kept as delivered.
    ///
    /// > **Note:** A restricted subset of JSON Schema.
    /// > Only top-level properties are allowed, without nesting.
    #[serde(rename = "requestedSchema")]
    pub requested_schema: Value,
}

/// URL-mode elicitation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlElicitation {
    /// The message to present to the user.
    pub message: String,

    /// The URL the user should visit.
    pub url: String,

    /// The tracking identifier of this elicitation.
    #[serde(rename = "elicitationId", skip_serializing_if = "Option::is_none")]
    pub elicitation_id: Option<String>,
}

/// Represents the client's response to an elicitation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElicitResult {
    /// The user action in response to the elicitation.
    pub action: ElicitationAction,

    /// The submitted form data.
    ///
    /// > **Note:** Omitted for URL-mode elicitation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CollectedValues>,
}

/// Represents the user's action in response to an elicitation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ElicitationAction {
    /// User submitted the form/confirmed the action
    Accept,
}

impl From<Value> for ElicitRequest {
    fn from(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        let message = take_text(&mut obj, &["message"]).unwrap_or_default();
        if let Some(url) = take_text(&mut obj, &["url"]).filter(|url| !url.is_empty()) {
            return Self::Url(UrlElicitation {
                message,
                url,
                elicitation_id: take_text(&mut obj, &["elicitationId", "elicitation_id"]),
            });
        }
        let requested_schema = take(&mut obj, &["requestedSchema", "requested_schema"])
            .unwrap_or_default();
        Self::Form(FormElicitation { message, requested_schema })
    }
}

impl<'de> Deserialize<'de> for ElicitRequest {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

impl From<FormElicitation> for ElicitRequest {
    #[inline]
    fn from(form: FormElicitation) -> Self {
        Self::Form(form)
    }
}

impl From<UrlElicitation> for ElicitRequest {
    #[inline]
    fn from(url: UrlElicitation) -> Self {
        Self::Url(url)
    }
}

impl ElicitRequest {
    /// Creates a form-mode [`ElicitRequest`]
    #[inline]
    pub fn form(message: impl Into<String>, schema: impl Into<Value>) -> Self {
        FormElicitation::new(message)
            .with_schema(schema)
            .into()
    }

    /// Creates a URL-mode [`ElicitRequest`]
    #[inline]
    pub fn url(message: impl Into<String>, url: impl Into<String>) -> Self {
        UrlElicitation::new(message, url).into()
    }

    /// Returns the message to present to the user
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Form(form) => &form.message,
            Self::Url(url) => &url.message,
        }
    }

    /// Returns _true_ if this is a URL-mode request
    #[inline]
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl FormElicitation {
    /// Creates a new [`FormElicitation`] without a schema
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            requested_schema: ObjectSchema::new().to_value(),
        }
    }

    /// Sets the requested schema
    #[inline]
    pub fn with_schema(mut self, schema: impl Into<Value>) -> Self {
        self.requested_schema = schema.into();
        self
    }

    /// Returns the normalized view of the requested schema
    #[inline]
    pub fn schema(&self) -> ObjectSchema {
        ObjectSchema::from(&self.requested_schema)
    }
}

impl UrlElicitation {
    /// Creates a new [`UrlElicitation`]
    #[inline]
    pub fn new(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            url: url.into(),
            elicitation_id: None,
        }
    }

    /// Sets the tracking identifier
    #[inline]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.elicitation_id = Some(id.into());
        self
    }
}

impl ElicitResult {
    /// Creates a new accepted [`ElicitResult`] without content
    #[inline]
    pub fn accept() -> Self {
        Self {
            action: ElicitationAction::Accept,
            content: None,
        }
    }

    /// Sets the content of the [`ElicitResult`]
    #[inline]
    pub fn with_content(mut self, content: CollectedValues) -> Self {
        self.content = Some(content);
        self
    }

    /// Deserializes the content of the [`ElicitResult`]
    #[inline]
    pub fn content<T: DeserializeOwned>(&self) -> Option<T> {
        self.content
            .as_ref()
            .and_then(|content| serde_json::from_value(Value::Object(content.clone())).ok())
    }

    /// Returns _true_ if the [`ElicitResult`] is accepted
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.action == ElicitationAction::Accept
    }
}

#[inline]
fn take(obj: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .filter_map(|key| obj.remove(*key))
        .find(|value| !value.is_null())
}

#[inline]
fn take_text(obj: &mut Map<String, Value>, keys: &[&str]) -> Option<String> {
    take(obj, keys).map(|value| display_value(&value))
}
