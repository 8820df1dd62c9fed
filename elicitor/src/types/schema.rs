//! Utilities for the flat JSON schema subset used by elicitation and tool inputs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use schemars::JsonSchema;
use crate::{
    error::{Error, ErrorCode},
    types::PropertyType,
};

/// Represents a schema of a single top-level property.
///
/// Only `type`, `title`, `description` and `default` are interpreted,
/// other keywords are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub r#type: PropertyType,

    /// A title for the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A human-readable description of the property
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,

    /// Optional default value.
    ///
    /// > **Note:** JSON `null` is treated as "no default".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Represents an object schema: an ordered set of properties plus the names
/// of the required ones.
///
/// Properties keep the order in which they were declared, it drives the
/// order of the prompts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// The properties of the schema in declaration order.
    pub properties: Vec<(String, PropertySchema)>,

    /// The required properties of the schema.
    ///
    /// > **Note:** names listed here are not required to be present in `properties`.
    pub required: Vec<String>,
}

impl PropertySchema {
    /// Creates a new [`PropertySchema`] of the given type
    #[inline]
    pub fn new(r#type: impl Into<PropertyType>) -> Self {
        Self {
            r#type: r#type.into(),
            ..Default::default()
        }
    }

    /// Creates a new string [`PropertySchema`]
    #[inline]
    pub fn string() -> Self {
        Self::new(PropertyType::String)
    }

    /// Creates a new integer [`PropertySchema`]
    #[inline]
    pub fn integer() -> Self {
        Self::new(PropertyType::Integer)
    }

    /// Creates a new number [`PropertySchema`]
    #[inline]
    pub fn number() -> Self {
        Self::new(PropertyType::Number)
    }

    /// Creates a new boolean [`PropertySchema`]
    #[inline]
    pub fn boolean() -> Self {
        Self::new(PropertyType::Bool)
    }

    /// Creates a new array [`PropertySchema`]
    #[inline]
    pub fn array() -> Self {
        Self::new(PropertyType::Array)
    }

    /// Sets a title for the property
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a description for the property
    #[inline]
    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    /// Sets a default value for the property
    #[inline]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into())
            .filter(|v: &Value| !v.is_null());
        self
    }

    /// Returns the title if set, otherwise the provided property `name`
    #[inline]
    pub fn display_title<'a>(&'a self, name: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(name)
    }
}

impl From<&Value> for PropertySchema {
    /// Reads a property definition, never fails.
    ///
    /// Anything that is not an object yields an untyped (string) property.
    fn from(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::string();
        };
        let text = |key: &str| obj
            .get(key)
            .and_then(Value::as_str)
            .map(String::from);
        Self {
            r#type: obj
                .get("type")
                .map(PropertyType::from)
                .unwrap_or_default(),
            title: text("title"),
            descr: text("description"),
            default: obj
                .get("default")
                .filter(|v| !v.is_null())
                .cloned(),
        }
    }
}

impl From<&str> for PropertySchema {
    #[inline]
    fn from(r#type: &str) -> Self {
        Self::new(r#type)
    }
}

impl From<PropertyType> for PropertySchema {
    #[inline]
    fn from(r#type: PropertyType) -> Self {
        Self::new(r#type)
    }
}

impl<'de> Deserialize<'de> for PropertySchema {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

impl ObjectSchema {
    /// Creates a new [`ObjectSchema`] without properties
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`ObjectSchema`] from a type that implements [`JsonSchema`]
    #[inline]
    pub fn of<T: JsonSchema>() -> Self {
        let json_schema = schemars::schema_for!(T);
        Self::from(json_schema.as_value())
    }

    /// Adds a single optional property to the schema
    #[inline]
    pub fn with_prop(mut self, prop: &str, schema: impl Into<PropertySchema>) -> Self {
        let schema = schema.into();
        match self.properties.iter_mut().find(|(name, _)| name == prop) {
            Some((_, existing)) => *existing = schema,
            None => self.properties.push((prop.into(), schema)),
        }
        self
    }

    /// Adds a single required property to the schema
    #[inline]
    pub fn with_required(mut self, prop: &str, schema: impl Into<PropertySchema>) -> Self {
        self = self.with_prop(prop, schema);
        if !self.is_required(prop) {
            self.required.push(prop.into());
        }
        self
    }

    /// Returns _true_ if the schema declares no properties
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns _true_ if `prop` is listed as required
    #[inline]
    pub fn is_required(&self, prop: &str) -> bool {
        self.required.iter().any(|r| r == prop)
    }

    /// Returns the schema of the property `prop` if declared
    #[inline]
    pub fn property(&self, prop: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find_map(|(name, schema)| (name == prop).then_some(schema))
    }

    /// Returns an iterator over the declared properties in declaration order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.properties
            .iter()
            .map(|(name, schema)| (name.as_str(), schema))
    }

    /// Reads an object schema from a JSON value
    ///
    /// Fails with [`ErrorCode::MalformedSchema`] if `value` is not an object.
    /// A malformed `properties` or `required` degrades to an empty part, a property
    /// definition that is not an object becomes an untyped (string) property.
    pub fn parse(value: &Value) -> Result<Self, Error> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::new(ErrorCode::MalformedSchema, "Schema is not an object"))?;
        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props
                .iter()
                .map(|(name, def)| (name.clone(), PropertySchema::from(def)))
                .collect())
            .unwrap_or_default();
        let mut required: Vec<String> = Vec::new();
        for name in obj
            .get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str) {
            if !required.iter().any(|r| r == name) {
                required.push(name.into());
            }
        }
        Ok(Self { properties, required })
    }

    /// Converts the schema into a JSON value
    #[inline]
    pub fn to_value(&self) -> Value {
        let properties = self.properties
            .iter()
            .map(|(name, schema)| (name.clone(), property_to_value(schema)))
            .collect::<Map<_, _>>();
        let mut obj = Map::new();
        obj.insert("type".into(), Value::from("object"));
        obj.insert("properties".into(), Value::Object(properties));
        if !self.required.is_empty() {
            obj.insert("required".into(), Value::from(self.required.clone()));
        }
        Value::Object(obj)
    }
}

impl From<&Value> for ObjectSchema {
    /// Reads an object schema, never fails.
    ///
    /// A schema that is not an object degrades to an empty one, see [`ObjectSchema::parse`].
    fn from(value: &Value) -> Self {
        Self::parse(value).unwrap_or_else(|_err| {
            #[cfg(feature = "tracing")]
            if !value.is_null() {
                tracing::warn!(logger = "elicitor", "{_err}, treating it as empty");
            }
            Self::default()
        })
    }
}

impl From<ObjectSchema> for Value {
    #[inline]
    fn from(schema: ObjectSchema) -> Self {
        schema.to_value()
    }
}

impl Serialize for ObjectSchema {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectSchema {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

#[inline]
fn property_to_value(schema: &PropertySchema) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::from(schema.r#type.to_string()));
    if let Some(title) = &schema.title {
        obj.insert("title".into(), Value::from(title.as_str()));
    }
    if let Some(descr) = &schema.descr {
        obj.insert("description".into(), Value::from(descr.as_str()));
    }
    if let Some(default) = &schema.default {
        obj.insert("default".into(), default.clone());
    }
    Value::Object(obj)
}
