//! Coercion and acceptance policy for a single raw input line

use serde_json::{Number, Value};
use crate::{
    error::{Error, ErrorCode},
    prompter::options::PrompterOptions,
    types::{PropertySchema, PropertyType},
};

/// Outcome of evaluating one raw input line against one property
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Store the value and move on
    Store(Value),

    /// Leave the property unset and move on
    Skip,

    /// Show the diagnostic and ask again
    Reject(Error),
}

/// Applies the acceptance policy in priority order:
/// default on empty input, skip of optional fields, `Required.` on
/// required fields, then type coercion.
pub(crate) fn resolve(
    raw: &str,
    prop: &PropertySchema,
    required: bool,
    options: &PrompterOptions,
) -> Outcome {
    if raw.is_empty() {
        return match &prop.default {
            Some(default) => Outcome::Store(default.clone()),
            None if !required => Outcome::Skip,
            None => Outcome::Reject(ErrorCode::MissingRequired.into()),
        };
    }
    match coerce(raw, &prop.r#type, options) {
        Ok(value) => Outcome::Store(value),
        Err(err) => Outcome::Reject(err),
    }
}

/// Converts a non-empty raw input into a value of the declared type.
///
/// Only `integer` and `number` can fail. `boolean` is a truthy detector
/// (anything outside the truthy tokens is `false`), `array` splits on the
/// separator and drops empty segments, everything else passes through.
pub(crate) fn coerce(
    raw: &str,
    r#type: &PropertyType,
    options: &PrompterOptions,
) -> Result<Value, Error> {
    match r#type {
        PropertyType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .or_else(|err| raw
                .parse::<u64>()
                .map(Value::from)
                .map_err(|_| invalid(r#type, err))),
        PropertyType::Number => {
            let num = raw
                .parse::<f64>()
                .map_err(|err| invalid(r#type, err))?;
            Number::from_f64(num)
                .map(Value::Number)
                .ok_or_else(|| invalid(r#type, "non-finite numbers are not supported"))
        },
        PropertyType::Bool => {
            let token = raw.trim().to_lowercase();
            Ok(Value::Bool(options.truthy.iter().any(|t| *t == token)))
        },
        PropertyType::Array => Ok(raw
            .split(options.array_separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Value::from)
            .collect()),
        PropertyType::String | PropertyType::Other(_) => Ok(Value::from(raw)),
    }
}

#[inline]
fn invalid(r#type: &PropertyType, reason: impl std::fmt::Display) -> Error {
    Error::new(
        ErrorCode::InvalidValue,
        format!("Invalid value for type '{}': {reason}", r#type))
}
