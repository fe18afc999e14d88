//! Normalisation of backend response bodies.
//!
//! The backend answers either with the record itself, with a bare array, or
//! wraps it: `{ "products": [...] }`, `{ "product": {...} }`,
//! `{ "resource": ... }`, `{ "data": ... }`. Callers only ever see [`Payload`].

use serde_json::Value;
use thiserror::Error;

use super::entity::json_kind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("expected a single {0} record")]
    ExpectedOne(String),

    #[error("expected a list of {0}")]
    ExpectedMany(String),
}

/// Unwrapped response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    One(Value),
    Many(Vec<Value>),
    Empty,
}

impl Payload {
    pub fn into_one(self, what: &str) -> Result<Value, EnvelopeError> {
        match self {
            Payload::One(value) => Ok(value),
            Payload::Many(_) | Payload::Empty => Err(EnvelopeError::ExpectedOne(what.to_string())),
        }
    }

    /// An empty body is an empty list
    pub fn into_many(self, what: &str) -> Result<Vec<Value>, EnvelopeError> {
        match self {
            Payload::Many(values) => Ok(values),
            Payload::Empty => Ok(Vec::new()),
            Payload::One(_) => Err(EnvelopeError::ExpectedMany(what.to_string())),
        }
    }
}

/// Wrapper keys are tried in order: plural, `resource`, singular, `data`.
pub fn unwrap_envelope(body: Value, plural_key: &str, singular_key: &str) -> Payload {
    match body {
        Value::Null => Payload::Empty,
        Value::Array(items) => Payload::Many(items),
        Value::Object(mut object) => {
            for key in [plural_key, "resource", singular_key, "data"] {
                if key.is_empty() {
                    continue;
                }
                match object.remove(key) {
                    Some(Value::Array(items)) => return Payload::Many(items),
                    Some(inner @ Value::Object(_)) => return Payload::One(inner),
                    Some(other) => {
                        // scalar under a wrapper key is an ordinary field
                        object.insert(key.to_string(), other);
                    }
                    None => {}
                }
            }
            Payload::One(Value::Object(object))
        }
        other => {
            log::debug!("unexpected {} response body", json_kind(&other));
            Payload::One(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plural_wrapper() {
        let payload = unwrap_envelope(json!({"sections": [{"_id": "1"}]}), "sections", "section");
        assert_eq!(payload, Payload::Many(vec![json!({"_id": "1"})]));
    }

    #[test]
    fn test_singular_wrapper() {
        let payload = unwrap_envelope(
            json!({"message": "ok", "product": {"id": "1", "name": "Basil"}}),
            "products",
            "product",
        );
        assert_eq!(payload, Payload::One(json!({"id": "1", "name": "Basil"})));
    }

    #[test]
    fn test_resource_wrapper_and_bare_array() {
        assert_eq!(
            unwrap_envelope(json!({"resource": [1, 2]}), "events", "event"),
            Payload::Many(vec![json!(1), json!(2)])
        );
        assert_eq!(
            unwrap_envelope(json!([{"id": 1}]), "events", "event"),
            Payload::Many(vec![json!({"id": 1})])
        );
    }

    #[test]
    fn test_direct_object_keeps_scalar_named_like_wrapper() {
        let body = json!({"pageTitle": "About", "data": "plain text"});
        assert_eq!(
            unwrap_envelope(body.clone(), "pages", "page"),
            Payload::One(body)
        );
    }

    #[test]
    fn test_empty_body_is_empty_list() {
        let payload = unwrap_envelope(Value::Null, "products", "product");
        assert_eq!(payload.into_many("products").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn test_shape_mismatch() {
        let payload = unwrap_envelope(json!({"id": "1"}), "products", "product");
        assert_eq!(
            payload.into_many("products"),
            Err(EnvelopeError::ExpectedMany("products".into()))
        );
    }
}
