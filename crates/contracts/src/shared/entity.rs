use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::envelope::EnvelopeError;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор записи, выданный сервером. Непрозрачен и неизменяем.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts non-empty strings and numbers (the gallery backend uses numeric ids)
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        EntityId::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom("entity id must be a non-empty string or a number")
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Field values
// ============================================================================

/// Scalar value of one entity field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(Number),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Scalars only; `null`, arrays and objects are not field values
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(FieldValue::Flag(*b)),
            Value::Number(n) => Some(FieldValue::Number(n.clone())),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Text(s) => Value::String(s.clone()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Blank means "nothing entered": only whitespace-only text qualifies
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) | FieldValue::Number(_) => false,
        }
    }

    /// Representation used for text inputs and multipart form fields
    pub fn to_form_value(&self) -> String {
        match self {
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// `needle` must already be lowercased
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::Number(n) => n.to_string().contains(needle),
            FieldValue::Flag(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

// ============================================================================
// Image reference
// ============================================================================

/// Изображение записи: уже сохранённое на сервере или ожидающее загрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Pending { preview: String },
}

impl ImageRef {
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Url(url) => url,
            ImageRef::Pending { preview } => preview,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageRef::Pending { .. })
    }

    /// Server paths like `/uploads/x.png` are relative to the API host
    pub fn resolve(&self, api_base: &str) -> String {
        match self {
            ImageRef::Url(url) if url.starts_with('/') => {
                format!("{}{}", api_base.trim_end_matches('/'), url)
            }
            other => other.src().to_string(),
        }
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Любая запись, принадлежащая серверу (товар, событие, сертификат, секция...)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub id: Option<EntityId>,
    pub fields: BTreeMap<String, FieldValue>,
    pub image: Option<ImageRef>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<EntityId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Builder-style field setter
    pub fn field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image = Some(ImageRef::Url(url.into()));
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text of a field, empty when missing or not text
    pub fn text(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    /// Decode a server record. Accepts `id` or `_id`; `null` fields count as absent.
    pub fn from_json(value: &Value, image_key: Option<&str>) -> Result<Self, EnvelopeError> {
        let object = value
            .as_object()
            .ok_or_else(|| EnvelopeError::NotAnObject(json_kind(value)))?;

        let id = object
            .get("id")
            .and_then(EntityId::from_json)
            .or_else(|| object.get("_id").and_then(EntityId::from_json));

        let image = image_key
            .and_then(|key| object.get(key))
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
            .map(|url| ImageRef::Url(url.to_string()));

        let fields = object
            .iter()
            .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "_id")
            .filter(|(key, _)| Some(key.as_str()) != image_key)
            .filter_map(|(key, value)| FieldValue::from_json(value).map(|v| (key.clone(), v)))
            .collect();

        Ok(Self { id, fields, image })
    }

    /// JSON body with the entity's fields. The id is not part of the body unless `id_key` is given.
    pub fn to_json(&self, id_key: Option<&str>) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.fields {
            object.insert(name.clone(), value.to_json());
        }
        if let (Some(key), Some(id)) = (id_key, &self.id) {
            object.insert(key.to_string(), Value::String(id.as_str().to_string()));
        }
        Value::Object(object)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
