use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

use super::entity::FieldValue;

/// Формат дат во всех формах (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Date,
    Email,
    Flag,
}

impl FieldKind {
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Flag => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn format_hint(&self) -> Option<&'static str> {
        match self {
            FieldKind::Date => Some("YYYY-MM-DD"),
            FieldKind::Email => Some("name@example.com"),
            _ => None,
        }
    }
}

/// Per-field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    MissingField(String),

    #[error("{field} must be in {expected} format")]
    InvalidFormat {
        field: String,
        expected: &'static str,
    },
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField(field) => field,
            FieldError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Описание одного поля формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub searchable: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            searchable: false,
            placeholder: "",
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Flag)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Validate one value against this field. Empty optional fields are never format-checked.
    pub fn check(&self, value: Option<&FieldValue>) -> Option<FieldError> {
        let blank = value.map_or(true, FieldValue::is_blank);
        if blank {
            return if self.required && self.kind != FieldKind::Flag {
                Some(FieldError::MissingField(self.name.to_string()))
            } else {
                None
            };
        }

        let text = value.and_then(FieldValue::as_text).map(str::trim);
        let well_formed = match (self.kind, text) {
            (FieldKind::Date, Some(text)) => NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok(),
            (FieldKind::Date, None) => false,
            (FieldKind::Email, Some(text)) => looks_like_email(text),
            (FieldKind::Email, None) => false,
            _ => true,
        };

        if well_formed {
            None
        } else {
            Some(FieldError::InvalidFormat {
                field: self.name.to_string(),
                expected: self.kind.format_hint().unwrap_or("text"),
            })
        }
    }
}

fn looks_like_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !text.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Упорядоченный набор полей ресурса
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        debug_assert!(
            fields
                .iter()
                .enumerate()
                .all(|(i, f)| fields[..i].iter().all(|g| g.name != f.name)),
            "duplicate field name in schema"
        );
        Self { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn searchable(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.searchable).map(|f| f.name)
    }

    /// Declared fields only, missing ones filled with the kind's default
    pub fn project(&self, values: &BTreeMap<String, FieldValue>) -> BTreeMap<String, FieldValue> {
        self.fields
            .iter()
            .map(|spec| {
                let value = values
                    .get(spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.kind.default_value());
                (spec.name.to_string(), value)
            })
            .collect()
    }

    pub fn defaults(&self) -> BTreeMap<String, FieldValue> {
        self.project(&BTreeMap::new())
    }

    pub fn validate(&self, values: &BTreeMap<String, FieldValue>) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|spec| spec.check(values.get(spec.name)))
            .collect()
    }
}
