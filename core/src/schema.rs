//! Declarative request shapes and the structural validator that checks
//! payloads against them.
//!
//! A `Schema` is a static list of `FieldSpec`s. `Schema::validate` walks a
//! `serde_json::Value` once, collects every violation, and returns a
//! normalized copy holding only the declared fields. Undeclared keys are
//! dropped at every level and absent optional fields stay absent. `null` is
//! never accepted in place of a value.

use serde_json::{Map, Value};

use crate::error::{FieldIssue, IssueKind, ValidationError};

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array(&'static FieldKind),
    Object(&'static Schema),
    /// Opaque passthrough, any JSON value.
    Any,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array(_) => "array",
            FieldKind::Object(_) => "object",
            FieldKind::Any => "any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Check `payload` against this schema.
    ///
    /// Returns the normalized payload, or every violation found.
    pub fn validate(&self, payload: &Value) -> Result<Value, ValidationError> {
        let mut issues = Vec::new();
        let normalized = check_object(self, payload, "", &mut issues);
        match normalized {
            Some(value) if issues.is_empty() => Ok(value),
            _ => Err(ValidationError {
                schema: self.name,
                issues,
            }),
        }
    }
}

fn check_object(
    schema: &Schema,
    value: &Value,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Value> {
    let Some(map) = value.as_object() else {
        issues.push(invalid_type(path, "object", value));
        return None;
    };

    let mut normalized = Map::new();
    for field in schema.fields {
        let field_path = if path.is_empty() {
            field.name.to_string()
        } else {
            format!("{path}.{}", field.name)
        };
        match map.get(field.name) {
            Some(present) => {
                if let Some(checked) = check_value(field.kind, present, &field_path, issues) {
                    normalized.insert(field.name.to_string(), checked);
                }
            }
            None if field.required => issues.push(FieldIssue {
                path: field_path,
                kind: IssueKind::Missing,
            }),
            None => {}
        }
    }
    Some(Value::Object(normalized))
}

fn check_value(
    kind: FieldKind,
    value: &Value,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Value> {
    match (kind, value) {
        (FieldKind::Any, _)
        | (FieldKind::String, Value::String(_))
        | (FieldKind::Number, Value::Number(_))
        | (FieldKind::Boolean, Value::Bool(_)) => Some(value.clone()),
        (FieldKind::Array(item), Value::Array(items)) => {
            let checked = items
                .iter()
                .enumerate()
                .filter_map(|(index, element)| {
                    check_value(*item, element, &format!("{path}[{index}]"), issues)
                })
                .collect();
            Some(Value::Array(checked))
        }
        (FieldKind::Object(schema), _) => check_object(schema, value, path, issues),
        (expected, _) => {
            issues.push(invalid_type(path, expected.describe(), value));
            None
        }
    }
}

fn invalid_type(path: &str, expected: &'static str, received: &Value) -> FieldIssue {
    FieldIssue {
        path: path.to_string(),
        kind: IssueKind::InvalidType {
            expected,
            received: json_type(received),
        },
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
