//! JSON Schema collaborator: loads the WAP schema and extracts the declared
//! type of each top-level property. No validation happens here.

use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Null,
    Array(Box<FieldType>),
    /// Missing or unrecognised `type`.
    Any,
}

impl FieldType {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("string") => FieldType::String,
            Some("integer") => FieldType::Integer,
            Some("number") => FieldType::Number,
            Some("boolean") => FieldType::Boolean,
            Some("object") => FieldType::Object,
            Some("null") => FieldType::Null,
            Some("array") => FieldType::Array(Box::new(FieldType::Any)),
            _ => FieldType::Any,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Number => f.write_str("number"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Object => f.write_str("object"),
            FieldType::Null => f.write_str("null"),
            FieldType::Array(inner) => write!(f, "array<{inner}>"),
            FieldType::Any => f.write_str("any"),
        }
    }
}

/// Map each top-level property of an object schema to its type.
/// Array properties carry the type of their `items`.
pub fn extract_types(schema: &Value) -> BTreeMap<String, FieldType> {
    let mut types = BTreeMap::new();

    if schema.get("type").and_then(Value::as_str) != Some("object") {
        return types;
    }

    let Some(props) = schema.get("properties").and_then(Value::as_object) else {
        return types;
    };

    for (name, prop) in props {
        let type_name = prop.get("type").and_then(Value::as_str);
        let field = if type_name == Some("array") {
            let item = prop
                .get("items")
                .and_then(|i| i.get("type"))
                .and_then(Value::as_str);
            FieldType::Array(Box::new(FieldType::from_name(item)))
        } else {
            FieldType::from_name(type_name)
        };
        types.insert(name.clone(), field);
    }

    types
}

pub fn load_schema(path: &Path) -> AppResult<(Value, BTreeMap<String, FieldType>)> {
    if !path.exists() {
        return Err(AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("No JSON schema file at {} exists", path.display()),
        )));
    }
    let content = fs::read_to_string(path)?;
    let schema: Value = serde_json::from_str(&content)?;
    let types = extract_types(&schema);
    Ok((schema, types))
}
