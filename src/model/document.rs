//! Serde representation of a WAP document (YAML or JSON).

use crate::errors::{AppError, AppResult};
use crate::utils::path::{InputFormat, input_format};
use crate::utils::time::DayTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WapDocument {
    pub meta: Meta,
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub days: Vec<DayDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub title: Option<String>,
    pub unit: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub start_time: TimeValue,
    pub end_time: TimeValue,
    /// Calendar date of day offset 0 (`YYYY-MM-DD`).
    pub first_day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub identifier: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDef {
    pub offset: u32,
    #[serde(default)]
    pub events: Vec<EventDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    pub title: String,
    pub start: TimeValue,
    pub end: TimeValue,
    #[serde(default)]
    pub columns: Vec<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub responsible: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub repeats: Repeats,
    #[serde(default)]
    pub footnote: bool,
}

/// A time written either as `"HH:MM"` or as minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Minutes(i64),
    Text(String),
}

impl TimeValue {
    pub fn to_day_time(&self) -> AppResult<DayTime> {
        match self {
            TimeValue::Minutes(m) => DayTime::from_minutes(*m),
            TimeValue::Text(s) => DayTime::parse(s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeats {
    #[default]
    No,
    Daily,
}

/// Decode a document from a string in the given format.
pub fn parse_document(content: &str, format: InputFormat) -> AppResult<WapDocument> {
    let doc = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(doc)
}

/// Read and decode a document; the format follows the file extension.
pub fn load_document(path: &Path) -> AppResult<WapDocument> {
    let format = input_format(path)?;
    if !path.exists() {
        return Err(AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("WAP file {} does not exist", path.display()),
        )));
    }
    let content = fs::read_to_string(path)?;
    parse_document(&content, format)
}
