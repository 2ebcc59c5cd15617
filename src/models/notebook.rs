//! Jupyter notebook (nbformat v4) document model.
//!
//! Only `cells[].cell_type` and `cells[].source` are interpreted; every other
//! field is carried through untouched so an annotated notebook keeps its
//! metadata, outputs and execution counts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

pub const SUPPORTED_NBFORMAT: u64 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    pub cell_type: String,
    #[serde(
        default,
        deserialize_with = "deserialize_source",
        serialize_with = "serialize_source"
    )]
    pub source: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }
}

impl Notebook {
    pub fn parse(text: &str) -> Result<Self> {
        let notebook: Notebook = serde_json::from_str(text)
            .map_err(|e| AppError::Notebook(format!("not a valid notebook: {}", e)))?;

        let version = notebook.rest.get("nbformat").and_then(Value::as_u64);
        match version {
            Some(SUPPORTED_NBFORMAT) | None => Ok(notebook),
            Some(other) => Err(AppError::Notebook(format!(
                "unsupported nbformat version {}",
                other
            ))),
        }
    }

    /// Serializes the way nbformat writes files: sorted keys, one-space indent,
    /// sources split into line lists.
    pub fn to_json(&self) -> Result<String> {
        // Round-tripping through `Value` sorts keys across the flattened maps.
        let value = serde_json::to_value(self)?;
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut serializer)?;
        let mut text = String::from_utf8(out).map_err(|e| AppError::Internal(e.to_string()))?;
        text.push('\n');
        Ok(text)
    }

    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

fn deserialize_source<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MultilineText::deserialize(deserializer)? {
        MultilineText::Single(s) => s,
        MultilineText::Lines(lines) => lines.concat(),
    })
}

fn serialize_source<S>(source: &str, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    lines.serialize(serializer)
}
