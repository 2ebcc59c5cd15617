//! Session DTOs.
//!
//! - `SessionView`: everything the page needs to redraw after an event
//! - `Panel`: which of the two mutually exclusive output panels is shown
//! - `SearchRequest`, `SelectRepositoryRequest`, `FileRequest`: event bodies

use serde::{Deserialize, Serialize};

use crate::models::SearchMode;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Code,
    Notebook,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    RepositoriesListed,
    StructureShown,
    FileSelected,
    Analyzed,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct SessionView {
    pub phase: Phase,
    pub search_mode: SearchMode,
    pub query: String,
    pub repositories: Vec<String>,
    pub selected_repository: Option<String>,
    pub structure_html: String,
    pub selected_file: String,
    pub visible_panel: Panel,
    /// Plain-text output (annotated source or a message).
    pub code_output: Option<String>,
    /// Rendered notebook markup.
    pub notebook_output: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectRepositoryRequest {
    pub repository: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileRequest {
    #[serde(default)]
    pub path: String,
}
