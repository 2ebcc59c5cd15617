//! Tree DTOs.
//!
//! - `TreeEntry` / `TreeResponse`: raw recursive listing from the Git Trees API
//! - `RepositoryTree`: listing plus the branch it was taken from
//! - `FilteredTree` / `TreeNode` / `Leaf`: nested view holding only source
//!   and notebook files (TreeView panel)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SOURCE_EXTENSION: &str = ".py";
pub const NOTEBOOK_EXTENSION: &str = ".ipynb";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    Commit,
    #[serde(other)]
    Other,
}

/// `GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone)]
pub struct RepositoryTree {
    pub branch: String,
    pub entries: Vec<TreeEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Source,
    Notebook,
}

impl ContentType {
    /// Classifies a path or URL by extension; `None` for anything else.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with(NOTEBOOK_EXTENSION) {
            Some(ContentType::Notebook)
        } else if path.ends_with(SOURCE_EXTENSION) {
            Some(ContentType::Source)
        } else {
            None
        }
    }

    pub fn is_notebook(path: &str) -> bool {
        path.ends_with(NOTEBOOK_EXTENSION)
    }
}

pub type FilteredTree = BTreeMap<String, TreeNode>;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TreeNode {
    Leaf(Leaf),
    Directory(FilteredTree),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Leaf {
    pub url: String,
    pub path: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
}
