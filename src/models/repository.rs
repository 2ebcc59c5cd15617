//! Repository search DTOs.
//!
//! - `SearchMode`: which of the four search strategies to run
//! - `RepositoryCandidate`: one search hit, with display defaults applied
//! - `SearchResponse` / `RepositoryItem` / `RepositoryMetadata`: GitHub wire shapes

use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description";
pub const NO_LANGUAGE: &str = "Not specified";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Topic,
    Username,
    #[serde(rename = "Repository Name")]
    RepositoryName,
    #[serde(rename = "Direct Path")]
    DirectPath,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RepositoryCandidate {
    pub full_name: String,
    pub stars: u64,
    pub description: String,
    pub language: String,
}

impl RepositoryCandidate {
    /// Label shown in the repository selector, e.g. `owner/name (⭐ 42) - Python`.
    pub fn label(&self) -> String {
        format!("{} (⭐ {}) - {}", self.full_name, self.stars, self.language)
    }
}

impl From<RepositoryItem> for RepositoryCandidate {
    fn from(item: RepositoryItem) -> Self {
        Self {
            full_name: item.full_name,
            stars: item.stargazers_count,
            description: item.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: item.language.unwrap_or_else(|| NO_LANGUAGE.to_string()),
        }
    }
}

/// `GET /search/repositories`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepositoryItem>,
}

/// Element of `/search/repositories` items and of `/users/{user}/repos`.
#[derive(Debug, Deserialize)]
pub struct RepositoryItem {
    pub full_name: String,
    #[serde(default)]
    pub stargazers_count: u64,
    pub description: Option<String>,
    pub language: Option<String>,
}

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub struct RepositoryMetadata {
    pub default_branch: String,
}
