//! Data transfer objects and document models.
//!
//! - `repository`: SearchMode, RepositoryCandidate and GitHub search/metadata shapes
//! - `tree`: TreeEntry, FilteredTree, Leaf, ContentType
//! - `notebook`: nbformat v4 Notebook and Cell
//! - `session`: SessionView and the request bodies driving the controller

pub mod notebook;
pub mod repository;
pub mod session;
pub mod tree;

pub use notebook::*;
pub use repository::*;
pub use session::*;
pub use tree::*;
