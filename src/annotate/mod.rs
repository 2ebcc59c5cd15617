//! Code annotation through the inference service.
//!
//! Source files are sent whole, once. Notebooks are parsed and each code
//! cell is sent on its own, strictly one after another; the reply replaces
//! the cell source verbatim and the notebook is re-serialized.

pub mod inference;
pub mod prompts;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{ContentType, Notebook};

pub use inference::{ChatCompletionClient, CompletionService};

pub const ANNOTATION_ERROR_PREFIX: &str = "Error in code annotation";

#[derive(Clone)]
pub struct Annotator {
    service: Arc<dyn CompletionService>,
}

impl Annotator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    pub async fn annotate(&self, text: &str, content_type: ContentType) -> Result<String> {
        match content_type {
            ContentType::Source => self.annotate_source(text).await,
            ContentType::Notebook => self.annotate_notebook(text).await,
        }
    }

    /// Like `annotate`, but failures come back as a readable message in
    /// place of the annotated text.
    pub async fn annotate_or_message(&self, text: &str, content_type: ContentType) -> String {
        match self.annotate(text, content_type).await {
            Ok(annotated) => annotated,
            Err(e) => {
                tracing::warn!("Annotation failed: {}", e);
                format!("{}: {}", ANNOTATION_ERROR_PREFIX, e)
            }
        }
    }

    async fn annotate_source(&self, text: &str) -> Result<String> {
        tracing::debug!("Annotating source file ({} chars)", text.len());
        self.service.complete(&prompts::source_prompt(text)).await
    }

    async fn annotate_notebook(&self, text: &str) -> Result<String> {
        let mut notebook = Notebook::parse(text)?;
        tracing::debug!(
            "Annotating notebook: {} cells, {} code",
            notebook.cells.len(),
            notebook.code_cell_count()
        );

        for cell in notebook.cells.iter_mut().filter(|c| c.is_code()) {
            let prompt = prompts::notebook_cell_prompt(&cell.source);
            cell.source = self.service.complete(&prompt).await?;
        }

        notebook.to_json()
    }
}
