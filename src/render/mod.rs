//! HTML rendering for the two markup panels.
//!
//! - `tree`: filtered repository tree with per-file Analyze buttons
//! - `notebook`: annotated notebook, inputs only

pub mod notebook;
pub mod tree;

pub use notebook::render_notebook;
pub use tree::render_tree;

use pulldown_cmark_escape::escape_html;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html(&mut out, text).ok();
    out
}

/// Error fragment shown in an HTML panel in place of rendered content.
pub fn error_fragment(prefix: &str, message: &str) -> String {
    format!("<p>{}: {}</p>", escape(prefix), escape(message))
}
