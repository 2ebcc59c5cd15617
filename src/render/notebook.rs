use pulldown_cmark::{html, Event, Options, Parser};
use serde_json::Value;

use crate::models::{Cell, Notebook};
use crate::render::{error_fragment, escape};

const NOTEBOOK_STYLE: &str = r#"<style>
    .notebook-container {
        max-width: 100%;
        margin: 20px auto;
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
    }
    .input_area {
        border: 1px solid #e1e4e8;
        border-radius: 6px;
        margin: 10px 0;
        padding: 10px;
        background: #f6f8fa;
    }
    .input_area pre {
        margin: 0;
        padding: 10px;
        background: #f8f9fa;
        font-family: monospace;
        white-space: pre-wrap;
    }
    .cell {
        margin: 20px 0;
        padding: 10px;
    }
</style>
"#;

/// Renders notebook JSON as styled markup. Stored outputs are never shown.
pub fn render_notebook(text: &str) -> String {
    match Notebook::parse(text) {
        Ok(notebook) => render_document(&notebook),
        Err(e) => {
            tracing::warn!("Notebook conversion failed: {}", e);
            error_fragment("Error converting notebook", &e.to_string())
        }
    }
}

fn render_document(notebook: &Notebook) -> String {
    let mut body = String::new();
    for cell in &notebook.cells {
        if cell.is_code() {
            render_code_cell(cell, &mut body);
        } else if cell.is_markdown() {
            render_markdown_cell(cell, &mut body);
        } else {
            body.push_str(&format!(
                "<div class=\"cell raw_cell\"><pre>{}</pre></div>\n",
                escape(&cell.source)
            ));
        }
    }

    format!(
        "{}<div class=\"notebook-container\">\n{}</div>\n",
        NOTEBOOK_STYLE, body
    )
}

fn render_code_cell(cell: &Cell, body: &mut String) {
    let prompt = match cell.rest.get("execution_count").and_then(Value::as_u64) {
        Some(n) => format!("In [{}]:", n),
        None => "In [ ]:".to_string(),
    };
    body.push_str(&format!(
        "<div class=\"cell code_cell\"><div class=\"input\">\
         <div class=\"prompt input_prompt\">{}</div>\
         <div class=\"input_area\"><pre>{}</pre></div>\
         </div></div>\n",
        prompt,
        escape(&cell.source)
    ));
}

fn render_markdown_cell(cell: &Cell, body: &mut String) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Embedded HTML is shown as text, never passed through as markup.
    let events = Parser::new_ext(&cell.source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    body.push_str("<div class=\"cell text_cell\"><div class=\"text_cell_render\">");
    html::push_html(body, events);
    body.push_str("</div></div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTEBOOK: &str = r##"{
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": "# Intro\n\nSome **bold** text"},
            {"cell_type": "code", "execution_count": 7, "metadata": {},
             "outputs": [{"output_type": "stream", "name": "stdout", "text": "SECRET_OUTPUT"}],
             "source": ["# Part 1: compare values\n", "if a < b:\n", "    pass"]},
            {"cell_type": "raw", "metadata": {}, "source": "raw <text>"}
        ],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 4
    }"##;

    #[test]
    fn renders_inputs_without_outputs() {
        let html = render_notebook(NOTEBOOK);

        assert!(html.starts_with("<style>"));
        assert!(html.contains("<div class=\"notebook-container\">"));
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("In [7]:"));
        assert!(html.contains("if a &lt; b:"));
        assert!(html.contains("raw &lt;text&gt;"));
        assert!(!html.contains("SECRET_OUTPUT"));
    }

    #[test]
    fn cells_keep_document_order() {
        let html = render_notebook(NOTEBOOK);
        let intro = html.find("Intro").unwrap();
        let code = html.find("Part 1").unwrap();
        let raw = html.find("raw &lt;text").unwrap();
        assert!(intro < code && code < raw);
    }

    #[test]
    fn markdown_html_is_escaped() {
        let notebook = serde_json::json!({
            "cells": [
                {"cell_type": "markdown", "metadata": {},
                 "source": "hi <img src=x onerror=alert(document.domain)>\n\n<script>alert(1)</script>"}
            ],
            "metadata": {}, "nbformat": 4, "nbformat_minor": 5
        });
        let html = render_notebook(&notebook.to_string());

        assert!(html.contains("hi &lt;img src=x onerror=alert(document.domain)&gt;"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn invalid_input_becomes_error_fragment() {
        let html = render_notebook("Error in code annotation: boom");
        assert!(html.starts_with("<p>Error converting notebook: "));
    }
}
