use crate::models::{ContentType, FilteredTree, Leaf, TreeNode};
use crate::render::escape;

const INDENT_PX: usize = 20;

/// Renders a filtered tree as nested markup, keys sorted at every level.
///
/// Each file gets an `Analyze` button carrying its URL in `data-url`; the
/// page's `selectAndAnalyze` fills the file path field and triggers analysis.
pub fn render_tree(tree: &FilteredTree) -> String {
    if tree.is_empty() {
        return "<p class=\"tree-empty\">No Python or notebook files found</p>".to_string();
    }
    let mut html = String::new();
    render_level(tree, 0, &mut html);
    html
}

fn render_level(tree: &FilteredTree, depth: usize, html: &mut String) {
    let indent = depth * INDENT_PX;

    for (name, node) in tree {
        match node {
            TreeNode::Directory(children) => {
                html.push_str(&format!(
                    "<div class=\"tree-dir\" style=\"margin-left: {}px; margin-bottom: 5px;\">\
                     <span style=\"font-weight: bold; color: #666;\">📁 {}</span></div>\n",
                    indent,
                    escape(name)
                ));
                render_level(children, depth + 1, html);
            }
            TreeNode::Leaf(leaf) => render_leaf(name, leaf, indent, html),
        }
    }
}

fn render_leaf(name: &str, leaf: &Leaf, indent: usize, html: &mut String) {
    let icon = match leaf.content_type {
        ContentType::Notebook => "📓",
        ContentType::Source => "🐍",
    };
    let url = escape(&leaf.url);

    html.push_str(&format!(
        "<div class=\"tree-file\" style=\"margin-left: {indent}px; margin-bottom: 8px;\">\
         <div style=\"display: flex; align-items: center; gap: 10px;\">\
         <span>{icon}</span>\
         <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" style=\"text-decoration: none; color: #0366d6;\">{name}</a>\
         <button class=\"analyze-button\" data-url=\"{url}\" onclick=\"selectAndAnalyze(this.dataset.url)\">Analyze</button>\
         </div>\
         <div style=\"margin-top: 4px; margin-left: 20px;\">\
         <span style=\"color: #666; font-size: 0.9em; font-family: monospace;\">Path: {url}</span>\
         </div></div>\n",
        name = escape(name),
    ));
}
