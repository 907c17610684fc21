//! Include and import path extraction.

use ast_grep_core::Node;

const PATH_FIELDS: &[&str] = &["path", "name", "module"];
const DIRECTIVES: &[&str] = &["#include", "#import", "import"];

/// Path named by an include-like node, without `"..."` or `<...>` delimiters.
pub fn include_path<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let raw = PATH_FIELDS
        .iter()
        .find_map(|field| node.field(field))
        .map_or_else(|| strip_directive(&node.text()), |path| path.text().to_string());
    let path = strip_delimiters(raw.trim());
    (!path.is_empty()).then(|| path.to_string())
}

fn strip_directive(text: &str) -> String {
    let text = text.trim().trim_end_matches(';');
    let rest = DIRECTIVES
        .iter()
        .find_map(|d| text.strip_prefix(d))
        .unwrap_or(text);
    rest.trim().to_string()
}

fn strip_delimiters(path: &str) -> &str {
    for (open, close) in [('"', '"'), ('<', '>')] {
        if let Some(inner) = path.strip_prefix(open).and_then(|p| p.strip_suffix(close)) {
            return inner.trim();
        }
    }
    path
}
