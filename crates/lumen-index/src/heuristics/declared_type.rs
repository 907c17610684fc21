//! Type recovery from the text of the enclosing declaration.

use ast_grep_core::Node;

use super::prefix::clean_type_prefix;
use super::vocabulary::Vocabulary;

/// Text of `node`'s parent that precedes `node`.
pub fn parent_prefix<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let parent = node.parent()?;
    let offset = node.range().start.checked_sub(parent.range().start)?;
    let text = parent.text();
    text.get(..offset).map(ToString::to_string)
}

/// Text of `node`'s parent from `node` to the end of the parent.
pub fn parent_tail<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let parent = node.parent()?;
    let offset = node.range().start.checked_sub(parent.range().start)?;
    let text = parent.text();
    text.get(offset..).map(ToString::to_string)
}

/// Declared type of a declarator, read from the declaration text.
///
/// The cleaned prefix gets the declarator's own leading `*`/`&` run appended
/// unless it already ends with a sigil. A prefix holding an inline
/// aggregate body yields `None`.
pub fn declared_type_from_text<D: ast_grep_core::Doc>(
    node: &Node<D>,
    vocab: &Vocabulary,
) -> Option<String> {
    let prefix = parent_prefix(node)?;
    let cleaned = clean_type_prefix(&prefix, vocab)?;
    if cleaned.contains('{') {
        return None;
    }
    Some(append_sigils(cleaned, &node.text()))
}

/// Append the leading pointer/reference run of `declarator_text`.
#[must_use]
pub fn append_sigils(mut type_text: String, declarator_text: &str) -> String {
    if type_text.ends_with(['*', '&']) {
        return type_text;
    }
    let sigils: String = declarator_text
        .trim_start()
        .chars()
        .take_while(|c| matches!(c, '*' | '&') || c.is_whitespace())
        .filter(|c| !c.is_whitespace())
        .collect();
    type_text.push_str(&sigils);
    type_text
}
