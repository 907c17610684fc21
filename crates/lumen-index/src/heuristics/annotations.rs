//! Annotation macro discovery.
//!
//! Reflection macros such as `UPROPERTY(...)` rarely survive parsing as a
//! clean node. Two strategies recover them: a sibling scan over the tree,
//! then a text scan before the node's offset. The first one that finds
//! anything wins.

use ast_grep_core::Node;

use super::macros::{extract_balanced_call, is_ident_char, leading_identifier};
use super::vocabulary::Vocabulary;

const SIBLING_LEVELS: usize = 4;
const SIBLINGS_PER_LEVEL: usize = 10;
const TEXT_LEVELS: usize = 3;

/// Node kinds that end the upward climb: above them lies another declaration.
const SCOPE_BOUNDARIES: &[&str] = &[
    "translation_unit",
    "declaration_list",
    "field_declaration_list",
    "compound_statement",
];

/// Annotation macro invocations attached to `node`, in source order.
pub fn annotations_for<D: ast_grep_core::Doc>(node: &Node<D>, vocab: &Vocabulary) -> Vec<String> {
    let from_siblings = sibling_annotations(node, vocab);
    if !from_siblings.is_empty() {
        return from_siblings;
    }
    text_annotations(node, vocab)
}

/// Scan preceding siblings of `node` and its nearest ancestors.
///
/// Comments are skipped. The scan at one level stops at the first sibling
/// that is not an annotation.
fn sibling_annotations<D: ast_grep_core::Doc>(node: &Node<D>, vocab: &Vocabulary) -> Vec<String> {
    let mut current = Some(node.clone());
    for _ in 0..SIBLING_LEVELS {
        let Some(level) = current else { break };
        if SCOPE_BOUNDARIES.contains(&level.kind().as_ref()) {
            break;
        }
        let mut found = Vec::new();
        let mut sibling = level.prev();
        let mut inspected = 0;
        while let Some(candidate) = sibling {
            if inspected == SIBLINGS_PER_LEVEL {
                break;
            }
            sibling = candidate.prev();
            let text = candidate.text();
            if candidate.kind().as_ref() == "comment" || text.trim().is_empty() {
                continue;
            }
            inspected += 1;
            match leading_annotation(text.trim(), vocab) {
                Some(call) => found.push(call.to_string()),
                None => break,
            }
        }
        if !found.is_empty() {
            found.reverse();
            return found;
        }
        current = level.parent();
    }
    Vec::new()
}

fn leading_annotation<'t>(text: &'t str, vocab: &Vocabulary) -> Option<&'t str> {
    let name = leading_identifier(text)?;
    if !vocab.annotation_macros().iter().any(|m| m == name) {
        return None;
    }
    extract_balanced_call(text, name, 0)
}

/// Look for annotation calls in the ancestor text before `node`.
fn text_annotations<D: ast_grep_core::Doc>(node: &Node<D>, vocab: &Vocabulary) -> Vec<String> {
    let start = node.range().start;
    for ancestor in node.ancestors().take(TEXT_LEVELS) {
        let Some(offset) = start.checked_sub(ancestor.range().start) else {
            continue;
        };
        let text = ancestor.text();
        let Some(prefix) = text.get(..offset) else {
            continue;
        };
        let found = annotations_before(prefix, vocab);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// Annotation calls in `prefix` that still apply at its end.
///
/// Per macro name, the last `Name(` occurrence not preceded by an identifier
/// character is extracted as a balanced call. A call followed by `;`, `{` or
/// `}` before the end of `prefix` belongs to an earlier declaration and is
/// ignored. Results are ordered by position.
#[must_use]
pub fn annotations_before(prefix: &str, vocab: &Vocabulary) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();
    for name in vocab.annotation_macros() {
        let Some(start) = last_call_site(prefix, name) else {
            continue;
        };
        let Some(call) = extract_balanced_call(prefix, name, start) else {
            continue;
        };
        let between = &prefix[start + call.len()..];
        if between.contains([';', '{', '}']) {
            continue;
        }
        found.push((start, call));
    }
    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, call)| call.to_string()).collect()
}

fn last_call_site(text: &str, name: &str) -> Option<usize> {
    let needle = format!("{name}(");
    text.rmatch_indices(&needle)
        .map(|(at, _)| at)
        .find(|&at| !text[..at].ends_with(is_ident_char))
}
