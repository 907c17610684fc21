//! Type keyword and base clause parsing from a type declaration's text.

use lumen_core::TypeKind;

const INHERITANCE_MODIFIERS: &[&str] = &["public", "protected", "private", "virtual"];

/// Type kind from the leading keyword; `class` when the keyword is missing.
#[must_use]
pub fn type_kind_from_text(text: &str) -> TypeKind {
    match text.split_whitespace().next() {
        Some("struct") => TypeKind::Struct,
        Some("union") => TypeKind::Union,
        _ => TypeKind::Class,
    }
}

/// Base type and remaining interfaces from the text before the body.
///
/// Only the part before the first `{` is read. The clause starts at the
/// first `:` outside template arguments that is not part of a `::`.
#[must_use]
pub fn parse_base_clause(text: &str) -> (Option<String>, Vec<String>) {
    let head = text.split_once('{').map_or(text, |(head, _)| head);
    let Some(colon) = base_clause_colon(head) else {
        return (None, Vec::new());
    };

    let mut bases = split_top_level(&head[colon + 1..])
        .into_iter()
        .filter_map(strip_inheritance_modifiers);
    let base = bases.next();
    (base, bases.collect())
}

fn base_clause_colon(head: &str) -> Option<usize> {
    let bytes = head.as_bytes();
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'<' | b'(' => depth += 1,
            b'>' | b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => {
                let prev_colon = i > 0 && bytes[i - 1] == b':';
                let next_colon = bytes.get(i + 1) == Some(&b':');
                if !prev_colon && !next_colon {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that sit outside `<...>` and `(...)`.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn strip_inheritance_modifiers(piece: &str) -> Option<String> {
    let mut rest = piece.trim();
    'strip: loop {
        for modifier in INHERITANCE_MODIFIERS {
            if let Some(after) = rest.strip_prefix(modifier) {
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    rest = after.trim_start();
                    continue 'strip;
                }
            }
        }
        break;
    }
    let normalized = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    (!normalized.is_empty()).then_some(normalized)
}
