//! `Scope::name` splitting and owner recovery from qualified text.

use super::macros::is_ident_char;

/// Split `A::B::name` into `("A::B", "name")` at the last top-level `::`.
///
/// Separators inside template arguments do not count. Returns `None` for
/// unqualified text.
#[must_use]
pub fn split_qualified(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut last = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                last = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    let at = last?;
    let scope = text[..at].trim();
    let name = text[at + 2..].trim();
    (!name.is_empty()).then_some((scope, name))
}

/// Last segment of a scope with its template arguments removed.
///
/// `ns::Outer<T>` becomes `Outer`.
#[must_use]
pub fn owner_segment(scope: &str) -> Option<&str> {
    let last = split_qualified(scope).map_or(scope, |(_, name)| name);
    let bare = last.split_once('<').map_or(last, |(head, _)| head).trim();
    (!bare.is_empty()).then_some(bare)
}

/// Owner identifier from a `Owner::name` occurrence in `text`.
///
/// Template arguments between the owner and `::` are skipped, so
/// `TArray<T>::Add` yields `TArray`.
#[must_use]
pub fn owner_from_qualified_text(text: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let needle = format!("::{name}");
    for (at, _) in text.match_indices(&needle) {
        let after = &text[at + needle.len()..];
        if after.starts_with(is_ident_char) {
            continue;
        }
        if let Some(owner) = identifier_before(&text[..at]) {
            return Some(owner.to_string());
        }
    }
    None
}

fn identifier_before(text: &str) -> Option<&str> {
    let mut end = text.len();
    if text.ends_with('>') {
        let mut depth = 0usize;
        let mut open = None;
        for (i, c) in text.char_indices().rev() {
            match c {
                '>' => depth += 1,
                '<' => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        open = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        end = open?;
    }
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident_char(c))
        .last()
        .map(|(i, _)| i)?;
    let ident = &head[start..];
    (!ident.starts_with(|c: char| c.is_ascii_digit())).then_some(ident)
}
