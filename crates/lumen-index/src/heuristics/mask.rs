//! Source masking applied before parsing.
//!
//! Export macros such as `GAME_API` sit between `class` and the type name,
//! where the grammar expects nothing. Left in place they derail the parse of
//! the whole class, so they are overwritten with spaces first. Byte offsets
//! and line numbers are unchanged.

use std::borrow::Cow;

use super::vocabulary::Vocabulary;

/// `source` with every export-macro identifier replaced by spaces.
///
/// String and character literals, comments and preprocessor lines are left
/// alone. Borrows when nothing was masked.
#[must_use]
pub fn mask_export_macros<'s>(source: &'s str, vocab: &Vocabulary) -> Cow<'s, str> {
    let spans = export_macro_spans(source, vocab);
    if spans.is_empty() {
        return Cow::Borrowed(source);
    }
    let mut masked = String::with_capacity(source.len());
    let mut last = 0;
    for (start, end) in spans {
        masked.push_str(&source[last..start]);
        masked.extend(std::iter::repeat_n(' ', end - start));
        last = end;
    }
    masked.push_str(&source[last..]);
    Cow::Owned(masked)
}

fn export_macro_spans(source: &str, vocab: &Vocabulary) -> Vec<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut at = 0;
    while at < bytes.len() {
        let byte = bytes[at];
        at = match byte {
            b'"' | b'\'' => skip_literal(bytes, at),
            b'/' if bytes.get(at + 1) == Some(&b'/') => skip_line(bytes, at),
            b'/' if bytes.get(at + 1) == Some(&b'*') => skip_block_comment(bytes, at),
            b'#' if starts_line(bytes, at) => skip_line(bytes, at),
            _ if is_ident_byte(byte) => {
                let end = bytes[at..]
                    .iter()
                    .position(|b| !is_ident_byte(*b))
                    .map_or(bytes.len(), |len| at + len);
                if !byte.is_ascii_digit() && vocab.is_export_macro(&source[at..end]) {
                    spans.push((at, end));
                }
                end
            }
            _ => at + 1,
        };
    }
    spans
}

const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whether only whitespace precedes `at` on its line.
fn starts_line(bytes: &[u8], at: usize) -> bool {
    bytes[..at]
        .iter()
        .rev()
        .take_while(|b| **b != b'\n')
        .all(u8::is_ascii_whitespace)
}

/// End of a directive or `//` comment, honoring line continuations.
fn skip_line(bytes: &[u8], at: usize) -> usize {
    let mut end = at;
    while end < bytes.len() {
        if bytes[end] == b'\n' && (end == 0 || bytes[end - 1] != b'\\') {
            return end;
        }
        end += 1;
    }
    end
}

fn skip_block_comment(bytes: &[u8], at: usize) -> usize {
    bytes[at + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |offset| at + 2 + offset + 2)
}

/// End of a quoted literal. An unterminated literal stops at the newline.
fn skip_literal(bytes: &[u8], at: usize) -> usize {
    let quote = bytes[at];
    let mut end = at + 1;
    while end < bytes.len() {
        match bytes[end] {
            b'\\' => end += 2,
            b'\n' => return end,
            b if b == quote => return end + 1,
            _ => end += 1,
        }
    }
    bytes.len()
}
