//! Declaration modifiers read from raw text.

use super::macros::is_ident_char;
use crate::entity::ModifierFlags;

/// Modifier flags from the text around a declarator.
///
/// `prefix` is the declaration text before the declarator, `tail` the text
/// from the declarator to the end of the declaration.
#[must_use]
pub fn text_modifiers(prefix: &str, tail: &str) -> ModifierFlags {
    let signature = tail.split_once('{').map_or(tail, |(head, _)| head);
    let trimmed = signature.trim().trim_end_matches(';').trim_end();
    let is_abstract = trimmed
        .strip_suffix('0')
        .is_some_and(|rest| rest.trim_end().ends_with('='));

    ModifierFlags {
        is_static: Some(has_word(prefix, "static")),
        is_virtual: Some(has_word(prefix, "virtual")),
        is_abstract: Some(is_abstract),
        is_override: Some(has_word(signature, "override")),
    }
}

/// Whether `word` appears in `text` as a whole identifier.
#[must_use]
pub fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !is_ident_char(c)).any(|token| token == word)
}
