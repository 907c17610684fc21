//! Cleanup of the text that precedes a declarator.

use super::macros::{extract_balanced_call, leading_identifier};
use super::vocabulary::Vocabulary;

/// Strip storage keywords, export macros and wrapper macros from a type prefix.
///
/// Keeps stripping until nothing applies, so `virtual ENGINE_API void`
/// becomes `void`. Whitespace runs collapse to one space. Returns `None` when
/// nothing is left.
#[must_use]
pub fn clean_type_prefix(text: &str, vocab: &Vocabulary) -> Option<String> {
    let mut rest = text.trim().trim_end_matches(';').trim();
    loop {
        let stripped = strip_once(rest, vocab).trim_start();
        if stripped.len() == rest.len() {
            break;
        }
        rest = stripped;
    }
    let cleaned = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

fn strip_once<'t>(text: &'t str, vocab: &Vocabulary) -> &'t str {
    let Some(ident) = leading_identifier(text) else {
        return text;
    };
    let after = &text[ident.len()..];
    let followed_by_space = after.starts_with(char::is_whitespace);

    if vocab.storage_keywords().iter().any(|k| k == ident) && (after.is_empty() || followed_by_space)
    {
        return after;
    }
    if vocab.is_export_macro(ident) && followed_by_space {
        return after;
    }
    if vocab.is_strippable_macro(ident) {
        if let Some(call) = extract_balanced_call(text, ident, 0) {
            return &text[call.len()..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("virtual FOO_API void ", Some("void"))]
    #[case("static inline constexpr int", Some("int"))]
    #[case("UPROPERTY(EditAnywhere, meta=(ClampMin=0)) int32 ", Some("int32"))]
    #[case("FORCEINLINE const  FString& ", Some("const FString&"))]
    #[case("staticValue ", Some("staticValue"))]
    #[case("static;", None)]
    #[case("   ", None)]
    #[case("ENGINE_API", Some("ENGINE_API"))]
    fn cleaned_prefixes(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            clean_type_prefix(text, &Vocabulary::default()).as_deref(),
            expected
        );
    }

    #[test]
    fn unbalanced_macro_is_kept() {
        assert_eq!(
            clean_type_prefix("UPROPERTY(EditAnywhere int32", &Vocabulary::default()).as_deref(),
            Some("UPROPERTY(EditAnywhere int32")
        );
    }

    #[test]
    fn configured_macros_are_stripped() {
        let vocab = Vocabulary::default().with_stripped_macros(["MY_DEPRECATED"]);
        assert_eq!(
            clean_type_prefix("MY_DEPRECATED(\"use Bar\") float", &vocab).as_deref(),
            Some("float")
        );
    }
}
