//! Balanced macro invocation scanning.

/// Whether `c` can appear in a C identifier.
pub(crate) const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract `name(...)` starting at byte `start` of `text`.
///
/// `text[start..]` must begin with `name` immediately followed by `(`.
/// Returns the invocation through its matching `)`, or `None` when the
/// parentheses never balance.
#[must_use]
pub fn extract_balanced_call<'t>(text: &'t str, name: &str, start: usize) -> Option<&'t str> {
    let rest = text.get(start..)?;
    let after_name = rest.strip_prefix(name)?;
    if !after_name.starts_with('(') {
        return None;
    }
    let open = start + name.len();
    let mut depth = 0usize;
    for (offset, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[start..=open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Leading identifier of `text`, if it starts with one.
pub(crate) fn leading_identifier(text: &str) -> Option<&str> {
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(text.len(), |(i, _)| i);
    let ident = &text[..end];
    (!ident.is_empty() && !ident.starts_with(|c: char| c.is_ascii_digit())).then_some(ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("FOO(a, (b), c) rest", Some("FOO(a, (b), c)"))]
    #[case("FOO(a, (b) rest", None)]
    #[case("FOO()", Some("FOO()"))]
    #[case("FOO (a)", None)]
    #[case("BAR(a)", None)]
    fn balanced_call_from_start(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_balanced_call(text, "FOO", 0), expected);
    }

    #[test]
    fn balanced_call_at_offset() {
        let text = "int x; UPROPERTY(meta=(A, B)) float y;";
        let start = text.find("UPROPERTY").expect("macro present");
        assert_eq!(
            extract_balanced_call(text, "UPROPERTY", start),
            Some("UPROPERTY(meta=(A, B))")
        );
    }

    #[test]
    fn out_of_range_start_is_none() {
        assert_eq!(extract_balanced_call("FOO()", "FOO", 10), None);
    }

    #[test]
    fn leading_identifiers() {
        assert_eq!(leading_identifier("ENGINE_API void"), Some("ENGINE_API"));
        assert_eq!(leading_identifier("(x)"), None);
        assert_eq!(leading_identifier("9lives"), None);
    }
}
