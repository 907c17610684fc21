//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the C-family language from a file path extension.
///
/// Headers (`.h`) go to the C++ grammar: it accepts plain C declarations
/// while the C grammar rejects classes outright.
///
/// Returns `None` for unsupported or unrecognized extensions.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let (_, ext) = file_path.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "c" => Some(SupportLang::C),
        "h" | "hh" | "hpp" | "hxx" | "h++" | "cpp" | "cc" | "cxx" | "c++" | "inl" | "ipp" => {
            Some(SupportLang::Cpp)
        }
        _ => None,
    }
}

/// Language tag written into `StructuralModel::language`.
#[must_use]
pub const fn language_tag(lang: SupportLang) -> &'static str {
    match lang {
        SupportLang::C => "c",
        _ => "cpp",
    }
}

/// Whether the walker knows how to read trees of this language.
#[must_use]
pub const fn is_supported(lang: SupportLang) -> bool {
    matches!(lang, SupportLang::C | SupportLang::Cpp)
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}
