//! # lumen-index
//!
//! Structural code index builder for C and C++ sources.
//!
//! Parses a file with ast-grep's bundled tree-sitter grammars and walks the
//! tree once to recover namespaces, types, members, free functions and
//! includes. Most declaration nodes in these grammars are generic
//! declarators, so roles (member, parameter, local, free function,
//! out-of-line definition) are decided from tree shape alone. Names and
//! types come from an [`EntityBridge`]; text heuristics fill in what the
//! bridge cannot answer, including reflection macros that never parse as
//! clean nodes.
//!
//! ## Entry points
//!
//! - [`index_source`] / [`index_source_with`]: index in-memory source with
//!   the built-in [`SyntacticBridge`].
//! - [`index_file`]: read, detect the language, then index.
//! - [`index_source_with_bridge`]: index with a host-provided bridge.

pub mod entity;
pub mod error;
pub mod heuristics;
pub mod kinds;
pub mod lines;
pub mod navigation;
pub mod parser;
pub mod walker;

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use lumen_core::StructuralModel;

pub use entity::{EntityBridge, ModifierFlags, NoEntitySurface, SemanticEntity, SyntacticBridge};
pub use error::IndexError;
pub use heuristics::Vocabulary;
pub use lines::LineIndex;
pub use parser::{detect_language, language_tag};
pub use walker::Walker;

/// Index C or C++ source with the default vocabulary.
///
/// # Errors
///
/// Returns [`IndexError::UnsupportedLanguage`] for languages other than C and
/// C++.
pub fn index_source(source: &str, lang: SupportLang) -> Result<StructuralModel, IndexError> {
    index_source_with(source, lang, &Vocabulary::default())
}

/// Index C or C++ source with a custom vocabulary.
///
/// # Errors
///
/// Returns [`IndexError::UnsupportedLanguage`] for languages other than C and
/// C++.
pub fn index_source_with(
    source: &str,
    lang: SupportLang,
    vocabulary: &Vocabulary,
) -> Result<StructuralModel, IndexError> {
    index_source_with_bridge(source, lang, &SyntacticBridge, vocabulary)
}

/// Index source with a host-provided entity bridge.
///
/// Export macros are blanked out before parsing; see
/// [`heuristics::mask_export_macros`].
///
/// # Errors
///
/// Returns [`IndexError::UnsupportedLanguage`] for languages other than C and
/// C++, and [`IndexError::EntitySurfaceUnavailable`] when the bridge reports
/// no lookup surface.
pub fn index_source_with_bridge<B>(
    source: &str,
    lang: SupportLang,
    bridge: &B,
    vocabulary: &Vocabulary,
) -> Result<StructuralModel, IndexError>
where
    B: EntityBridge<StrDoc<SupportLang>>,
{
    if !parser::is_supported(lang) {
        return Err(IndexError::UnsupportedLanguage(format!("{lang:?}")));
    }
    let source = heuristics::mask_export_macros(source, vocabulary);
    let tree = parser::parse_source(&source, lang);
    let lines = LineIndex::new(&source);
    Walker::new(bridge, &lines, vocabulary, language_tag(lang)).walk(&tree.root())
}

/// Read and index one file, detecting the language from its extension.
///
/// # Errors
///
/// Returns [`IndexError::UnsupportedLanguage`] for unknown extensions and
/// [`IndexError::Io`] when the file cannot be read.
pub fn index_file(path: &Path, vocabulary: &Vocabulary) -> Result<StructuralModel, IndexError> {
    let lang = detect_language(&path.to_string_lossy())
        .ok_or_else(|| IndexError::UnsupportedLanguage(path.display().to_string()))?;
    let source = std::fs::read_to_string(path)?;
    index_source_with(&source, lang, vocabulary)
}
