//! Indexing configuration.

use lumen_index::Vocabulary;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default cap on source file size: 2 MiB.
const fn default_max_file_bytes() -> u64 {
    2 * 1024 * 1024
}

fn default_extensions() -> Vec<String> {
    ["c", "h", "cpp", "cc", "cxx", "hpp", "hh", "hxx", "inl"]
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn default_export_macro_suffix() -> String {
    "_API".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexConfig {
    /// File extensions picked up when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Files larger than this are skipped.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Project reflection macros reported as annotations.
    #[serde(default)]
    pub annotation_macros: Vec<String>,

    /// Project macros removed from type prefixes.
    #[serde(default)]
    pub stripped_macros: Vec<String>,

    /// Project class-body boilerplate macros, never reported as members.
    #[serde(default)]
    pub body_macros: Vec<String>,

    /// Suffix identifying export macros such as `ENGINE_API`.
    #[serde(default = "default_export_macro_suffix")]
    pub export_macro_suffix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_file_bytes: default_max_file_bytes(),
            annotation_macros: Vec::new(),
            stripped_macros: Vec::new(),
            body_macros: Vec::new(),
            export_macro_suffix: default_export_macro_suffix(),
        }
    }
}

impl IndexConfig {
    /// Whether a path's extension is in the configured set.
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Default vocabulary extended with the configured macro names.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::default()
            .with_annotation_macros(self.annotation_macros.iter().cloned())
            .with_stripped_macros(self.stripped_macros.iter().cloned())
            .with_body_macros(self.body_macros.iter().cloned())
            .with_export_macro_suffix(self.export_macro_suffix.clone())
    }

    /// Reject values the indexer cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty export suffix, a zero
    /// size cap, or an empty extension list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export_macro_suffix.trim().is_empty() {
            return Err(invalid("index.export_macro_suffix", "must not be empty"));
        }
        if self.max_file_bytes == 0 {
            return Err(invalid("index.max_file_bytes", "must be greater than zero"));
        }
        if self.extensions.is_empty() {
            return Err(invalid("index.extensions", "must list at least one extension"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
