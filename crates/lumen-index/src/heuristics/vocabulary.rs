//! Keyword and macro sets consulted by the text heuristics.

/// Storage-class and linkage keywords removed from type prefixes.
const STORAGE_KEYWORDS: &[&str] = &[
    "static",
    "virtual",
    "inline",
    "explicit",
    "constexpr",
    "consteval",
    "constinit",
    "extern",
    "mutable",
    "friend",
    "register",
    "thread_local",
    "FORCEINLINE",
];

/// Macros that wrap declarations without naming a type.
const STRIPPED_MACROS: &[&str] = &[
    "UPARAM",
    "UPROPERTY",
    "UFUNCTION",
    "UE_DEPRECATED",
    "DEPRECATED",
];

/// Reflection macros reported as annotations on the declaration they precede.
const ANNOTATION_MACROS: &[&str] = &[
    "UCLASS",
    "USTRUCT",
    "UENUM",
    "UINTERFACE",
    "UPROPERTY",
    "UFUNCTION",
    "UDELEGATE",
];

/// Macros that expand to boilerplate inside a class body.
const BODY_MACROS: &[&str] = &[
    "GENERATED_BODY",
    "GENERATED_UCLASS_BODY",
    "GENERATED_USTRUCT_BODY",
    "GENERATED_UINTERFACE_BODY",
    "GENERATED_IINTERFACE_BODY",
];

const EXPORT_MACRO_SUFFIX: &str = "_API";

/// Names the heuristics treat as noise or as annotations.
///
/// The defaults cover common engine reflection macros. Configuration can add
/// project-specific names on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    storage_keywords: Vec<String>,
    stripped_macros: Vec<String>,
    annotation_macros: Vec<String>,
    body_macros: Vec<String>,
    export_macro_suffix: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            storage_keywords: to_owned(STORAGE_KEYWORDS),
            stripped_macros: to_owned(STRIPPED_MACROS),
            annotation_macros: to_owned(ANNOTATION_MACROS),
            body_macros: to_owned(BODY_MACROS),
            export_macro_suffix: EXPORT_MACRO_SUFFIX.to_string(),
        }
    }
}

impl Vocabulary {
    #[must_use]
    pub fn with_annotation_macros<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.annotation_macros, names);
        self
    }

    #[must_use]
    pub fn with_stripped_macros<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.stripped_macros, names);
        self
    }

    #[must_use]
    pub fn with_body_macros<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.body_macros, names);
        self
    }

    #[must_use]
    pub fn with_export_macro_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.export_macro_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn storage_keywords(&self) -> &[String] {
        &self.storage_keywords
    }

    #[must_use]
    pub fn annotation_macros(&self) -> &[String] {
        &self.annotation_macros
    }

    #[must_use]
    pub fn export_macro_suffix(&self) -> &str {
        &self.export_macro_suffix
    }

    /// Whether a leading macro invocation named `name` is dropped from type text.
    #[must_use]
    pub fn is_strippable_macro(&self, name: &str) -> bool {
        self.stripped_macros.iter().any(|m| m == name)
            || self.annotation_macros.iter().any(|m| m == name)
    }

    /// Whether `name` is a class-body boilerplate macro such as `GENERATED_BODY`.
    #[must_use]
    pub fn is_body_macro(&self, name: &str) -> bool {
        self.body_macros.iter().any(|m| m == name)
    }

    /// Whether `token` looks like an export macro such as `ENGINE_API`.
    #[must_use]
    pub fn is_export_macro(&self, token: &str) -> bool {
        let suffix = self.export_macro_suffix.as_str();
        !suffix.is_empty()
            && token.len() > suffix.len()
            && token.ends_with(suffix)
            && token.starts_with(|c: char| c.is_ascii_uppercase())
            && token
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn extend_unique<I, S>(target: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !name.is_empty() && !target.contains(&name) {
            target.push(name);
        }
    }
}
