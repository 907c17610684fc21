//! Best-effort access to semantic entities attached to tree nodes.
//!
//! A host that owns a symbol index implements [`EntityBridge`] and hands out
//! [`SemanticEntity`] values. Every accessor is optional: a missing answer
//! sends the walker to its text heuristics instead of failing.

mod syntactic;

pub use syntactic::{SyntacticBridge, SyntacticEntity};

use ast_grep_core::Node;
use lumen_core::Access;

/// Display name reported for anonymous entities.
pub const UNNAMED: &str = "<unnamed>";

/// Declaration modifiers an entity may expose. `None` means "not known".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierFlags {
    pub is_static: Option<bool>,
    pub is_virtual: Option<bool>,
    pub is_abstract: Option<bool>,
    pub is_override: Option<bool>,
}

impl ModifierFlags {
    /// Fill every unknown flag from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            is_static: self.is_static.or(fallback.is_static),
            is_virtual: self.is_virtual.or(fallback.is_virtual),
            is_abstract: self.is_abstract.or(fallback.is_abstract),
            is_override: self.is_override.or(fallback.is_override),
        }
    }
}

/// Semantic view of one declared entity.
pub trait SemanticEntity {
    /// Declared name; [`UNNAMED`] for anonymous entities.
    fn display_name(&self) -> &str;

    /// Rendered type: the declared type of a variable, the return type of a
    /// function.
    fn type_presentation(&self) -> Option<String> {
        None
    }

    fn access(&self) -> Option<Access> {
        None
    }

    fn modifiers(&self) -> ModifierFlags {
        ModifierFlags::default()
    }

    /// Owning type name for a member or an out-of-line definition.
    fn containing_type(&self) -> Option<String> {
        None
    }

    /// Qualified name of the enclosing namespace; empty at file scope.
    fn namespace(&self) -> Option<String> {
        None
    }

    fn is_unnamed(&self) -> bool {
        let name = self.display_name();
        name.is_empty() || name == UNNAMED
    }
}

/// Looks up the semantic entity behind a tree node.
pub trait EntityBridge<D: ast_grep_core::Doc> {
    type Entity: SemanticEntity;

    /// Whether the host can look up entities at all.
    fn surface_available(&self) -> bool {
        true
    }

    /// The entity declared by `node`, or `None` when the host cannot tell.
    fn entity_for(&self, node: &Node<D>) -> Option<Self::Entity>;
}

/// A bridge for hosts without any entity lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntitySurface;

impl SemanticEntity for std::convert::Infallible {
    fn display_name(&self) -> &str {
        match *self {}
    }
}

impl<D: ast_grep_core::Doc> EntityBridge<D> for NoEntitySurface {
    type Entity = std::convert::Infallible;

    fn surface_available(&self) -> bool {
        false
    }

    fn entity_for(&self, _node: &Node<D>) -> Option<Self::Entity> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl SemanticEntity for Named {
        fn display_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn unnamed_sentinel_and_empty_names() {
        assert!(Named(UNNAMED).is_unnamed());
        assert!(Named("").is_unnamed());
        assert!(!Named("Widget").is_unnamed());
    }

    #[test]
    fn modifier_fallback_fills_only_unknowns() {
        let known = ModifierFlags {
            is_static: Some(false),
            is_virtual: Some(true),
            ..ModifierFlags::default()
        };
        let text = ModifierFlags {
            is_static: Some(true),
            is_virtual: Some(false),
            is_abstract: Some(true),
            is_override: None,
        };
        let merged = known.or(text);
        assert_eq!(merged.is_static, Some(false));
        assert_eq!(merged.is_virtual, Some(true));
        assert_eq!(merged.is_abstract, Some(true));
        assert_eq!(merged.is_override, None);
    }
}
