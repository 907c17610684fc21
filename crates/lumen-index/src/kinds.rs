//! Closed classification of grammar node kinds.
//!
//! The tree-sitter C and C++ grammars expose hundreds of kind strings. The
//! walker only cares about five roles, so every node is classified exactly
//! once into [`NodeKind`] and all later dispatch is an exhaustive `match`.

use ast_grep_core::Node;

use crate::navigation::{function_declarator_of, is_function_pointer};

/// Aggregate specifiers that may introduce a type record.
pub const TYPE_SPECIFIER_KINDS: &[&str] = &["class_specifier", "struct_specifier", "union_specifier"];

/// Declarations whose `declarator` children introduce named entities.
const DECLARATION_KINDS: &[&str] = &[
    "declaration",
    "field_declaration",
    "function_definition",
    "parameter_declaration",
    "optional_parameter_declaration",
    "variadic_parameter_declaration",
];

/// Node kinds that can sit in the declarator slot of a declaration.
const DECLARATOR_SLOT_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "qualified_identifier",
    "function_declarator",
    "pointer_declarator",
    "reference_declarator",
    "array_declarator",
    "init_declarator",
    "parenthesized_declarator",
    "attributed_declarator",
    "structured_binding_declarator",
    "variadic_declarator",
    "operator_cast",
];

const INCLUDE_KINDS: &[&str] = &["preproc_include", "preproc_import", "import_declaration"];

/// Role of a node as seen by the structural walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A class/struct/union specifier with a body.
    TypeDeclaration,
    /// A class/struct/union specifier without a body.
    ForwardDeclaration,
    Declarator(DeclaratorKind),
    Include,
    Other,
}

/// Shape of a declarator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaratorKind {
    Plain,
    /// Wraps a function declarator: a signature, possibly behind `*` or `&`.
    Function,
    /// Carries an initializer (`int x = 1`, or a defaulted parameter).
    WithInitializer,
}

/// Classify one node.
pub fn classify<D: ast_grep_core::Doc>(node: &Node<D>) -> NodeKind {
    let kind = node.kind();
    let kind = kind.as_ref();

    if TYPE_SPECIFIER_KINDS.contains(&kind) {
        return if node.field("body").is_some() {
            NodeKind::TypeDeclaration
        } else {
            NodeKind::ForwardDeclaration
        };
    }
    if INCLUDE_KINDS.contains(&kind) {
        return NodeKind::Include;
    }
    if DECLARATOR_SLOT_KINDS.contains(&kind) && occupies_declarator_slot(node) {
        return NodeKind::Declarator(declarator_kind(node));
    }
    NodeKind::Other
}

/// Whether `kind` names a class/struct/union specifier.
#[must_use]
pub fn is_type_specifier(kind: &str) -> bool {
    TYPE_SPECIFIER_KINDS.contains(&kind)
}

/// Whether `kind` belongs to the declarator family (`*_declarator`).
#[must_use]
pub fn is_declarator_family(kind: &str) -> bool {
    kind.ends_with("_declarator")
}

/// A declarator-slot node is one whose parent is a declaration and which is
/// neither that declaration's type nor its default value.
fn occupies_declarator_slot<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let parent_kind = parent.kind();
    if !DECLARATION_KINDS.contains(&parent_kind.as_ref()) {
        return false;
    }
    // Friend declarations name entities owned elsewhere.
    if parent
        .parent()
        .is_some_and(|p| p.kind().as_ref() == "friend_declaration")
    {
        return false;
    }
    // `class GAME_API AHero : ...` misparses as a declaration whose type is
    // the bodiless head, followed by an error node; nothing in it is declared.
    let headless_type = parent
        .field("type")
        .is_some_and(|ty| is_type_specifier(ty.kind().as_ref()) && ty.field("body").is_none());
    if headless_type && parent.children().any(|c| c.kind().as_ref() == "ERROR") {
        return false;
    }
    let range = node.range();
    let same_as = |field: &str| parent.field(field).is_some_and(|f| f.range() == range);
    !same_as("type") && !same_as("default_value") && !same_as("body")
}

fn declarator_kind<D: ast_grep_core::Doc>(node: &Node<D>) -> DeclaratorKind {
    let kind = node.kind();
    if kind.as_ref() == "init_declarator"
        || node
            .parent()
            .is_some_and(|p| p.kind().as_ref() == "optional_parameter_declaration")
    {
        return DeclaratorKind::WithInitializer;
    }
    if kind.as_ref() == "operator_cast"
        || (function_declarator_of(node).is_some() && !is_function_pointer(node))
    {
        return DeclaratorKind::Function;
    }
    DeclaratorKind::Plain
}
