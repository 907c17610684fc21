//! Declarators that are really macro invocations.
//!
//! Without a trailing `;`, `UPROPERTY(EditAnywhere)` reads as a declaration
//! of type `UPROPERTY` with the parenthesized declarator `(EditAnywhere)`,
//! and `GENERATED_BODY()` reads as a function declarator. Neither names a
//! member.

use ast_grep_core::Node;

use super::macros::leading_identifier;
use super::vocabulary::Vocabulary;
use crate::navigation::declared_name_node;

/// Whether the declarator `node` is a reflection or body macro call the
/// grammar misread as a declaration.
pub fn is_macro_artifact<D: ast_grep_core::Doc>(node: &Node<D>, vocab: &Vocabulary) -> bool {
    let is_macro = |name: &str| vocab.is_strippable_macro(name) || vocab.is_body_macro(name);

    let macro_typed = node
        .parent()
        .and_then(|declaration| declaration.field("type"))
        .is_some_and(|ty| leading_identifier(ty.text().trim()).is_some_and(is_macro));
    if macro_typed && node.text().trim_start().starts_with('(') {
        return true;
    }
    declared_name_node(node).is_some_and(|name| is_macro(name.text().trim()))
}
