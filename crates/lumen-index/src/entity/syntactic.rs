//! Entities derived from the syntax tree itself.
//!
//! This is the default host when no external symbol index is attached. It
//! reads names, types, access and specifiers straight off the grammar nodes
//! and leaves anything it cannot see (abstractness, macro-hidden modifiers)
//! to the text fallback.

use ast_grep_core::Node;
use lumen_core::{Access, TypeKind};

use super::{EntityBridge, ModifierFlags, SemanticEntity, UNNAMED};
use crate::heuristics::{owner_segment, split_qualified};
use crate::kinds::{NodeKind, classify, is_declarator_family, is_type_specifier};
use crate::navigation::{
    declared_name_node, enclosing_namespace, enclosing_type, explicit_access,
    function_declarator_of, in_anonymous_namespace, is_function_pointer, member_scope_node,
};

/// An entity read from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntacticEntity {
    name: String,
    type_presentation: Option<String>,
    access: Option<Access>,
    modifiers: ModifierFlags,
    containing_type: Option<String>,
    namespace: String,
}

impl SemanticEntity for SyntacticEntity {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn type_presentation(&self) -> Option<String> {
        self.type_presentation.clone()
    }

    fn access(&self) -> Option<Access> {
        self.access
    }

    fn modifiers(&self) -> ModifierFlags {
        self.modifiers
    }

    fn containing_type(&self) -> Option<String> {
        self.containing_type.clone()
    }

    fn namespace(&self) -> Option<String> {
        Some(self.namespace.clone())
    }
}

/// Bridge that answers every type declaration and declarator from the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticBridge;

impl<D: ast_grep_core::Doc> EntityBridge<D> for SyntacticBridge {
    type Entity = SyntacticEntity;

    fn entity_for(&self, node: &Node<D>) -> Option<SyntacticEntity> {
        match classify(node) {
            NodeKind::TypeDeclaration => Some(type_entity(node)),
            NodeKind::Declarator(_) => Some(declarator_entity(node)),
            NodeKind::ForwardDeclaration | NodeKind::Include | NodeKind::Other => None,
        }
    }
}

fn type_entity<D: ast_grep_core::Doc>(node: &Node<D>) -> SyntacticEntity {
    SyntacticEntity {
        name: type_name(node).unwrap_or_else(|| UNNAMED.to_string()),
        type_presentation: None,
        access: Some(scope_access(node, false)),
        modifiers: ModifierFlags::default(),
        containing_type: enclosing_type(node).and_then(|owner| type_name(&owner)),
        namespace: enclosing_namespace(node),
    }
}

fn declarator_entity<D: ast_grep_core::Doc>(node: &Node<D>) -> SyntacticEntity {
    let declaration = node.parent();
    let (name, scope) = declared_name(node);
    let is_static = declaration
        .as_ref()
        .is_some_and(|d| has_storage_class(d, "static"));

    let containing_type = scope
        .as_deref()
        .and_then(owner_segment)
        .map(ToString::to_string)
        .or_else(|| enclosing_type(node).and_then(|owner| type_name(&owner)));

    SyntacticEntity {
        name,
        type_presentation: declaration.as_ref().and_then(|d| type_presentation(d, node)),
        access: Some(scope_access(node, is_static)),
        modifiers: ModifierFlags {
            is_static: is_static.then_some(true),
            is_virtual: declaration
                .as_ref()
                .is_some_and(|d| d.children().any(|c| c.text().trim() == "virtual"))
                .then_some(true),
            is_abstract: None,
            is_override: function_declarator_of(node)
                .is_some_and(|f| {
                    f.children().any(|c| {
                        c.kind().as_ref() == "virtual_specifier" && c.text().trim() == "override"
                    })
                })
                .then_some(true),
        },
        containing_type,
        namespace: enclosing_namespace(node),
    }
}

/// Simple name of a class/struct/union specifier, `None` when anonymous.
fn type_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let name = node.field("name")?;
    let text = normalize(&name.text());
    let simple = split_qualified(&text).map_or(text.as_str(), |(_, name)| name);
    (!simple.is_empty()).then(|| simple.to_string())
}

/// Declared name plus the explicit `Scope::` qualification, if any.
fn declared_name<D: ast_grep_core::Doc>(node: &Node<D>) -> (String, Option<String>) {
    let Some(name_node) = declared_name_node(node) else {
        return (UNNAMED.to_string(), None);
    };
    if name_node.kind().as_ref() != "qualified_identifier" {
        return (non_empty(name_text(&name_node)), None);
    }

    let mut scopes = Vec::new();
    let mut current = name_node;
    while current.kind().as_ref() == "qualified_identifier" {
        if let Some(scope) = current.field("scope") {
            scopes.push(normalize(&scope.text()));
        }
        let Some(inner) = current.field("name") else {
            let text = normalize(&current.text());
            return split_qualified(&text).map_or_else(
                || (non_empty(text.clone()), None),
                |(scope, name)| (name.to_string(), Some(scope.to_string())),
            );
        };
        current = inner;
    }
    let scope = (!scopes.is_empty()).then(|| scopes.join("::"));
    (non_empty(name_text(&current)), scope)
}

fn name_text<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let text = node.text();
    if node.kind().as_ref() == "operator_cast" {
        let head = text.split_once('(').map_or(&text[..], |(head, _)| head);
        return normalize(head);
    }
    normalize(&text)
}

/// Rendered type from the declaration's type field, qualifiers and the
/// declarator's pointer/reference wrappers.
///
/// Function pointers render as `Ret (*)(Params)`. An anonymous aggregate
/// has no presentable type.
fn type_presentation<D: ast_grep_core::Doc>(
    declaration: &Node<D>,
    declarator: &Node<D>,
) -> Option<String> {
    let mut base = base_type(declaration, declarator.range().start)?;
    if base == "auto" {
        if let Some(trailing) = trailing_return_type(declarator) {
            base = trailing;
        }
    }
    let signature = match declarator.kind().as_ref() {
        "init_declarator" => declarator.field("declarator")?,
        _ => declarator.clone(),
    };
    if is_function_pointer(&signature) {
        return function_pointer_type(&base, &signature);
    }
    Some(format!("{base}{}", declarator_sigils(declarator)))
}

/// Qualifiers and type of `declaration` that start before byte `end`.
fn base_type<D: ast_grep_core::Doc>(declaration: &Node<D>, end: usize) -> Option<String> {
    let type_range = declaration.field("type")?.range();
    let mut parts = Vec::new();
    for child in declaration
        .children()
        .take_while(|c| c.range().start < end)
        .filter(|c| c.kind().as_ref() == "type_qualifier" || c.range() == type_range)
    {
        parts.push(type_text(&child)?);
    }
    Some(parts.join(" "))
}

/// `Ret (*)(A, B)` for a function-pointer declarator; parameter names are
/// dropped.
fn function_pointer_type<D: ast_grep_core::Doc>(ret: &str, signature: &Node<D>) -> Option<String> {
    let function = function_declarator_of(signature)?;
    let pointer = function
        .field("declarator")?
        .children()
        .find(|c| c.is_named() && is_declarator_family(c.kind().as_ref()))?;
    let mut params = Vec::new();
    if let Some(list) = function.field("parameters") {
        for param in list.children() {
            if param.text().trim() == "..." {
                params.push("...".to_string());
                continue;
            }
            if !param.is_named() || param.kind().as_ref() == "comment" {
                continue;
            }
            let rendered = match param.field("declarator") {
                Some(declarator) => type_presentation(&param, &declarator),
                None => base_type(&param, param.range().end),
            };
            params.extend(rendered);
        }
    }
    Some(format!(
        "{ret} ({})({})",
        declarator_sigils(&pointer),
        params.join(", ")
    ))
}

/// Type text; an inline aggregate definition renders as its head only, and
/// an anonymous one as nothing.
fn type_text<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let text = node.text();
    let kind = node.kind();
    if is_type_specifier(kind.as_ref()) || kind.as_ref() == "enum_specifier" {
        node.field("name")?;
        if let Some((head, _)) = text.split_once('{') {
            return Some(normalize(head));
        }
    }
    Some(normalize(&text))
}

fn trailing_return_type<D: ast_grep_core::Doc>(declarator: &Node<D>) -> Option<String> {
    let function = function_declarator_of(declarator)?;
    let trailing = function
        .children()
        .find(|c| c.kind().as_ref() == "trailing_return_type")?;
    let text = trailing.text();
    let ty = normalize(text.trim_start().trim_start_matches("->"));
    (!ty.is_empty()).then_some(ty)
}

/// `*`, `&` and `&&` wrappers from the outside in, up to the function
/// declarator or the name.
fn declarator_sigils<D: ast_grep_core::Doc>(declarator: &Node<D>) -> String {
    let mut sigils = String::new();
    let mut current = declarator.clone();
    loop {
        match current.kind().as_ref() {
            "pointer_declarator" | "abstract_pointer_declarator" => sigils.push('*'),
            "reference_declarator" | "abstract_reference_declarator" => {
                let rvalue = current.text().trim_start().starts_with("&&");
                sigils.push_str(if rvalue { "&&" } else { "&" });
            }
            "init_declarator" | "attributed_declarator" => {}
            _ => break,
        }
        let next = current.field("declarator").or_else(|| {
            current
                .children()
                .find(|c| c.is_named() && c.kind().as_ref() != "type_qualifier")
        });
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    sigils
}

fn has_storage_class<D: ast_grep_core::Doc>(declaration: &Node<D>, keyword: &str) -> bool {
    declaration
        .children()
        .any(|c| c.kind().as_ref() == "storage_class_specifier" && c.text().trim() == keyword)
}

/// Access of a declaration based on where it sits.
///
/// Members use the nearest access label, else the owner's default. At
/// namespace scope, `static` and anonymous namespaces give internal linkage.
fn scope_access<D: ast_grep_core::Doc>(node: &Node<D>, is_static: bool) -> Access {
    if let Some(owner) = enclosing_type(node) {
        return member_access(node, &owner);
    }
    if is_static || in_anonymous_namespace(node) {
        Access::Internal
    } else {
        Access::Public
    }
}

fn member_access<D: ast_grep_core::Doc>(node: &Node<D>, owner: &Node<D>) -> Access {
    let labelled = member_scope_node(node)
        .and_then(|scope| explicit_access(&scope))
        .and_then(|keyword| Access::from_keyword(&keyword));
    if let Some(access) = labelled {
        return access;
    }
    // Members of an anonymous aggregate take their access from its position.
    if owner.field("name").is_none() {
        if let Some(outer) = enclosing_type(owner) {
            return member_access(owner, &outer);
        }
    }
    specifier_kind(owner).default_member_access()
}

fn specifier_kind<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeKind {
    match node.kind().as_ref() {
        "struct_specifier" => TypeKind::Struct,
        "union_specifier" => TypeKind::Union,
        _ => TypeKind::Class,
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(name: String) -> String {
    if name.is_empty() {
        UNNAMED.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::descendants;
    use crate::parser::parse_source;
    use ast_grep_language::SupportLang;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entities(source: &str) -> Vec<SyntacticEntity> {
        let tree = parse_source(source, SupportLang::Cpp);
        descendants(&tree.root())
            .iter()
            .filter_map(|n| SyntacticBridge.entity_for(n))
            .collect()
    }

    fn entity(source: &str, name: &str) -> SyntacticEntity {
        entities(source)
            .into_iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("entity {name:?} not found"))
    }

    #[test]
    fn class_entity_in_namespace() {
        let e = entity("namespace game { class Hero {}; }", "Hero");
        assert_eq!(e.namespace().as_deref(), Some("game"));
        assert_eq!(e.access(), Some(Access::Public));
        assert_eq!(e.containing_type(), None);
    }

    #[test]
    fn anonymous_struct_is_unnamed() {
        let all = entities("struct { int x; } point;");
        assert!(all.iter().any(|e| e.is_unnamed()));
    }

    #[test]
    fn member_access_follows_labels_and_defaults() {
        let source = "class C { int hidden; public: int shown; };\nstruct S { int open; };";
        assert_eq!(entity(source, "hidden").access(), Some(Access::Private));
        assert_eq!(entity(source, "shown").access(), Some(Access::Public));
        assert_eq!(entity(source, "open").access(), Some(Access::Public));
    }

    #[test]
    fn pointer_and_reference_types() {
        let source = "class C { const FString& Name() const; Actor** Slots; };";
        assert_eq!(
            entity(source, "Name").type_presentation().as_deref(),
            Some("const FString&")
        );
        assert_eq!(
            entity(source, "Slots").type_presentation().as_deref(),
            Some("Actor**")
        );
    }

    #[test]
    fn constructor_has_no_type() {
        let widgets: Vec<_> = entities("class Widget { public: Widget(); };")
            .into_iter()
            .filter(|e| e.name == "Widget")
            .collect();
        assert_eq!(widgets.len(), 2, "type and constructor");
        assert!(widgets.iter().all(|e| e.type_presentation().is_none()));
    }

    #[test]
    fn qualified_definition_splits_scope() {
        let e = entity("void AController::Possess(APawn* InPawn) {}", "Possess");
        assert_eq!(e.containing_type().as_deref(), Some("AController"));
        assert_eq!(e.type_presentation().as_deref(), Some("void"));
    }

    #[test]
    fn nested_qualification_uses_last_scope() {
        let e = entity("int outer::Inner::Count() { return 0; }", "Count");
        assert_eq!(e.containing_type().as_deref(), Some("Inner"));
    }

    #[test]
    fn specifier_modifiers() {
        let source = "class Base { virtual void Tick() override; static int Total; };";
        let tick = entity(source, "Tick").modifiers();
        assert_eq!(tick.is_virtual, Some(true));
        assert_eq!(tick.is_override, Some(true));
        assert_eq!(tick.is_abstract, None);
        assert_eq!(entity(source, "Total").modifiers().is_static, Some(true));
    }

    #[test]
    fn static_free_function_is_internal() {
        let source = "static void helper();\nvoid exported();\nnamespace { void hidden(); }";
        assert_eq!(entity(source, "helper").access(), Some(Access::Internal));
        assert_eq!(entity(source, "exported").access(), Some(Access::Public));
        assert_eq!(entity(source, "hidden").access(), Some(Access::Internal));
    }

    #[test]
    fn inline_aggregate_type_renders_head() {
        let e = entity("struct Point { int x; } origin;", "origin");
        assert_eq!(e.type_presentation().as_deref(), Some("struct Point"));
    }

    #[test]
    fn anonymous_aggregate_has_no_type() {
        let e = entity("struct { int x; } origin;", "origin");
        assert_eq!(e.type_presentation(), None);
    }

    #[rstest]
    #[case("struct S { void (*cb)(int x); };", "cb", "void (*)(int)")]
    #[case("int (*compare)(const void* a, const void* b);", "compare", "int (*)(const void*, const void*)")]
    #[case("void (*on_log)(const char*, ...);", "on_log", "void (*)(const char*, ...)")]
    #[case("void (*reset)() = nullptr;", "reset", "void (*)()")]
    fn function_pointer_types(#[case] source: &str, #[case] name: &str, #[case] expected: &str) {
        assert_eq!(entity(source, name).type_presentation().as_deref(), Some(expected));
    }

    #[test]
    fn trailing_return_type_replaces_auto() {
        let e = entity("auto make() -> Widget*;", "make");
        assert_eq!(e.type_presentation().as_deref(), Some("Widget*"));
    }
}
