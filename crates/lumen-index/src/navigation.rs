//! Stateless ancestor and sibling queries over tree nodes.

use ast_grep_core::Node;

use crate::kinds::{is_declarator_family, is_type_specifier};

/// Node kinds that open a block-local scope.
const LOCAL_SCOPE_KINDS: &[&str] = &[
    "compound_statement",
    "for_statement",
    "for_range_loop",
    "while_statement",
    "do_statement",
    "if_statement",
    "switch_statement",
    "case_statement",
    "condition_clause",
    "try_statement",
    "catch_clause",
    "lambda_expression",
];

/// Identity of a node within one tree: its byte span plus its kind.
///
/// Two distinct nodes can share a span (a declarator wrapping a single
/// identifier), so the kind string disambiguates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub start: usize,
    pub end: usize,
    pub kind: String,
}

impl NodeId {
    pub fn of<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        let range = node.range();
        Self {
            start: range.start,
            end: range.end,
            kind: node.kind().to_string(),
        }
    }
}

/// Every node below `root` in preorder, `root` excluded.
pub fn descendants<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let mut out = Vec::new();
    let mut stack: Vec<Node<'r, D>> = root.children().collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
        out.push(node);
    }
    out
}

/// Whether a declarator belongs to a parameter list.
///
/// Walks upward until a type declaration or the file root. A declarator-kind
/// ancestor (or a parameter list) reached first means the node is a
/// parameter of some enclosing signature.
pub fn is_parameter_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    for ancestor in node.ancestors() {
        let kind = ancestor.kind();
        let kind = kind.as_ref();
        if is_type_specifier(kind) || kind == "translation_unit" {
            return false;
        }
        if is_declarator_family(kind) || kind == "parameter_list" || kind == "template_parameter_list"
        {
            return true;
        }
    }
    false
}

/// Whether a declarator lives inside a block, loop, conditional or lambda.
pub fn is_local_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.ancestors()
        .take_while(|a| a.kind().as_ref() != "translation_unit")
        .any(|a| LOCAL_SCOPE_KINDS.contains(&a.kind().as_ref()))
}

/// The function declarator reachable through a declarator chain, if any.
///
/// Follows the `declarator` field through pointer, reference and
/// parenthesized wrappers. Init declarators are not followed: their value
/// may itself be a call or lambda.
pub fn function_declarator_of<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    let mut current = node.clone();
    loop {
        let kind = current.kind().to_string();
        match kind.as_str() {
            "function_declarator" => return Some(current),
            "pointer_declarator"
            | "reference_declarator"
            | "parenthesized_declarator"
            | "attributed_declarator" => {}
            _ => return None,
        }
        current = current
            .field("declarator")
            .or_else(|| current.children().find(|c| c.is_named() && is_declarator_like(c)))?;
    }
}

/// Whether `node` declares a pointer or reference to a function, as in
/// `void (*cb)(int)`: the function declarator's own declarator is a
/// parenthesized pointer or reference.
pub fn is_function_pointer<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    let Some(inner) = function_declarator_of(node).and_then(|f| f.field("declarator")) else {
        return false;
    };
    if inner.kind().as_ref() != "parenthesized_declarator" {
        return false;
    }
    inner.children().any(|c| {
        matches!(
            c.kind().as_ref(),
            "pointer_declarator" | "reference_declarator"
        )
    })
}

fn is_declarator_like<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    let kind = node.kind();
    is_declarator_family(kind.as_ref())
        || matches!(
            kind.as_ref(),
            "identifier"
                | "field_identifier"
                | "qualified_identifier"
                | "destructor_name"
                | "operator_name"
                | "operator_cast"
        )
}

/// The innermost name-bearing node of a declarator chain.
///
/// Returns identifiers, field identifiers, destructor and operator names,
/// and qualified identifiers (the caller splits scope from name).
pub fn declared_name_node<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    match node.kind().as_ref() {
        "identifier" | "field_identifier" | "destructor_name" | "operator_name"
        | "qualified_identifier" | "operator_cast" | "type_identifier" => {
            return Some(node.clone());
        }
        "structured_binding_declarator" => return None,
        _ => {}
    }
    if let Some(inner) = node.field("declarator") {
        return declared_name_node(&inner);
    }
    node.children()
        .filter(|c| c.is_named() && is_declarator_like(c))
        .find_map(|c| declared_name_node(&c))
}

/// The direct child of a class body that contains `node`, if any.
pub fn member_scope_node<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut current = node.clone();
    loop {
        let parent = current.parent()?;
        let kind = parent.kind().to_string();
        match kind.as_str() {
            "field_declaration_list" => return Some(current),
            "translation_unit" | "compound_statement" => return None,
            _ => current = parent,
        }
    }
}

/// Access keyword set by the nearest preceding `public:`-style label.
pub fn explicit_access<D: ast_grep_core::Doc>(member_scope: &Node<D>) -> Option<String> {
    let mut current = member_scope.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() == "access_specifier" {
            return Some(sibling.text().trim().trim_end_matches(':').trim().to_string());
        }
        current = sibling.prev();
    }
    None
}

/// The innermost class/struct/union with a body enclosing `node`.
pub fn enclosing_type<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.ancestors()
        .find(|a| is_type_specifier(a.kind().as_ref()) && a.field("body").is_some())
}

/// Qualified name of the enclosing named namespaces, outermost first.
///
/// Anonymous namespaces contribute nothing; `namespace a::b {}` contributes
/// both segments.
pub fn enclosing_namespace<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let mut segments: Vec<String> = node
        .ancestors()
        .filter(|a| a.kind().as_ref() == "namespace_definition")
        .filter_map(|ns| ns.field("name").map(|n| n.text().trim().to_string()))
        .filter(|name| !name.is_empty())
        .collect();
    segments.reverse();
    segments.join("::")
}

/// Whether any enclosing namespace is anonymous.
pub fn in_anonymous_namespace<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.ancestors()
        .any(|a| a.kind().as_ref() == "namespace_definition" && a.field("name").is_none())
}
