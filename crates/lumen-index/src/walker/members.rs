//! Type, member and parameter record construction.

use ast_grep_core::Node;
use lumen_core::{Access, MemberKind, MemberRecord, ParameterRecord, TypeKind, TypeRecord};

use super::Walker;
use crate::entity::{EntityBridge, SemanticEntity};
use crate::heuristics::{
    annotations_for, declared_type_from_text, parent_prefix, parent_tail, parse_base_clause,
    text_modifiers, type_kind_from_text,
};
use crate::kinds::{DeclaratorKind, NodeKind, classify};
use crate::navigation::{
    explicit_access, function_declarator_of, is_function_pointer, member_scope_node,
};

const PARAMETER_KINDS: &[&str] = &[
    "parameter_declaration",
    "optional_parameter_declaration",
    "variadic_parameter_declaration",
];

/// Where a declarator ends up and what it is called there.
pub(super) struct Placement<'p> {
    /// Name of the type the record belongs to, if any.
    pub owner: Option<&'p str>,
    /// Kind of the owning type, for default access.
    pub owner_kind: Option<TypeKind>,
    /// Set only for out-of-line definitions.
    pub containing_type: Option<String>,
    pub callable: bool,
}

impl<B> Walker<'_, B> {
    pub(super) fn type_record<D, E>(&self, node: &Node<D>, entity: &E) -> TypeRecord
    where
        D: ast_grep_core::Doc,
        E: SemanticEntity,
    {
        let text = node.text();
        let (base_type, interfaces) = parse_base_clause(&text);
        TypeRecord {
            name: entity.display_name().to_string(),
            kind: type_kind_from_text(&text),
            line: self.line_of(node),
            access: entity.access().unwrap_or_else(|| fallback_access(node, None)),
            base_type,
            interfaces,
            annotations: annotations_for(node, self.vocabulary),
            members: Vec::new(),
        }
    }

    /// Build a member or free-function record for a declarator.
    pub(super) fn member_record<D, E>(
        &self,
        node: &Node<D>,
        entity: &E,
        placement: Placement<'_>,
    ) -> MemberRecord
    where
        D: ast_grep_core::Doc,
        B: EntityBridge<D>,
        E: SemanticEntity,
    {
        let simple_name = entity.display_name().to_string();
        let kind = member_kind(&simple_name, &placement);
        let declared_type = entity
            .type_presentation()
            .or_else(|| declared_type_from_text(node, self.vocabulary))
            .filter(|_| !matches!(kind, MemberKind::Constructor | MemberKind::Destructor));

        let text_flags = text_modifiers(
            &parent_prefix(node).unwrap_or_default(),
            &parent_tail(node).unwrap_or_default(),
        );
        let flags = entity.modifiers().or(text_flags);

        let name = match &placement.containing_type {
            Some(owner) => format!("{owner}::{simple_name}"),
            None => simple_name,
        };
        let (return_type, value_type) = if placement.callable {
            (declared_type, None)
        } else {
            (None, declared_type)
        };

        MemberRecord {
            name,
            kind,
            line: self.line_of(node),
            access: entity
                .access()
                .unwrap_or_else(|| fallback_access(node, placement.owner_kind)),
            return_type,
            value_type,
            parameters: if placement.callable {
                self.parameters(node)
            } else {
                Vec::new()
            },
            is_static: flags.is_static.unwrap_or(false),
            is_virtual: flags.is_virtual.unwrap_or(false),
            is_abstract: placement.callable && flags.is_abstract.unwrap_or(false),
            is_override: flags.is_override.unwrap_or(false),
            annotations: annotations_for(node, self.vocabulary),
            containing_type: placement.containing_type,
        }
    }

    /// Named parameters of the function declarator under `node`.
    fn parameters<D>(&self, node: &Node<D>) -> Vec<ParameterRecord>
    where
        D: ast_grep_core::Doc,
        B: EntityBridge<D>,
    {
        let Some(list) = function_declarator_of(node).and_then(|f| f.field("parameters")) else {
            return Vec::new();
        };
        list.children()
            .filter(|c| PARAMETER_KINDS.contains(&c.kind().as_ref()))
            .filter_map(|param| {
                let declarator = param.field("declarator")?;
                let NodeKind::Declarator(kind) = classify(&declarator) else {
                    return None;
                };
                let entity = self.bridge.entity_for(&declarator)?;
                if entity.is_unnamed() {
                    return None;
                }
                Some(ParameterRecord {
                    name: entity.display_name().to_string(),
                    value_type: entity
                        .type_presentation()
                        .or_else(|| declared_type_from_text(&declarator, self.vocabulary)),
                    has_default: kind == DeclaratorKind::WithInitializer,
                })
            })
            .collect()
    }

    fn line_of<D: ast_grep_core::Doc>(&self, node: &Node<D>) -> Option<u32> {
        self.lines.line_of(node.range().start)
    }
}

/// Whether a declarator declares something callable: its text, initializer
/// excluded, contains a `(`. Function pointers are values, not callables.
pub(super) fn is_callable_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    if node.kind().as_ref() == "init_declarator" {
        return node
            .field("declarator")
            .is_some_and(|inner| is_callable_declarator(&inner));
    }
    node.text().contains('(') && !is_function_pointer(node)
}

fn member_kind(name: &str, placement: &Placement<'_>) -> MemberKind {
    if !placement.callable {
        return MemberKind::Field;
    }
    let owner = placement.owner.or(placement.containing_type.as_deref());
    if owner.is_some_and(|owner| owner == name) {
        MemberKind::Constructor
    } else if name.starts_with('~') {
        MemberKind::Destructor
    } else if placement.owner.is_some() {
        MemberKind::Method
    } else {
        MemberKind::Function
    }
}

/// Access from node position when the entity does not report one.
fn fallback_access<D: ast_grep_core::Doc>(node: &Node<D>, owner_kind: Option<TypeKind>) -> Access {
    let labelled = member_scope_node(node)
        .and_then(|scope| explicit_access(&scope))
        .and_then(|keyword| Access::from_keyword(&keyword));
    match (labelled, owner_kind) {
        (Some(access), _) => access,
        (None, Some(kind)) => kind.default_member_access(),
        (None, None) => Access::Unknown,
    }
}
