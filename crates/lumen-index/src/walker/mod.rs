//! Structural walker.
//!
//! One pass over the tree classifies every node. Type records are built
//! first, in encounter order, so that the declarator pass can find each
//! member's owner in the arena. The arena is then assembled into the model.

mod arena;
mod includes;
mod members;

#[cfg(test)]
mod tests;

use ast_grep_core::Node;
use lumen_core::StructuralModel;
use tracing::{debug, trace};

use self::arena::{TypeArena, TypeIndex};
use self::includes::include_path;
use self::members::{Placement, is_callable_declarator};
use crate::entity::{EntityBridge, SemanticEntity};
use crate::error::IndexError;
use crate::heuristics::{Vocabulary, is_macro_artifact, owner_from_qualified_text};
use crate::kinds::{NodeKind, classify, is_type_specifier};
use crate::lines::LineIndex;
use crate::navigation::{
    NodeId, descendants, enclosing_namespace, enclosing_type, is_local_declarator,
    is_parameter_declarator,
};

type EntityOf<B, D> = <B as EntityBridge<D>>::Entity;

/// Builds a [`StructuralModel`] from one syntax tree.
///
/// Holds only borrowed, read-only state: walks over different trees can run
/// on different threads with their own walkers.
#[derive(Debug)]
pub struct Walker<'a, B> {
    bridge: &'a B,
    lines: &'a LineIndex,
    vocabulary: &'a Vocabulary,
    language: &'a str,
}

impl<'a, B> Walker<'a, B> {
    #[must_use]
    pub const fn new(
        bridge: &'a B,
        lines: &'a LineIndex,
        vocabulary: &'a Vocabulary,
        language: &'a str,
    ) -> Self {
        Self {
            bridge,
            lines,
            vocabulary,
            language,
        }
    }

    /// Walk the tree under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EntitySurfaceUnavailable`] when the bridge has no
    /// entity lookup at all. Malformed input never errors; unreadable items
    /// are skipped.
    pub fn walk<D>(&self, root: &Node<D>) -> Result<StructuralModel, IndexError>
    where
        D: ast_grep_core::Doc,
        B: EntityBridge<D>,
    {
        if !self.bridge.surface_available() {
            return Err(IndexError::EntitySurfaceUnavailable);
        }

        let mut types: Vec<(Node<D>, EntityOf<B, D>)> = Vec::new();
        let mut declarators: Vec<(Node<D>, EntityOf<B, D>)> = Vec::new();
        let mut includes = Vec::new();

        for node in descendants(root) {
            match classify(&node) {
                NodeKind::TypeDeclaration => {
                    if let Some(entity) = self.named_entity(&node) {
                        types.push((node, entity));
                    }
                }
                NodeKind::Declarator(_) => {
                    if is_macro_artifact(&node, self.vocabulary) {
                        trace!(text = %node.text(), "macro invocation, node dropped");
                        continue;
                    }
                    if let Some(entity) = self.named_entity(&node) {
                        declarators.push((node, entity));
                    }
                }
                NodeKind::Include => {
                    if let Some(path) = include_path(&node) {
                        includes.push(path);
                    }
                }
                NodeKind::ForwardDeclaration | NodeKind::Other => {}
            }
        }

        let mut arena = TypeArena::default();
        for (node, entity) in &types {
            let record = self.type_record(node, entity);
            let namespace = entity
                .namespace()
                .unwrap_or_else(|| enclosing_namespace(node));
            arena.insert_type(NodeId::of(node), namespace, record);
        }

        let mut excluded = 0usize;
        for (node, entity) in &declarators {
            if !self.place_declarator(node, entity, &mut arena) {
                excluded += 1;
            }
        }

        debug!(
            language = self.language,
            types = arena.type_count(),
            declarators = declarators.len(),
            excluded,
            functions = arena.function_count(),
            includes = includes.len(),
            "structural walk complete"
        );
        Ok(arena.assemble(self.language, includes))
    }

    /// The node's entity, unless it is missing or unnamed.
    fn named_entity<D>(&self, node: &Node<D>) -> Option<EntityOf<B, D>>
    where
        D: ast_grep_core::Doc,
        B: EntityBridge<D>,
    {
        let line = self.lines.line_of(node.range().start);
        let Some(entity) = self.bridge.entity_for(node) else {
            trace!(kind = %node.kind(), ?line, "no entity, node dropped");
            return None;
        };
        if entity.is_unnamed() {
            trace!(kind = %node.kind(), ?line, "unnamed entity, node dropped");
            return None;
        }
        Some(entity)
    }

    /// Attach a declarator to its owner or record it as a free function.
    ///
    /// Returns `false` for parameters, locals and members of types that have
    /// no record.
    fn place_declarator<D>(
        &self,
        node: &Node<D>,
        entity: &EntityOf<B, D>,
        arena: &mut TypeArena,
    ) -> bool
    where
        D: ast_grep_core::Doc,
        B: EntityBridge<D>,
    {
        if is_parameter_declarator(node) || is_local_declarator(node) {
            return false;
        }
        let callable = is_callable_declarator(node);

        if let Some(owner) = owning_record(node, arena) {
            let record = arena.record(owner);
            let (owner_name, owner_kind) = (record.name.clone(), record.kind);
            let member = self.member_record(
                node,
                entity,
                Placement {
                    owner: Some(&owner_name),
                    owner_kind: Some(owner_kind),
                    containing_type: None,
                    callable,
                },
            );
            arena.push_member(owner, member);
            return true;
        }
        if enclosing_type(node).is_some() {
            trace!(name = entity.display_name(), "member of an unrecorded type, dropped");
            return false;
        }

        let namespace = entity
            .namespace()
            .unwrap_or_else(|| enclosing_namespace(node));
        let containing_type = if callable {
            out_of_line_owner(node, entity)
        } else {
            None
        };

        let Some(owner_name) = containing_type else {
            let function = self.member_record(
                node,
                entity,
                Placement {
                    owner: None,
                    owner_kind: None,
                    containing_type: None,
                    callable,
                },
            );
            arena.push_function(namespace, function);
            return true;
        };

        match arena.find_by_name(&owner_name, &namespace) {
            Some(owner) => {
                let record = arena.record(owner);
                let owner_kind = record.kind;
                let declared_access = record.member(entity.display_name()).map(|m| m.access);
                let mut member = self.member_record(
                    node,
                    entity,
                    Placement {
                        owner: Some(&owner_name),
                        owner_kind: Some(owner_kind),
                        containing_type: Some(owner_name.clone()),
                        callable,
                    },
                );
                if let Some(access) = declared_access {
                    member.access = access;
                }
                arena.push_member(owner, member);
            }
            None => {
                trace!(owner = %owner_name, name = entity.display_name(), "out-of-line owner not in this file");
                let function = self.member_record(
                    node,
                    entity,
                    Placement {
                        owner: None,
                        owner_kind: None,
                        containing_type: Some(owner_name),
                        callable,
                    },
                );
                arena.push_function(namespace, function);
            }
        }
        true
    }
}

/// Nearest enclosing type declaration that has a record in this walk.
///
/// Skipping unrecorded types lets members of an anonymous union land on the
/// class around it.
fn owning_record<D: ast_grep_core::Doc>(node: &Node<D>, arena: &TypeArena) -> Option<TypeIndex> {
    node.ancestors()
        .filter(|a| is_type_specifier(a.kind().as_ref()))
        .find_map(|a| arena.index_of(&NodeId::of(&a)))
}

/// Owner of an out-of-line definition: the entity's answer first, then an
/// `Owner::name` pattern in the declarator text.
fn out_of_line_owner<D, E>(node: &Node<D>, entity: &E) -> Option<String>
where
    D: ast_grep_core::Doc,
    E: SemanticEntity,
{
    entity
        .containing_type()
        .filter(|owner| !owner.is_empty())
        .or_else(|| owner_from_qualified_text(&node.text(), entity.display_name()))
}
