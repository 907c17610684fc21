//! Per-walk storage for type records and namespace buckets.
//!
//! Records stay here while members are attached and are moved into the
//! model exactly once, in encounter order, by [`TypeArena::assemble`].

use std::collections::HashMap;

use lumen_core::{FreeFunction, MemberRecord, Namespace, StructuralModel, TypeRecord};

use crate::navigation::NodeId;

/// Position of a record in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIndex(usize);

#[derive(Debug)]
struct TypeSlot {
    record: TypeRecord,
    namespace: String,
}

#[derive(Debug, Default)]
pub struct TypeArena {
    slots: Vec<TypeSlot>,
    by_node: HashMap<NodeId, TypeIndex>,
    functions: Vec<(String, FreeFunction)>,
}

impl TypeArena {
    /// Register a type record declared by `node` in `namespace` (empty for
    /// file scope).
    pub fn insert_type(&mut self, node: NodeId, namespace: String, record: TypeRecord) -> TypeIndex {
        let index = TypeIndex(self.slots.len());
        self.slots.push(TypeSlot { record, namespace });
        self.by_node.insert(node, index);
        index
    }

    pub fn index_of(&self, node: &NodeId) -> Option<TypeIndex> {
        self.by_node.get(node).copied()
    }

    pub fn record(&self, index: TypeIndex) -> &TypeRecord {
        &self.slots[index.0].record
    }

    pub fn push_member(&mut self, index: TypeIndex, member: MemberRecord) {
        self.slots[index.0].record.members.push(member);
    }

    pub fn push_function(&mut self, namespace: String, function: FreeFunction) {
        self.functions.push((namespace, function));
    }

    /// First record named `name`, preferring one in `namespace`.
    pub fn find_by_name(&self, name: &str, namespace: &str) -> Option<TypeIndex> {
        let named = || {
            self.slots
                .iter()
                .enumerate()
                .filter(move |(_, slot)| slot.record.name == name)
        };
        named()
            .find(|(_, slot)| slot.namespace == namespace)
            .or_else(|| named().next())
            .map(|(i, _)| TypeIndex(i))
    }

    pub fn type_count(&self) -> usize {
        self.slots.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Move every record into its bucket and build the model.
    ///
    /// Namespaces appear in the order their first type or function was
    /// encountered. Types come before functions within one walk, so a
    /// namespace holding only functions sorts after all type namespaces.
    pub fn assemble(self, language: &str, includes: Vec<String>) -> StructuralModel {
        let mut model = StructuralModel::empty(language);
        let mut buckets: HashMap<String, usize> = HashMap::new();

        let mut bucket_for = |model: &mut StructuralModel, namespace: String| -> usize {
            *buckets.entry(namespace).or_insert_with_key(|name| {
                model.namespaces.push(Namespace::new(name.clone()));
                model.namespaces.len() - 1
            })
        };

        for slot in self.slots {
            if slot.namespace.is_empty() {
                model.types.push(slot.record);
            } else {
                let bucket = bucket_for(&mut model, slot.namespace);
                model.namespaces[bucket].types.push(slot.record);
            }
        }
        for (namespace, function) in self.functions {
            if namespace.is_empty() {
                model.functions.push(function);
            } else {
                let bucket = bucket_for(&mut model, namespace);
                model.namespaces[bucket].functions.push(function);
            }
        }
        model.includes = includes;
        model
    }
}
