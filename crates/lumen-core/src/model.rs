//! Structural model records.
//!
//! One [`StructuralModel`] describes one source file. Namespaces are flat:
//! `A::B` is its own entry, never a child of `A`. Each [`TypeRecord`] lives in
//! exactly one namespace or in the top-level `types` list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Access, MemberKind, TypeKind};

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Root output of one walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructuralModel {
    pub language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<Namespace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FreeFunction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
}

impl StructuralModel {
    #[must_use]
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Every type record in the model, namespaced ones first.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeRecord> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.types.iter())
            .chain(self.types.iter())
    }

    /// Every free function (or file-scope variable), namespaced ones first.
    pub fn all_functions(&self) -> impl Iterator<Item = &FreeFunction> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.functions.iter())
            .chain(self.functions.iter())
    }

    /// First type record with the given name, in any bucket.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeRecord> {
        self.all_types().find(|t| t.name == name)
    }

    #[must_use]
    pub fn namespace(&self, qualified_name: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .find(|ns| ns.qualified_name == qualified_name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
            && self.types.is_empty()
            && self.functions.is_empty()
            && self.includes.is_empty()
    }
}

/// A flattened namespace bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FreeFunction>,
}

impl Namespace {
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            types: Vec::new(),
            functions: Vec::new(),
        }
    }
}

/// A class, struct or union with a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub access: Access,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberRecord>,
}

impl TypeRecord {
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A member of a type, or (as [`FreeFunction`]) a namespace-scope declaration.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub access: Access,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterRecord>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_abstract: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_override: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containing_type: Option<String>,
}

/// Namespace-scope functions and variables share the member shape.
pub type FreeFunction = MemberRecord;

/// One named parameter of a callable member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default)]
    pub has_default: bool,
}
