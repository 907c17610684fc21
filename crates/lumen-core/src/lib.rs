//! # lumen-core
//!
//! Output types for the Lumen structural index.
//!
//! A [`StructuralModel`] is produced once per file by the walker in
//! `lumen-index` and handed to formatters unchanged. This crate holds:
//! - The model records (namespaces, types, members, parameters)
//! - The closed enums used by those records (access, type kind, member kind)
//!
//! Every record derives `serde` and `schemars` so the JSON contract and its
//! schema come from the same definitions. Empty collections are omitted from
//! the serialized form.

pub mod enums;
pub mod model;

pub use enums::{Access, MemberKind, TypeKind};
pub use model::{FreeFunction, MemberRecord, Namespace, ParameterRecord, StructuralModel, TypeRecord};
