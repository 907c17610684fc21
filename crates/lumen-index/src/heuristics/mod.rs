//! Text heuristics for structure the tree does not type.
//!
//! Everything here works on strings or on node text and offsets. Failures
//! are `None` or an empty list, never an error.

mod annotations;
mod artifacts;
mod bases;
mod declared_type;
mod macros;
mod mask;
mod modifiers;
mod prefix;
mod qualified;
mod vocabulary;

pub use annotations::{annotations_before, annotations_for};
pub use artifacts::is_macro_artifact;
pub use bases::{parse_base_clause, type_kind_from_text};
pub use declared_type::{append_sigils, declared_type_from_text, parent_prefix, parent_tail};
pub use macros::extract_balanced_call;
pub use mask::mask_export_macros;
pub use modifiers::{has_word, text_modifiers};
pub use prefix::clean_type_prefix;
pub use qualified::{owner_from_qualified_text, owner_segment, split_qualified};
pub use vocabulary::Vocabulary;
