pub mod index;
pub mod schema;
