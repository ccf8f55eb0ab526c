//! Type mapping: Java type strings → jnim type expressions

pub mod builtin_types;
pub mod type_mapper;

pub use builtin_types::{get_builtin_type, is_object_type, BASE_OBJECT_TYPE, BUILTIN_TYPES};
pub use type_mapper::map_type;
