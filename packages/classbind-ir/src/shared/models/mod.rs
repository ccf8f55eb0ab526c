//! Shared models

mod class_def;

pub use class_def::{
    ClassDef, FieldDef, MethodDef, ParamDef, NAMESPACE_SEPARATOR, NESTING_SEPARATOR, VOID_TYPE,
};
