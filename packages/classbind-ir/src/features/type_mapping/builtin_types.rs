//! Built-in Java → jnim type table
//!
//! Primitives plus the string and object types, in both the unqualified
//! and the `java.lang` spelling.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Binding type used when a class has no meaningful superclass
pub const BASE_OBJECT_TYPE: &str = "JVMObject";

/// Source spellings of the universal base type
pub const OBJECT_TYPE_NAMES: [&str; 2] = ["Object", "java.lang.Object"];

lazy_static! {
    /// Java built-in types registry
    pub static ref BUILTIN_TYPES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::with_capacity(16);

        // Primitives
        m.insert("void", "");
        m.insert("boolean", "jboolean");
        m.insert("byte", "jbyte");
        m.insert("char", "jchar");
        m.insert("short", "jshort");
        m.insert("int", "jint");
        m.insert("long", "jlong");
        m.insert("float", "jfloat");
        m.insert("double", "jdouble");

        // Well-known reference types
        m.insert("String", "string");
        m.insert("java.lang.String", "string");
        m.insert("Object", "JObject");
        m.insert("java.lang.Object", "JObject");

        m
    };
}

/// Look up a built-in type
pub fn get_builtin_type(name: &str) -> Option<&'static str> {
    BUILTIN_TYPES.get(name).copied()
}

/// Whether `name` spells the universal base type
pub fn is_object_type(name: &str) -> bool {
    OBJECT_TYPE_NAMES.contains(&name)
}
