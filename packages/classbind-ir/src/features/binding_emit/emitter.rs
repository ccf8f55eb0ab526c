//! jnim binding emitter
//!
//! Renders a class tree as `jclass` blocks: the class itself, then every
//! nested class depth-first in declaration order.

use std::fmt::Write;

use super::class_identity::ClassIdentity;
use crate::features::type_mapping::{is_object_type, map_type, BASE_OBJECT_TYPE};
use crate::shared::models::{ClassDef, FieldDef, MethodDef};

const INDENT: &str = "  ";

/// Emitter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Modules named in the import header; empty disables the header
    pub import_modules: Vec<String>,
    /// Superclass used when a class has none (or extends `Object`)
    pub base_object_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            import_modules: vec!["jnim".to_string()],
            base_object_type: BASE_OBJECT_TYPE.to_string(),
        }
    }
}

/// Binding emitter
#[derive(Debug, Clone, Default)]
pub struct BindingEmitter {
    options: EmitOptions,
}

impl BindingEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Emit one class tree as if it were a one-class document
    pub fn emit_class(&self, cls: &ClassDef) -> String {
        self.emit_document(std::slice::from_ref(cls))
    }

    /// Emit every top-level record of a document in order
    ///
    /// The import header precedes the first top-level class that has a
    /// package, and appears at most once.
    pub fn emit_document(&self, classes: &[ClassDef]) -> String {
        let header_at = classes
            .iter()
            .position(|cls| cls.is_top_level() && !cls.package_name.is_empty());

        let mut out = String::new();
        for (idx, cls) in classes.iter().enumerate() {
            if header_at == Some(idx) {
                self.write_import_header(&mut out);
            }
            self.write_tree(cls, &mut out);
        }
        out
    }

    fn write_import_header(&self, out: &mut String) {
        if self.options.import_modules.is_empty() {
            return;
        }
        let _ = writeln!(out, "import {}", self.options.import_modules.join(", "));
        out.push('\n');
    }

    fn write_tree(&self, cls: &ClassDef, out: &mut String) {
        self.write_class(cls, out);
        for nested in &cls.nested_classes {
            self.write_tree(nested, out);
        }
    }

    fn write_class(&self, cls: &ClassDef, out: &mut String) {
        let identity = ClassIdentity::resolve(cls);
        let alias = identity
            .alias
            .map(|alias| format!(" as {alias}"))
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "jclass {}*{} of {}:",
            identity.qualified_name,
            alias,
            self.super_class_of(cls)
        );

        for method in cls.public_methods() {
            out.push_str(INDENT);
            out.push_str(&render_method(method));
            out.push('\n');
        }

        for field in cls.public_fields() {
            out.push_str(INDENT);
            out.push_str(&render_field(field));
            out.push('\n');
        }

        out.push('\n');
    }

    /// Superclass verbatim unless absent or the universal base type
    fn super_class_of<'a>(&'a self, cls: &'a ClassDef) -> &'a str {
        match cls.explicit_super_class() {
            Some(sup) if !is_object_type(sup) => sup,
            _ => &self.options.base_object_type,
        }
    }
}

/// `proc name*(a: A, b: B): R {.`static`.}`
pub fn render_method(method: &MethodDef) -> String {
    let params = method
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, map_type(&p.type_name)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut line = format!("proc {}*({})", method.name, params);
    if !method.returns_void() {
        let _ = write!(line, ": {}", map_type(&method.return_type));
    }
    if method.is_static {
        line.push_str(" {.`static`.}");
    }
    line
}

/// `proc name*: T {.prop.}`, with `` `static` `` added for static fields
pub fn render_field(field: &FieldDef) -> String {
    let pragmas = if field.is_static {
        "prop, `static`"
    } else {
        "prop"
    };
    format!(
        "proc {}*: {} {{.{}.}}",
        field.name,
        map_type(&field.field_type),
        pragmas
    )
}

/// Emit with default options
pub fn emit_class(cls: &ClassDef) -> String {
    BindingEmitter::default().emit_class(cls)
}

/// Emit a whole document with default options
pub fn emit_document(classes: &[ClassDef]) -> String {
    BindingEmitter::default().emit_document(classes)
}
