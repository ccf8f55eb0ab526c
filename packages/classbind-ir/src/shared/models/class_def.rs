//! Class model
//!
//! In-memory tree for one class record. A `ClassDef` exclusively owns its
//! nested classes; trees are built once by the document loader and only
//! read afterwards.

/// Separator between an enclosing class and a nested class in `full_name`
pub const NESTING_SEPARATOR: char = '$';

/// Separator between namespace segments
pub const NAMESPACE_SEPARATOR: char = '.';

/// Raw return type marking "no return value"
pub const VOID_TYPE: &str = "void";

/// One class or interface declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDef {
    /// Simple identifier (no package or nesting qualification)
    pub name: String,
    /// Dotted namespace, empty if none
    pub package_name: String,
    /// Name as seen in the source document (`Outer$Inner` for nested classes)
    pub full_name: String,
    /// Explicit superclass, `None` when absent
    pub super_class: Option<String>,
    pub is_interface: bool,
    /// Declaration order
    pub methods: Vec<MethodDef>,
    /// Declaration order
    pub fields: Vec<FieldDef>,
    pub nested_classes: Vec<ClassDef>,
    /// Nesting depth: 0 for document entries, parent + 1 for nested ones
    pub depth: usize,
}

impl ClassDef {
    pub fn new(
        name: impl Into<String>,
        package_name: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package_name: package_name.into(),
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    pub fn with_super_class(mut self, super_class: impl Into<String>) -> Self {
        self.super_class = Some(super_class.into());
        self
    }

    pub fn with_interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Attach a nested class, fixing up its depth (and its subtree's) below this one
    pub fn with_nested(mut self, mut nested: ClassDef) -> Self {
        nested.assign_depth(self.depth + 1);
        self.nested_classes.push(nested);
        self
    }

    /// Set the depth of this node and recompute the subtree
    pub fn assign_depth(&mut self, depth: usize) {
        self.depth = depth;
        for nested in &mut self.nested_classes {
            nested.assign_depth(depth + 1);
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    pub fn is_nested_name(&self) -> bool {
        self.full_name.contains(NESTING_SEPARATOR)
    }

    /// Superclass if present and non-empty
    pub fn explicit_super_class(&self) -> Option<&str> {
        self.super_class
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn public_methods(&self) -> impl Iterator<Item = &MethodDef> {
        self.methods.iter().filter(|m| m.is_public)
    }

    pub fn public_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_public)
    }

    /// Number of classes in this tree, including self
    pub fn class_count(&self) -> usize {
        1 + self
            .nested_classes
            .iter()
            .map(ClassDef::class_count)
            .sum::<usize>()
    }
}

/// One method declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    /// Raw source type, `"void"` for no return value
    pub return_type: String,
    pub params: Vec<ParamDef>,
    pub is_public: bool,
    pub is_static: bool,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            is_public: true,
            ..Default::default()
        }
    }

    pub fn with_param(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(ParamDef {
            type_name: type_name.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.trim() == VOID_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDef {
    pub type_name: String,
    pub name: String,
}

/// One field declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: String,
    pub is_public: bool,
    pub is_static: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            is_public: true,
            is_static: false,
        }
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}
