//! Class-record document schema
//!
//! The on-disk shape shared by the Java extractor (producer) and the
//! document loader (consumer). Unknown keys are ignored on load.

use serde::{Deserialize, Serialize};

use crate::shared::models::{ClassDef, FieldDef, MethodDef, ParamDef};

pub const PUBLIC_MODIFIER: &str = "public";
pub const STATIC_MODIFIER: &str = "static";

/// One class or interface record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub full_name: String,
    pub package: String,
    pub is_interface: bool,

    /// Absent or `null` means no explicit superclass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,

    /// Class-level modifiers; informational only
    #[serde(default)]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodRecord>,

    #[serde(default)]
    pub fields: Vec<FieldRecord>,

    #[serde(default)]
    pub nested_classes: Vec<ClassRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub return_type: String,
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParamRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub modifiers: Vec<String>,
}

fn has_modifier(modifiers: &[String], wanted: &str) -> bool {
    modifiers.iter().any(|m| m == wanted)
}

impl ClassRecord {
    /// Convert into a class model tree rooted at `depth`
    pub fn into_class_def(self, depth: usize) -> ClassDef {
        ClassDef {
            name: self.name,
            package_name: self.package,
            full_name: self.full_name,
            super_class: self.superclass,
            is_interface: self.is_interface,
            methods: self.methods.into_iter().map(MethodDef::from).collect(),
            fields: self.fields.into_iter().map(FieldDef::from).collect(),
            nested_classes: self
                .nested_classes
                .into_iter()
                .map(|nested| nested.into_class_def(depth + 1))
                .collect(),
            depth,
        }
    }
}

impl From<MethodRecord> for MethodDef {
    fn from(record: MethodRecord) -> Self {
        MethodDef {
            is_public: has_modifier(&record.modifiers, PUBLIC_MODIFIER),
            is_static: has_modifier(&record.modifiers, STATIC_MODIFIER),
            name: record.name,
            return_type: record.return_type,
            params: record
                .parameters
                .into_iter()
                .map(|p| ParamDef {
                    type_name: p.type_name,
                    name: p.name,
                })
                .collect(),
        }
    }
}

impl From<FieldRecord> for FieldDef {
    fn from(record: FieldRecord) -> Self {
        FieldDef {
            is_public: has_modifier(&record.modifiers, PUBLIC_MODIFIER),
            is_static: has_modifier(&record.modifiers, STATIC_MODIFIER),
            name: record.name,
            field_type: record.field_type,
        }
    }
}
