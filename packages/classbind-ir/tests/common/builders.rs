//! Test data builders
//!
//! Builder for class-record documents, serialized through the real schema.

use classbind_ir::features::document_loading::{
    ClassRecord, FieldRecord, MethodRecord, ParamRecord,
};

/// Builder for one class record
#[derive(Debug, Clone)]
pub struct ClassRecordBuilder {
    record: ClassRecord,
}

impl ClassRecordBuilder {
    /// Create a top-level class record
    pub fn new(name: &str, package: &str) -> Self {
        Self {
            record: ClassRecord {
                name: name.to_string(),
                full_name: name.to_string(),
                package: package.to_string(),
                is_interface: false,
                superclass: None,
                modifiers: vec!["public".to_string()],
                methods: Vec::new(),
                fields: Vec::new(),
                nested_classes: Vec::new(),
            },
        }
    }

    /// Override the full (possibly `$`-qualified) name
    pub fn full_name(mut self, full_name: &str) -> Self {
        self.record.full_name = full_name.to_string();
        self
    }

    pub fn superclass(mut self, superclass: &str) -> Self {
        self.record.superclass = Some(superclass.to_string());
        self
    }

    pub fn interface(mut self) -> Self {
        self.record.is_interface = true;
        self
    }

    /// Add a method; `params` are `(type, name)` pairs
    pub fn method(
        mut self,
        name: &str,
        return_type: &str,
        modifiers: &[&str],
        params: &[(&str, &str)],
    ) -> Self {
        self.record.methods.push(MethodRecord {
            name: name.to_string(),
            return_type: return_type.to_string(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
            parameters: params
                .iter()
                .map(|(type_name, name)| ParamRecord {
                    type_name: type_name.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        });
        self
    }

    pub fn field(mut self, name: &str, field_type: &str, modifiers: &[&str]) -> Self {
        self.record.fields.push(FieldRecord {
            name: name.to_string(),
            field_type: field_type.to_string(),
            modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        });
        self
    }

    pub fn nested(mut self, nested: ClassRecordBuilder) -> Self {
        self.record.nested_classes.push(nested.build());
        self
    }

    pub fn build(self) -> ClassRecord {
        self.record
    }
}

/// Serialize records as a document
pub fn document_json(records: &[ClassRecord]) -> String {
    serde_json::to_string_pretty(records).expect("serialize document")
}
