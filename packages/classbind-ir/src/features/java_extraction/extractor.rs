//! Java class extractor
//!
//! Walks a tree-sitter-java syntax tree and produces class records in the
//! document schema. Only public classes/interfaces, methods and fields are
//! recorded; nested public types become `nested_classes` (`Outer$Inner`).
//! Interface members are implicitly public.

use std::path::Path;

use tracing::debug;
use tree_sitter::{Node as TSNode, Parser, Tree};

use crate::errors::{ClassbindError, Result, INLINE_DOCUMENT};
use crate::features::document_loading::records::{
    ClassRecord, FieldRecord, MethodRecord, ParamRecord, PUBLIC_MODIFIER, STATIC_MODIFIER,
};
use crate::shared::models::NESTING_SEPARATOR;

const PRIVATE_MODIFIER: &str = "private";
const VARARGS_SUFFIX: &str = "[]";

/// Extract class records from Java source held in memory
pub fn extract_classes(source: &str) -> Result<Vec<ClassRecord>> {
    extract_labeled(source, INLINE_DOCUMENT)
}

/// Extract class records from a `.java` file
pub fn extract_file(path: &Path) -> Result<Vec<ClassRecord>> {
    let source = std::fs::read_to_string(path).map_err(|e| ClassbindError::io(path, e))?;
    extract_labeled(&source, &path.display().to_string())
}

/// Serialize records as a pretty-printed (2-space) JSON document
pub fn to_document_json(records: &[ClassRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn extract_labeled(source: &str, label: &str) -> Result<Vec<ClassRecord>> {
    let tree = parse_java(source, label)?;
    let records = JavaClassExtractor::new(source).extract(&tree);
    debug!(source = label, classes = records.len(), "extracted classes");
    Ok(records)
}

fn parse_java(source: &str, label: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::language())
        .map_err(|e| ClassbindError::extraction(label, format!("Failed to set language: {}", e)))?;

    parser
        .parse(source, None)
        .ok_or_else(|| ClassbindError::extraction(label, "Failed to parse content"))
}

/// Syntax-tree walker for one compilation unit
struct JavaClassExtractor<'a> {
    source: &'a str,
}

impl<'a> JavaClassExtractor<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn extract(&self, tree: &Tree) -> Vec<ClassRecord> {
        let root = tree.root_node();
        let mut cursor = root.walk();
        let top_level: Vec<TSNode> = root.named_children(&mut cursor).collect();

        let package = top_level
            .iter()
            .find(|n| n.kind() == "package_declaration")
            .map(|n| self.package_name(n))
            .unwrap_or_default();

        let mut records = Vec::new();
        for node in top_level.iter().filter(|n| is_type_declaration(n)) {
            let mut hoisted = Vec::new();
            if let Some(record) = self.class_record(node, &package, None, false, &mut hoisted) {
                records.push(record);
            }
            records.append(&mut hoisted);
        }
        records
    }

    fn text(&self, node: &TSNode) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    fn type_text(&self, node: &TSNode) -> String {
        normalize_type(self.text(node))
    }

    fn package_name(&self, node: &TSNode) -> String {
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|c| c.kind() == "scoped_identifier" || c.kind() == "identifier");
        name.map(|n| self.text(&n).to_string()).unwrap_or_default()
    }

    /// Keyword modifiers; annotations are skipped
    fn modifiers(&self, node: &TSNode) -> Vec<String> {
        let mut cursor = node.walk();
        let modifiers = node.children(&mut cursor).find(|c| c.kind() == "modifiers");
        let Some(modifiers) = modifiers else {
            return Vec::new();
        };

        let mut cursor = modifiers.walk();
        let keywords = modifiers
            .children(&mut cursor)
            .filter(|c| !c.is_named())
            .map(|c| self.text(&c).to_string())
            .collect();
        keywords
    }

    /// Record for a public class or interface
    ///
    /// Enums, records and non-public types are never recorded themselves;
    /// public member types found inside them go to `hoisted` and become
    /// top-level records named after the full enclosing chain.
    fn class_record(
        &self,
        node: &TSNode,
        package: &str,
        enclosing: Option<&str>,
        in_interface: bool,
        hoisted: &mut Vec<ClassRecord>,
    ) -> Option<ClassRecord> {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(&n).to_string())
            .unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        let full_name = match enclosing {
            Some(outer) => format!("{}{}{}", outer, NESTING_SEPARATOR, name),
            None => name.clone(),
        };

        let mut modifiers = self.modifiers(node);
        if in_interface {
            add_implicit(&mut modifiers, PUBLIC_MODIFIER);
            add_implicit(&mut modifiers, STATIC_MODIFIER);
        }

        let is_interface = node.kind() == "interface_declaration";
        let recordable = is_interface || node.kind() == "class_declaration";
        if !recordable || !has(&modifiers, PUBLIC_MODIFIER) {
            for member in self.body_members(node) {
                if is_type_declaration(&member) {
                    let found =
                        self.class_record(&member, package, Some(&full_name), is_interface, hoisted);
                    hoisted.extend(found);
                }
            }
            return None;
        }

        let mut record = ClassRecord {
            name,
            full_name,
            package: package.to_string(),
            is_interface,
            superclass: self.super_type(node, is_interface),
            modifiers,
            methods: Vec::new(),
            fields: Vec::new(),
            nested_classes: Vec::new(),
        };

        for member in self.body_members(node) {
            match member.kind() {
                "method_declaration" => {
                    if let Some(method) = self.method_record(&member, is_interface) {
                        record.methods.push(method);
                    }
                }
                "field_declaration" | "constant_declaration" => {
                    record
                        .fields
                        .extend(self.field_records(&member, is_interface));
                }
                _ if is_type_declaration(&member) => {
                    let nested = self.class_record(
                        &member,
                        package,
                        Some(&record.full_name),
                        is_interface,
                        hoisted,
                    );
                    record.nested_classes.extend(nested);
                }
                _ => {}
            }
        }

        debug!(class = %record.full_name, methods = record.methods.len(), "extracted class");
        Some(record)
    }

    /// Member declarations of a type body; enum members follow the constants
    fn body_members<'t>(&self, node: &TSNode<'t>) -> Vec<TSNode<'t>> {
        let Some(body) = node.child_by_field_name("body") else {
            return Vec::new();
        };

        let mut cursor = body.walk();
        let children: Vec<TSNode> = body.named_children(&mut cursor).collect();
        if body.kind() != "enum_body" {
            return children;
        }

        children
            .iter()
            .filter(|c| c.kind() == "enum_body_declarations")
            .flat_map(|decls| {
                let mut cursor = decls.walk();
                decls.named_children(&mut cursor).collect::<Vec<_>>()
            })
            .collect()
    }

    /// `extends` type for classes, first extended interface for interfaces
    fn super_type(&self, node: &TSNode, is_interface: bool) -> Option<String> {
        let type_node = if is_interface {
            let mut cursor = node.walk();
            let extends = node
                .children(&mut cursor)
                .find(|c| c.kind() == "extends_interfaces")?;
            let mut cursor = extends.walk();
            let type_list = extends
                .named_children(&mut cursor)
                .find(|c| c.kind() == "type_list")?;
            type_list.named_child(0)?
        } else {
            node.child_by_field_name("superclass")?.named_child(0)?
        };

        let text = self.type_text(&type_node);
        let name = text.split('<').next().unwrap_or_default().trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    fn method_record(&self, node: &TSNode, in_interface: bool) -> Option<MethodRecord> {
        let mut modifiers = self.modifiers(node);
        if in_interface && !has(&modifiers, PRIVATE_MODIFIER) {
            add_implicit(&mut modifiers, PUBLIC_MODIFIER);
        }
        if !has(&modifiers, PUBLIC_MODIFIER) {
            return None;
        }

        let name = self.text(&node.child_by_field_name("name")?).to_string();
        let mut return_type = node
            .child_by_field_name("type")
            .map(|t| self.type_text(&t))
            .unwrap_or_default();
        if let Some(dims) = node.child_by_field_name("dimensions") {
            return_type.push_str(&self.type_text(&dims));
        }

        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| self.parameters(&params))
            .unwrap_or_default();

        Some(MethodRecord {
            name,
            return_type,
            modifiers,
            parameters,
        })
    }

    fn parameters(&self, params: &TSNode) -> Vec<ParamRecord> {
        let mut cursor = params.walk();
        let children: Vec<TSNode> = params.named_children(&mut cursor).collect();

        children
            .iter()
            .filter_map(|param| match param.kind() {
                "formal_parameter" => self.formal_parameter(param),
                "spread_parameter" => self.spread_parameter(param),
                _ => None,
            })
            .collect()
    }

    /// `String name` or C-style `String name[]`
    fn formal_parameter(&self, param: &TSNode) -> Option<ParamRecord> {
        let mut type_name = self.type_text(&param.child_by_field_name("type")?);
        if let Some(dims) = param.child_by_field_name("dimensions") {
            type_name.push_str(&self.type_text(&dims));
        }
        let name = self.text(&param.child_by_field_name("name")?).to_string();
        Some(ParamRecord { type_name, name })
    }

    /// `String... names` becomes `String[] names`
    fn spread_parameter(&self, param: &TSNode) -> Option<ParamRecord> {
        let mut cursor = param.walk();
        let children: Vec<TSNode> = param.named_children(&mut cursor).collect();

        let type_node = children
            .iter()
            .find(|c| c.kind() != "modifiers" && c.kind() != "variable_declarator")?;

        let name = children
            .iter()
            .find(|c| c.kind() == "variable_declarator")
            .and_then(|d| d.child_by_field_name("name"))
            .or_else(|| param.child_by_field_name("name"))
            .map(|n| self.text(&n).to_string())?;

        Some(ParamRecord {
            type_name: format!("{}{}", self.type_text(type_node), VARARGS_SUFFIX),
            name,
        })
    }

    /// One record per declarator: `public int a, b[];`
    fn field_records(&self, node: &TSNode, in_interface: bool) -> Vec<FieldRecord> {
        let mut modifiers = self.modifiers(node);
        if in_interface {
            add_implicit(&mut modifiers, PUBLIC_MODIFIER);
            add_implicit(&mut modifiers, STATIC_MODIFIER);
        }
        if !has(&modifiers, PUBLIC_MODIFIER) {
            return Vec::new();
        }

        let Some(type_node) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let base_type = self.type_text(&type_node);

        let mut cursor = node.walk();
        let declarators: Vec<TSNode> = node
            .children_by_field_name("declarator", &mut cursor)
            .collect();

        declarators
            .iter()
            .filter_map(|declarator| {
                let name = self.text(&declarator.child_by_field_name("name")?).to_string();
                let mut field_type = base_type.clone();
                if let Some(dims) = declarator.child_by_field_name("dimensions") {
                    field_type.push_str(&self.type_text(&dims));
                }
                Some(FieldRecord {
                    name,
                    field_type,
                    modifiers: modifiers.clone(),
                })
            })
            .collect()
    }
}

fn is_type_declaration(node: &TSNode) -> bool {
    matches!(
        node.kind(),
        "class_declaration" | "interface_declaration" | "enum_declaration" | "record_declaration"
    )
}

/// Collapse whitespace runs and drop it around dimension brackets:
/// `int [ ] []` → `int[][]`, `Map<String,  int>` → `Map<String, int>`
fn normalize_type(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ' ' {
            let before_bracket = matches!(chars.peek(), Some('[') | Some(']'));
            if before_bracket || out.ends_with('[') {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

fn has(modifiers: &[String], wanted: &str) -> bool {
    modifiers.iter().any(|m| m == wanted)
}

fn add_implicit(modifiers: &mut Vec<String>, modifier: &str) {
    if !has(modifiers, modifier) {
        modifiers.push(modifier.to_string());
    }
}
