//! Declaration names for (possibly nested) classes

use crate::shared::models::{ClassDef, NAMESPACE_SEPARATOR, NESTING_SEPARATOR};

/// Qualified declaration name plus the short alias derived for nested classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIdentity {
    /// `package.Outer.Inner`
    pub qualified_name: String,
    /// `OuterInner` for nested classes, `None` otherwise
    pub alias: Option<String>,
}

impl ClassIdentity {
    pub fn resolve(cls: &ClassDef) -> Self {
        let (name, alias) = if cls.is_nested_name() {
            (
                cls.full_name
                    .replace(NESTING_SEPARATOR, &NAMESPACE_SEPARATOR.to_string()),
                Some(nested_alias(&cls.full_name)),
            )
        } else {
            (cls.full_name.clone(), None)
        };

        let qualified_name = if cls.package_name.is_empty() {
            name
        } else {
            format!("{}{}{}", cls.package_name, NAMESPACE_SEPARATOR, name)
        };

        Self {
            qualified_name,
            alias,
        }
    }
}

/// Enclosing simple name + nested simple name: `x.Outer$Mid$Inner` → `OuterInner`
fn nested_alias(full_name: &str) -> String {
    let mut parts = full_name.split(NESTING_SEPARATOR);
    let enclosing = parts
        .next()
        .and_then(|first| first.rsplit(NAMESPACE_SEPARATOR).next())
        .unwrap_or_default();
    let nested = full_name
        .rsplit(NESTING_SEPARATOR)
        .next()
        .unwrap_or_default();
    format!("{enclosing}{nested}")
}
