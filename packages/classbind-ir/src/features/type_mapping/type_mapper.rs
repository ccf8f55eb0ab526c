//! Java type expression → jnim type expression
//!
//! `map_type` is pure and total: anything it does not recognise passes
//! through unchanged, since there is no symbol table to consult.

use super::builtin_types::get_builtin_type;
use crate::shared::models::{NAMESPACE_SEPARATOR, NESTING_SEPARATOR};

const ARRAY_SUFFIX: &str = "[]";

/// Generic levels mapped before the remainder passes through verbatim
pub const MAX_GENERIC_DEPTH: usize = 64;

/// Map a raw Java type string to its binding-layer spelling
///
/// - `int` → `jint`, `void` → `` (no return type)
/// - `int[][]` → `seq[seq[jint]]`
/// - `Map<String, List<Integer>>` → `Map[string, List[Integer]]`
/// - `a.b.Outer$Inner` → `a.b.Outer.Inner`
pub fn map_type(raw: &str) -> String {
    map_at_level(raw, 0)
}

fn map_at_level(raw: &str, level: usize) -> String {
    let (element, dims) = strip_dimensions(raw);

    let mapped = match split_generic(element) {
        Some((base, args)) if level < MAX_GENERIC_DEPTH => {
            let args: Vec<String> = args
                .into_iter()
                .map(|arg| map_at_level(arg, level + 1))
                .collect();
            format!("{}[{}]", map_simple(base), args.join(", "))
        }
        _ => map_simple(element),
    };

    if dims == 0 {
        return mapped;
    }
    let mut out = String::with_capacity(mapped.len() + dims * 5);
    for _ in 0..dims {
        out.push_str("seq[");
    }
    out.push_str(&mapped);
    for _ in 0..dims {
        out.push(']');
    }
    out
}

/// `int[][]` → `("int", 2)`
fn strip_dimensions(raw: &str) -> (&str, usize) {
    let mut ty = raw.trim();
    let mut dims = 0;
    while let Some(element) = ty.strip_suffix(ARRAY_SUFFIX) {
        ty = element.trim_end();
        dims += 1;
    }
    (ty, dims)
}

/// Non-generic, non-array lookup
fn map_simple(ty: &str) -> String {
    if let Some(mapped) = get_builtin_type(ty) {
        return mapped.to_string();
    }

    if ty.contains(NESTING_SEPARATOR) {
        return ty.replace(NESTING_SEPARATOR, &NAMESPACE_SEPARATOR.to_string());
    }

    ty.to_string()
}

/// Split `Base<A, B<C, D>>` into `("Base", ["A", "B<C, D>"])`
///
/// Returns `None` unless the first `<` has something before it and its
/// matching `>` closes the string.
fn split_generic(ty: &str) -> Option<(&str, Vec<&str>)> {
    let open = ty.find('<')?;
    if open == 0 {
        return None;
    }

    let close = matching_close(ty, open)?;
    if close != ty.len() - 1 {
        return None;
    }

    let base = ty[..open].trim_end();
    let inner = &ty[open + 1..close];
    Some((base, split_top_level(inner)))
}

/// Byte index of the `>` closing the `<` at `open`
fn matching_close(ty: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in ty.char_indices().skip_while(|(i, _)| *i < open) {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that are not nested inside `<...>`
fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(inner[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(inner[start..].trim());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(map_type("int"), "jint");
        assert_eq!(map_type("double"), "jdouble");
        assert_eq!(map_type("void"), "");
        assert_eq!(map_type("  long "), "jlong");
    }

    #[test]
    fn test_well_known_types() {
        assert_eq!(map_type("String"), "string");
        assert_eq!(map_type("java.lang.String"), "string");
        assert_eq!(map_type("Object"), "JObject");
        assert_eq!(map_type("java.lang.Object"), "JObject");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(map_type("int[]"), "seq[jint]");
        assert_eq!(map_type("String[][]"), "seq[seq[string]]");
        assert_eq!(map_type("a.b.Outer$Inner[]"), "seq[a.b.Outer.Inner]");
    }

    #[test]
    fn test_generics() {
        assert_eq!(map_type("Map<String, Object>"), "Map[string, JObject]");
        assert_eq!(map_type("List<int[]>"), "List[seq[jint]]");
        assert_eq!(
            map_type("Map<String, List<Integer>>"),
            "Map[string, List[Integer]]"
        );
        assert_eq!(
            map_type("Map<Map<String,Object>,Outer$Inner>"),
            "Map[Map[string, JObject], Outer.Inner]"
        );
    }

    #[test]
    fn test_generic_array() {
        assert_eq!(map_type("List<String>[]"), "seq[List[string]]");
    }

    #[test]
    fn test_nested_separator() {
        assert_eq!(map_type("a.b.Outer$Inner"), "a.b.Outer.Inner");
        assert_eq!(map_type("Outer$Mid$Inner"), "Outer.Mid.Inner");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(map_type("com.foo.Bar"), "com.foo.Bar");
        assert_eq!(map_type("Integer"), "Integer");
        assert_eq!(map_type(""), "");
    }

    #[test]
    fn test_malformed_generics_pass_through() {
        assert_eq!(map_type("<T>"), "<T>");
        assert_eq!(map_type("Map<String"), "Map<String");
        assert_eq!(map_type("List<String>.Entry"), "List<String>.Entry");
    }

    #[test]
    fn test_thousands_of_dimensions() {
        let raw = format!("int{}", "[]".repeat(5000));
        let expected = format!("{}jint{}", "seq[".repeat(5000), "]".repeat(5000));
        assert_eq!(map_type(&raw), expected);
    }

    #[test]
    fn test_generic_depth_capped() {
        let raw = format!("A<{}int{}>", "A<".repeat(9999), ">".repeat(9999));
        let rest = MAX_GENERIC_DEPTH;
        let expected = format!(
            "{}A<{}int{}{}",
            "A[".repeat(rest),
            "A<".repeat(9999 - rest),
            ">".repeat(10000 - rest),
            "]".repeat(rest)
        );
        assert_eq!(map_type(&raw), expected);
    }

    #[test]
    fn test_strip_dimensions() {
        assert_eq!(strip_dimensions("int"), ("int", 0));
        assert_eq!(strip_dimensions(" String [] []"), ("String", 2));
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("A, B<C, D>, E"), vec!["A", "B<C, D>", "E"]);
        assert_eq!(split_top_level("A"), vec!["A"]);
    }
}
