//! Custom assertions for test verification
//!
//! Line-oriented checks over emitted binding text.

/// Assert that the text contains `line` as a whole line
pub fn assert_has_line(text: &str, line: &str) {
    assert!(
        text.lines().any(|l| l == line),
        "Expected line {line:?}, got:\n{text}"
    );
}

/// Assert that no line of the text contains `fragment`
pub fn assert_no_line_containing(text: &str, fragment: &str) {
    assert!(
        !text.lines().any(|l| l.contains(fragment)),
        "Unexpected {fragment:?} in:\n{text}"
    );
}

/// Assert the number of `jclass` declarations
pub fn assert_class_count(text: &str, expected: usize) {
    let actual = text.lines().filter(|l| l.starts_with("jclass ")).count();
    assert_eq!(
        actual, expected,
        "Expected {expected} class declarations, got {actual}:\n{text}"
    );
}

/// Assert the import header appears exactly once, before any declaration
pub fn assert_single_import_header(text: &str) {
    let imports: Vec<usize> = text
        .lines()
        .enumerate()
        .filter(|(_, l)| l.starts_with("import "))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(imports.len(), 1, "Expected one import header:\n{text}");

    let first_class = text
        .lines()
        .position(|l| l.starts_with("jclass "))
        .unwrap_or(usize::MAX);
    assert!(
        imports[0] < first_class,
        "Import header must precede declarations:\n{text}"
    );
}
