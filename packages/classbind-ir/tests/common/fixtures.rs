//! Test fixture generators
//!
//! Class-record documents and Java sources used across integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// The canonical one-class document
pub fn fixture_foo_document() -> String {
    r#"[
  {
    "name": "Foo",
    "package": "p",
    "full_name": "Foo",
    "is_interface": false,
    "methods": [
      {
        "name": "bar",
        "return_type": "int",
        "modifiers": ["public"],
        "parameters": [{"type": "String", "name": "s"}]
      }
    ]
  }
]"#
    .to_string()
}

/// A document whose single class has N public no-arg methods
pub fn fixture_n_methods(class_name: &str, n: usize) -> String {
    let methods: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"name": "method{i}", "return_type": "void", "modifiers": ["public"]}}"#
            )
        })
        .collect();

    format!(
        r#"[{{"name": "{class_name}", "package": "demo", "full_name": "{class_name}", "is_interface": false, "methods": [{}]}}]"#,
        methods.join(", ")
    )
}

/// Valid JSON, but a method lacks `return_type`
pub fn fixture_malformed_document() -> String {
    r#"[{"name": "Bad", "package": "p", "full_name": "Bad", "is_interface": false,
        "methods": [{"name": "oops", "modifiers": ["public"]}]}]"#
        .to_string()
}

/// Java source with nested public types and an interface
pub fn fixture_java_widget() -> String {
    r#"package ui.kit;

import java.util.List;
import java.util.Map;

public class Widget extends java.lang.Object {
    public static final String KIND = "widget";
    public int width;
    private int secret;

    public Widget(int width) { this.width = width; }

    public Map<String, List<Widget>> index() { return null; }
    public static Widget create(String... names) { return null; }
    public void resize(int w, int h) {}
    void packagePrivate() {}

    public static class Style {
        public long color() { return 0L; }
    }

    public interface Listener {
        void onClick(Widget source);
    }
}
"#
    .to_string()
}

/// Write `content` to `root/relative`, creating parent directories
pub fn write_fixture(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, content).expect("write fixture");
    path
}
