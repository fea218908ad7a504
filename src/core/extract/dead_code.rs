//! Dead-code candidates: unused imports and unused local methods.
//!
//! Both checks are textual. An import is unused when its simple name does not
//! occur anywhere in the file once import statements are removed. A method is
//! unused when no `.name(` call appears in the same file. Cross-file calls,
//! reflection and substring collisions are invisible to these checks.

use std::{collections::HashSet, path::Path, sync::LazyLock};

use regex::Regex;

use super::SourceFile;
use crate::core::findings::UnusedFinding;

static IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import\s+([\w.]+);").unwrap());

static DECLARED_METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|private|protected)\s+\w+\s+(\w+)\(.*\)").unwrap()
});

static CALLED_METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\w+)\(").unwrap());

/// Class name as reported for dead code: the file name without `.java`.
pub fn class_name_from_path(path: &str) -> String {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    file_name
        .strip_suffix(".java")
        .map(str::to_string)
        .unwrap_or(file_name)
}

pub fn is_test_path(path: &str) -> bool {
    path.contains("Test")
}

pub fn find_unused_imports(text: &str) -> Vec<String> {
    let imports: Vec<&str> = IMPORT_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if imports.is_empty() {
        return Vec::new();
    }

    let body = IMPORT_REGEX.replace_all(text, "");
    imports
        .into_iter()
        .filter(|import| {
            let simple_name = import.rsplit('.').next().unwrap_or(import);
            !body.contains(simple_name)
        })
        .map(str::to_string)
        .collect()
}

pub fn declared_methods(text: &str) -> Vec<&str> {
    DECLARED_METHOD_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn called_methods(text: &str) -> HashSet<&str> {
    CALLED_METHOD_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Declared methods never called as `.name(` in the same text, in declaration order.
pub fn find_unused_methods(text: &str) -> Vec<String> {
    let called = called_methods(text);
    declared_methods(text)
        .into_iter()
        .filter(|name| !called.contains(name))
        .map(str::to_string)
        .collect()
}

pub fn extract_unused_imports(file: &SourceFile<'_>) -> Option<UnusedFinding> {
    let names = find_unused_imports(file.text);
    (!names.is_empty()).then(|| UnusedFinding {
        class_name: class_name_from_path(file.path),
        names,
    })
}

/// Unused methods of a non-controller, non-test class.
pub fn extract_unused_methods(file: &SourceFile<'_>) -> Option<UnusedFinding> {
    let class_name = class_name_from_path(file.path);
    if class_name.contains("Controller") || is_test_path(file.path) {
        return None;
    }
    let names = find_unused_methods(file.text);
    (!names.is_empty()).then_some(UnusedFinding { class_name, names })
}
