//! Fact extraction: one source file in, one [`FindingSet`] out.
//!
//! Recognition is pattern based (no AST, no symbol resolution). Every rule
//! lives in its own submodule and works on the whole file text:
//!
//! - `roles`: class name, component role, deprecation marker
//! - `routes`: class-level base paths and verb routes
//! - `entities`: table name, columns, primary and foreign keys
//! - `dead_code`: unused import and unused method candidates
//!
//! The [`Extractor`] trait is the seam between recognition and aggregation;
//! a real parser can replace [`PatternExtractor`] without touching the
//! aggregator or the renderers.

pub mod dead_code;
pub mod entities;
pub mod roles;
pub mod routes;

use crate::core::findings::FindingSet;

/// A source file handed to an extractor.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    /// Path as enumerated, used for the class-name fallback and test-file detection.
    pub path: &'a str,
    pub text: &'a str,
}

impl<'a> SourceFile<'a> {
    pub fn new(path: &'a str, text: &'a str) -> Self {
        Self { path, text }
    }
}

/// Turns one file into findings.
///
/// Implementations must be pure and must never fail: text that matches
/// nothing yields an empty set.
pub trait Extractor: Sync {
    fn extract(&self, file: &SourceFile<'_>) -> FindingSet;
}

/// The line- and pattern-oriented heuristic extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl Extractor for PatternExtractor {
    fn extract(&self, file: &SourceFile<'_>) -> FindingSet {
        extract(file)
    }
}

pub fn extract(file: &SourceFile<'_>) -> FindingSet {
    let text = file.text;
    let class_name = roles::class_name(text);

    let base_paths = routes::extract_base_paths(text);
    let routes = routes::extract_routes(text, &base_paths);

    FindingSet {
        dependencies: Vec::new(),
        role: class_name.and_then(|name| roles::extract_role(text, name)),
        deprecated: class_name.and_then(|name| roles::extract_deprecation(text, name)),
        base_paths,
        routes,
        entity: entities::extract_entity(text),
        unused_imports: dead_code::extract_unused_imports(file),
        unused_methods: dead_code::extract_unused_methods(file),
    }
}
