//! Markdown dead-code report: classes with unused imports and unused methods.

use std::fmt::Write;

use crate::core::AggregateState;

pub struct DeadCodeHeader<'a> {
    pub project_name: &'a str,
    /// Free-form label identifying the analysis run (branch, release, ticket).
    pub tag: &'a str,
}

pub fn render_dead_code(state: &AggregateState, header: &DeadCodeHeader<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Code Analysis Report");
    let _ = writeln!(out, "## Project: {}", header.project_name);
    let _ = writeln!(out, "## Tag: {}", header.tag);

    let _ = writeln!(out, "\n## Classes with unused imports");
    if state.unused_imports.is_empty() {
        let _ = writeln!(out, "  None found.");
    }
    for finding in &state.unused_imports {
        let _ = writeln!(out, "  - {}", finding.class_name);
    }

    let _ = writeln!(out, "\n## Classes with unused methods");
    if state.unused_methods.is_empty() {
        let _ = writeln!(out, "  None found.");
    }
    for finding in &state.unused_methods {
        let _ = writeln!(out, "  - {}", finding.class_name);
        for method in &finding.names {
            let _ = writeln!(out, "    -- {}", method);
        }
        let _ = writeln!(out);
    }

    out
}
