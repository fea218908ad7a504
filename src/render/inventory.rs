//! Plain-text module inventory report.
//!
//! Section order: dependencies, internal dependencies, components by role,
//! deprecated classes, endpoints (per base path, then GET/POST/DELETE/PUT
//! buckets), tables with their columns.

use std::fmt::Write;

use crate::core::{AggregateState, Role, Verb};

pub struct InventoryHeader<'a> {
    pub project_name: &'a str,
    pub internal_markers: &'a [String],
    /// Shown in the trailer line.
    pub report_path: &'a str,
}

pub fn render_inventory(state: &AggregateState, header: &InventoryHeader<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Module inventory: {}", header.project_name);

    write_dependencies(&mut out, state, header.internal_markers);
    write_components(&mut out, state);
    write_deprecated(&mut out, state);
    write_endpoints(&mut out, state);
    write_tables(&mut out, state);

    let _ = writeln!(out, "\nReport generated at: {}", header.report_path);
    out
}

fn write_dependencies(out: &mut String, state: &AggregateState, markers: &[String]) {
    let _ = writeln!(out, "\n- Dependencies:");
    if state.dependencies.is_empty() {
        let _ = writeln!(out, "  No dependencies found.");
    }
    for dependency in &state.dependencies {
        let _ = writeln!(out, "  - {}", dependency);
    }

    let _ = writeln!(out, "\n- Internal dependencies:");
    let mut internal = state.internal_dependencies(markers).peekable();
    if internal.peek().is_none() {
        let _ = writeln!(out, "  No internal dependencies found.");
    }
    for dependency in internal {
        let _ = writeln!(out, "  - {}", dependency);
    }
}

fn role_heading(role: Role) -> &'static str {
    match role {
        Role::Controller => "Controllers",
        Role::Service => "Services",
        Role::Mapper => "Mappers",
    }
}

fn write_components(out: &mut String, state: &AggregateState) {
    let _ = writeln!(out, "\n- Components:");
    if state.roles.is_empty() {
        let _ = writeln!(out, "  No components found.");
        return;
    }
    for role in Role::ALL {
        let mut classes = state.classes_with_role(role).peekable();
        if classes.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "  {}:", role_heading(role));
        for class_name in classes {
            let _ = writeln!(out, "    - {}", class_name);
        }
    }
}

fn write_deprecated(out: &mut String, state: &AggregateState) {
    let _ = writeln!(out, "\n- Deprecated:");
    if state.deprecated.is_empty() {
        let _ = writeln!(out, "  No deprecated items found.");
    }
    for class_name in &state.deprecated {
        let _ = writeln!(out, "  - {}", class_name);
    }
}

fn verb_heading(verb: Verb) -> &'static str {
    match verb {
        Verb::Get => "Gets",
        Verb::Post => "Posts",
        Verb::Delete => "Deletes",
        Verb::Put => "Puts",
    }
}

fn write_endpoints(out: &mut String, state: &AggregateState) {
    let _ = writeln!(out, "\n### Endpoints:");
    if state.routes.is_empty() {
        let _ = writeln!(out, "  No endpoints found.");
        return;
    }
    for (base_path, group) in &state.routes {
        let _ = writeln!(out, "- RequestMapping {}", base_path);
        for verb in Verb::ALL {
            let _ = writeln!(out, "  - {}", verb_heading(verb));
            for path in group.paths(verb) {
                let _ = writeln!(out, "    {} {}", verb.annotation(), path);
            }
            let _ = writeln!(out);
        }
    }
}

fn write_tables(out: &mut String, state: &AggregateState) {
    let _ = writeln!(out, "\n### Tables and columns:");
    if state.entities.is_empty() {
        let _ = writeln!(out, "  No tables found.");
        return;
    }
    for (table, columns) in &state.entities {
        let _ = writeln!(out, "Table: {}", table);
        for column in columns {
            let _ = writeln!(out, "  Column: {} ({})", column.name, column.column_type);
        }
        let _ = writeln!(out);
    }
}
