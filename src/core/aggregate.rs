//! Project-wide accumulation of per-file findings.
//!
//! [`AggregateState`] is an explicit value threaded through the run: the
//! pipeline folds every [`FindingSet`] into it with [`AggregateState::merge`]
//! and hands the final state to a renderer. Merging only ever appends.
//!
//! Keyed collections (route groups, entities) are ordered by key so the key
//! space does not depend on file order. Sequences inside a key, and the flat
//! lists, keep encounter order.

use std::collections::BTreeMap;

use crate::core::findings::{
    ColumnFinding, Dependency, FindingSet, Role, RoleFinding, RouteEntry, UnusedFinding, Verb,
};

/// Routes declared under one base path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGroup {
    pub entries: Vec<RouteEntry>,
}

impl RouteGroup {
    pub fn paths(&self, verb: Verb) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.verb == verb)
            .map(|entry| entry.path.as_str())
    }
}

pub type RouteTable = BTreeMap<String, RouteGroup>;

/// Columns per table name.
pub type EntityTable = BTreeMap<String, Vec<ColumnFinding>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    /// In discovery order, duplicates kept.
    pub dependencies: Vec<Dependency>,
    pub roles: Vec<RoleFinding>,
    pub deprecated: Vec<String>,
    pub routes: RouteTable,
    pub entities: EntityTable,
    pub unused_imports: Vec<UnusedFinding>,
    pub unused_methods: Vec<UnusedFinding>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold findings into a fresh state, in iteration order.
    pub fn from_findings<I>(findings: I) -> Self
    where
        I: IntoIterator<Item = FindingSet>,
    {
        findings.into_iter().fold(Self::new(), |mut state, set| {
            state.merge(set);
            state
        })
    }

    pub fn merge(&mut self, findings: FindingSet) {
        let FindingSet {
            dependencies,
            role,
            deprecated,
            base_paths,
            routes,
            entity,
            unused_imports,
            unused_methods,
        } = findings;

        self.dependencies.extend(dependencies);
        self.roles.extend(role);
        self.deprecated.extend(deprecated);

        for base_path in base_paths {
            self.routes.entry(base_path).or_default();
        }
        if let Some(routes) = routes {
            self.routes
                .entry(routes.base_path)
                .or_default()
                .entries
                .extend(routes.entries);
        }

        if let Some(entity) = entity {
            self.entities
                .entry(entity.table)
                .or_default()
                .extend(entity.columns);
        }

        self.unused_imports.extend(unused_imports);
        self.unused_methods.extend(unused_methods);
    }

    pub fn internal_dependencies<'a>(
        &'a self,
        markers: &'a [String],
    ) -> impl Iterator<Item = &'a Dependency> {
        self.dependencies
            .iter()
            .filter(move |dependency| dependency.is_internal(markers))
    }

    pub fn classes_with_role(&self, role: Role) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .filter(move |finding| finding.role == role)
            .map(|finding| finding.class_name.as_str())
    }
}
