//! Typed facts extracted from a single source file.
//!
//! A [`FindingSet`] is everything one file contributes to a run. It is produced
//! by [`extract`](super::extract::extract) and consumed by
//! [`AggregateState::merge`](super::aggregate::AggregateState::merge).

use std::fmt;

/// Placeholder used when a dependency declares no `<version>`.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Placeholder table name for an entity without a table annotation.
pub const UNKNOWN_TABLE: &str = "Unknown";

/// A build dependency declared in the project descriptor.
///
/// A missing version falls back to [`UNKNOWN_VERSION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Dependency {
    pub fn new(group_id: &str, artifact_id: &str, version: Option<&str>) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
        }
    }

    /// Whether the artifact belongs to the organisation's shared libraries.
    ///
    /// Derived on demand from the configured markers, never stored.
    pub fn is_internal(&self, markers: &[String]) -> bool {
        markers
            .iter()
            .any(|marker| self.artifact_id.contains(marker.as_str()))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Controller,
    Service,
    Mapper,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Controller, Role::Service, Role::Mapper];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFinding {
    pub class_name: String,
    pub role: Role,
}

/// HTTP verbs recognised on method-level route annotations.
///
/// Declaration order is the order buckets are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verb {
    Get,
    Post,
    Delete,
    Put,
}

impl Verb {
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Post, Verb::Delete, Verb::Put];

    pub fn from_annotation(annotation: &str) -> Option<Self> {
        match annotation {
            "GetMapping" => Some(Verb::Get),
            "PostMapping" => Some(Verb::Post),
            "PutMapping" => Some(Verb::Put),
            "DeleteMapping" => Some(Verb::Delete),
            _ => None,
        }
    }

    pub fn annotation(&self) -> &'static str {
        match self {
            Verb::Get => "GetMapping",
            Verb::Post => "PostMapping",
            Verb::Put => "PutMapping",
            Verb::Delete => "DeleteMapping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub verb: Verb,
    pub path: String,
}

impl RouteEntry {
    pub fn new(verb: Verb, path: &str) -> Self {
        Self {
            verb,
            path: path.to_string(),
        }
    }
}

/// Routes found in one file, all attributed to a single base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFinding {
    pub base_path: String,
    pub entries: Vec<RouteEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Field(String),
    PrimaryKey,
    ForeignKey,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Field(ty) => write!(f, "{}", ty),
            ColumnType::PrimaryKey => write!(f, "PRIMARY KEY"),
            ColumnType::ForeignKey => write!(f, "FOREIGN KEY"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFinding {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnFinding {
    pub fn field(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: ColumnType::Field(ty.to_string()),
        }
    }

    pub fn primary_key(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: ColumnType::PrimaryKey,
        }
    }

    pub fn foreign_key(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: ColumnType::ForeignKey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFinding {
    pub table: String,
    pub columns: Vec<ColumnFinding>,
}

/// Dead-code candidates for one class. Not guaranteed to be unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedFinding {
    pub class_name: String,
    pub names: Vec<String>,
}

/// All facts one file contributes to a run.
///
/// Every category is optional or possibly empty; a file with nothing
/// recognisable yields `FindingSet::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingSet {
    pub dependencies: Vec<Dependency>,
    pub role: Option<RoleFinding>,
    pub deprecated: Option<String>,
    /// Every class-level base path, in encounter order.
    pub base_paths: Vec<String>,
    pub routes: Option<RouteFinding>,
    pub entity: Option<EntityFinding>,
    pub unused_imports: Option<UnusedFinding>,
    pub unused_methods: Option<UnusedFinding>,
}
