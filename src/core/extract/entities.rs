//! Persistence entity recognition: table, columns and key columns.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::findings::{ColumnFinding, EntityFinding, UNKNOWN_TABLE};

pub const ENTITY_MARKER: &str = "@Entity";
pub const ID_MARKER: &str = "@Id";

static TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@Table\s*\(\s*name\s*=\s*"([^"]+)""#).unwrap());

static COLUMN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@Column\s*\(\s*name\s*=\s*"([^"]+)"\s*\)\s*private\s+(\w+)"#).unwrap()
});

static PRIMARY_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@Id\s*\n\s*@Column\s*\(\s*name\s*=\s*"([^"]+)""#).unwrap()
});

static JOIN_COLUMN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@JoinColumn\s*\(\s*name\s*=\s*"([^"]+)""#).unwrap());

/// Entity mapping of the file, or `None` if it is not an entity.
pub fn extract_entity(text: &str) -> Option<EntityFinding> {
    if !text.contains(ENTITY_MARKER) {
        return None;
    }
    Some(EntityFinding {
        table: extract_table_name(text),
        columns: extract_columns(text),
    })
}

pub fn extract_table_name(text: &str) -> String {
    TABLE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_TABLE.to_string(), |m| m.as_str().to_string())
}

/// Regular columns, then the primary key, then every foreign key.
///
/// Key columns are appended even if the same name already appears as a
/// regular column.
pub fn extract_columns(text: &str) -> Vec<ColumnFinding> {
    let mut columns: Vec<ColumnFinding> = COLUMN_REGEX
        .captures_iter(text)
        .filter_map(|caps| Some(ColumnFinding::field(caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect();

    if text.contains(ID_MARKER)
        && let Some(name) = PRIMARY_KEY_REGEX.captures(text).and_then(|caps| caps.get(1))
    {
        columns.push(ColumnFinding::primary_key(name.as_str()));
    }

    columns.extend(
        JOIN_COLUMN_REGEX
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| ColumnFinding::foreign_key(m.as_str())),
    );

    columns
}
