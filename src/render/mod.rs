//! Report documents built from a finished [`AggregateState`](crate::core::AggregateState).
//!
//! Renderers are pure: they turn the state into text with a fixed section
//! order, and every section prints a fallback line when it has nothing to
//! show. Writing the text to disk is left to [`write_report`].

use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod dead_code;
pub mod inventory;

pub use dead_code::{DeadCodeHeader, render_dead_code};
pub use inventory::{InventoryHeader, render_inventory};

/// Write a rendered report, creating parent directories as needed.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
