//! Sprout - heuristic inventory of Java/Spring projects
//!
//! Sprout scans a project's `.java` sources with line-oriented patterns and
//! reads its `pom.xml`, then writes a plain-text module inventory
//! (dependencies, components, endpoints, tables) or a markdown dead-code
//! report (unused imports and methods).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, aggregation and the analysis pipeline
//! - `render`: Report documents

pub mod cli;
pub mod config;
pub mod core;
pub mod render;
