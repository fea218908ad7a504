//! File parsers for structured project files.
//!
//! - `pom`: Maven build descriptor parser (uses quick-xml, reads dependency elements)

pub mod pom;
