//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `findings`: Typed facts one source file contributes
//! - `extract`: Pattern-based fact extraction (one file in, one `FindingSet` out)
//! - `parsers`: Structured parsing of the build descriptor
//! - `scanner`: Source file enumeration
//! - `aggregate`: Project-wide accumulation of findings
//! - `pipeline`: Enumerate, extract in parallel, merge in order

pub mod aggregate;
pub mod extract;
pub mod findings;
pub mod parsers;
pub mod pipeline;
pub mod scanner;

pub use aggregate::{AggregateState, EntityTable, RouteGroup, RouteTable};
pub use extract::{Extractor, PatternExtractor, SourceFile, extract};
pub use findings::*;
pub use pipeline::{Analysis, AnalysisOptions, DescriptorStatus, SkippedFile, analyze_project};
