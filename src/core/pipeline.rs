//! Whole-project analysis: enumerate, extract, merge.
//!
//! Files are read and extracted in parallel, then merged one at a time in
//! sorted-path order so the resulting state is identical on every run over
//! an unchanged tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::core::{
    aggregate::AggregateState,
    extract::{Extractor, SourceFile},
    findings::FindingSet,
    parsers::pom::parse_pom_file,
    scanner::scan_files,
};

#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    /// Build descriptor to read dependencies from; `None` skips dependencies.
    pub build_descriptor: Option<PathBuf>,
    pub verbose: bool,
}

/// A source file that contributed nothing because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorStatus {
    NotRequested,
    Missing(PathBuf),
    Invalid { path: PathBuf, error: String },
    Parsed { path: PathBuf, incomplete_count: usize },
}

#[derive(Debug)]
pub struct Analysis {
    pub state: AggregateState,
    pub descriptor: DescriptorStatus,
    /// Source files that were read and extracted.
    pub files_analyzed: usize,
    pub skipped_files: Vec<SkippedFile>,
    /// Directory entries walkdir could not access.
    pub inaccessible_paths: usize,
}

pub fn analyze_project<E: Extractor>(
    root: &Path,
    options: &AnalysisOptions,
    extractor: &E,
) -> Analysis {
    let mut state = AggregateState::new();

    let descriptor = match &options.build_descriptor {
        None => DescriptorStatus::NotRequested,
        Some(path) if !path.is_file() => DescriptorStatus::Missing(path.clone()),
        Some(path) => match parse_pom_file(path) {
            Ok(parsed) => {
                state.merge(FindingSet {
                    dependencies: parsed.dependencies,
                    ..Default::default()
                });
                DescriptorStatus::Parsed {
                    path: path.clone(),
                    incomplete_count: parsed.incomplete_count,
                }
            }
            Err(e) => DescriptorStatus::Invalid {
                path: path.clone(),
                error: format!("{:#}", e),
            },
        },
    };

    let scan = scan_files(
        root,
        &options.ignores,
        options.ignore_test_files,
        options.verbose,
    );

    let results: Vec<(String, Result<FindingSet, String>)> = scan
        .files
        .par_iter()
        .map(|path| {
            let result = fs::read_to_string(path)
                .map(|text| extractor.extract(&SourceFile::new(path, &text)))
                .map_err(|e| e.to_string());
            (path.clone(), result)
        })
        .collect();

    let mut files_analyzed = 0;
    let mut skipped_files = Vec::new();
    for (path, result) in results {
        match result {
            Ok(findings) => {
                state.merge(findings);
                files_analyzed += 1;
            }
            Err(error) => skipped_files.push(SkippedFile { path, error }),
        }
    }

    Analysis {
        state,
        descriptor,
        files_analyzed,
        skipped_files,
        inaccessible_paths: scan.skipped_count,
    }
}
