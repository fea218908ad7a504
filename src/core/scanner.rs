use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Java source files, sorted so every run visits them in the same order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        // Globs match paths relative to the root.
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if glob_patterns
            .iter()
            .any(|p| p.matches(&relative.to_string_lossy()))
        {
            continue;
        }

        if entry.file_type().is_file() && is_java_file(path) {
            files.push(path_str.into());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_java_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("java")
}
