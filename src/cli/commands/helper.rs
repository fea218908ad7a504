use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::ReportSummary;
use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::Analysis,
};

/// A project root with its resolved configuration.
pub struct Project {
    pub root: PathBuf,
    pub name: String,
    pub config: Config,
}

pub fn load_project(args: &CommonArgs) -> Result<Project> {
    if !args.path.is_dir() {
        bail!("Project directory not found: {}", args.path.display());
    }
    let canonical = fs::canonicalize(&args.path)
        .with_context(|| format!("Invalid project path: {:?}", args.path))?;

    let config_result = load_config(&canonical)?;
    if args.verbose {
        match &config_result.source {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    Ok(Project {
        root: args.path.clone(),
        name: project_name(&canonical),
        config: config_result.config,
    })
}

/// Name of the project directory, used in report headers.
pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// `--output` when given, otherwise the configured file name under the project root.
pub fn report_path(args: &CommonArgs, root: &Path, file_name: &str) -> PathBuf {
    args.output.clone().unwrap_or_else(|| root.join(file_name))
}

pub fn summarize(analysis: Analysis, report_path: PathBuf) -> ReportSummary {
    ReportSummary {
        report_path,
        files_analyzed: analysis.files_analyzed,
        skipped_files: analysis.skipped_files,
        inaccessible_paths: analysis.inaccessible_paths,
        descriptor: analysis.descriptor,
    }
}
