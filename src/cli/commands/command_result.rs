use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{DescriptorStatus, SkippedFile};

#[derive(Debug)]
pub enum CommandSummary {
    Inventory(ReportSummary),
    DeadCode(ReportSummary),
    Init(InitSummary),
}

/// Outcome of a report-writing command.
#[derive(Debug)]
pub struct ReportSummary {
    pub report_path: PathBuf,
    /// Number of source files that were read and analyzed.
    pub files_analyzed: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub inaccessible_paths: usize,
    pub descriptor: DescriptorStatus,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    /// Set when the config file already existed.
    pub error: Option<String>,
}

/// Result of running sprout commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(InitSummary { error: Some(_), .. }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
