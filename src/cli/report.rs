//! Console output for finished commands.
//!
//! Reports themselves go to files; this module only prints the one-line
//! summary to stdout and any warnings to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ReportSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::DescriptorStatus;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr);
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Inventory(summary) | CommandSummary::DeadCode(summary) => {
            print_warnings_to(summary, verbose, err);
            print_success_to(summary, out);
        }
        CommandSummary::Init(summary) => print_init_to(summary, out, err),
    }
}

fn print_success_to<W: Write>(summary: &ReportSummary, writer: &mut W) {
    let count = summary.files_analyzed;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} source {} - report written to {}",
            count,
            if count == 1 { "file" } else { "files" },
            summary.report_path.display()
        )
        .green()
    );
}

fn warning<W: Write>(writer: &mut W, message: std::fmt::Arguments<'_>) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

fn print_warnings_to<W: Write>(summary: &ReportSummary, verbose: bool, writer: &mut W) {
    match &summary.descriptor {
        DescriptorStatus::NotRequested => {}
        DescriptorStatus::Missing(path) => warning(
            writer,
            format_args!(
                "build descriptor not found at {}, dependencies omitted",
                path.display()
            ),
        ),
        DescriptorStatus::Invalid { path, error } => warning(
            writer,
            format_args!(
                "could not parse build descriptor {}: {}",
                path.display(),
                error
            ),
        ),
        DescriptorStatus::Parsed {
            path,
            incomplete_count,
        } => {
            if verbose && *incomplete_count > 0 {
                warning(
                    writer,
                    format_args!(
                        "{} dependency declaration(s) in {} lack a groupId or artifactId",
                        incomplete_count,
                        path.display()
                    ),
                );
            }
        }
    }

    let skipped = &summary.skipped_files;
    if verbose {
        for file in skipped {
            warning(
                writer,
                format_args!("could not read {}: {}", file.path, file.error),
            );
        }
    } else if !skipped.is_empty() {
        warning(
            writer,
            format_args!(
                "{} file(s) could not be read (use {} for details)",
                skipped.len(),
                "-v".cyan()
            ),
        );
    }

    if summary.inaccessible_paths > 0 {
        warning(
            writer,
            format_args!(
                "{} path(s) could not be accessed during the scan",
                summary.inaccessible_paths
            ),
        );
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", FAILURE_MARK.red(), format!("Error: {}", error).red());
    } else if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
