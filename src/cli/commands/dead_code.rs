use anyhow::Result;

use super::{
    CommandResult, CommandSummary,
    helper::{load_project, report_path, summarize},
};
use crate::{
    cli::args::DeadCodeCommand,
    core::{AnalysisOptions, PatternExtractor, analyze_project},
    render::{DeadCodeHeader, render_dead_code, write_report},
};

pub fn dead_code(cmd: DeadCodeCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let project = load_project(args)?;
    let config = &project.config;
    let report_path = report_path(args, &project.root, &config.dead_code_report_file);

    // Dependencies play no part in dead-code detection.
    let options = AnalysisOptions {
        ignores: config.ignores.clone(),
        ignore_test_files: config.ignore_test_files,
        build_descriptor: None,
        verbose: args.verbose,
    };
    let analysis = analyze_project(&project.root, &options, &PatternExtractor);

    let report = render_dead_code(
        &analysis.state,
        &DeadCodeHeader {
            project_name: &project.name,
            tag: &cmd.tag,
        },
    );
    write_report(&report_path, &report)?;

    Ok(CommandResult {
        summary: CommandSummary::DeadCode(summarize(analysis, report_path)),
    })
}
