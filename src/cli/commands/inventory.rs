use anyhow::Result;

use super::{
    CommandResult, CommandSummary,
    helper::{load_project, report_path, summarize},
};
use crate::{
    cli::args::InventoryCommand,
    core::{AnalysisOptions, PatternExtractor, analyze_project},
    render::{InventoryHeader, render_inventory, write_report},
};

pub fn inventory(cmd: InventoryCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let project = load_project(args)?;
    let config = &project.config;
    let report_path = report_path(args, &project.root, &config.report_file);

    let options = AnalysisOptions {
        ignores: config.ignores.clone(),
        ignore_test_files: config.ignore_test_files,
        build_descriptor: Some(project.root.join(&config.build_descriptor)),
        verbose: args.verbose,
    };
    let analysis = analyze_project(&project.root, &options, &PatternExtractor);

    let report_location = report_path.display().to_string();
    let report = render_inventory(
        &analysis.state,
        &InventoryHeader {
            project_name: &project.name,
            internal_markers: &config.internal_markers,
            report_path: &report_location,
        },
    );
    write_report(&report_path, &report)?;

    Ok(CommandResult {
        summary: CommandSummary::Inventory(summarize(analysis, report_path)),
    })
}
