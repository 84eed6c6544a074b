use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mstep_cli::check::{StepReport, check_steps, load_steps};
use mstep_core::{ExecutorOptions, supported_attributes};

use crate::cli::CheckArgs;
use crate::summary::attributes_table;

pub fn run_attributes() -> Result<()> {
    println!("{}", attributes_table(supported_attributes()));
    Ok(())
}

pub fn run_check(args: &CheckArgs, config: Option<&Path>) -> Result<Vec<StepReport>> {
    let span = info_span!("check", steps = %args.steps.display());
    let _guard = span.enter();
    let options = load_options(config)?;
    let steps = load_steps(&args.steps)?;
    let reports = check_steps(&steps, &options);
    let failing = reports.iter().filter(|report| !report.is_ok()).count();
    info!(steps = reports.len(), failing, "check complete");
    Ok(reports)
}

fn load_options(config: Option<&Path>) -> Result<ExecutorOptions> {
    match config {
        Some(path) => ExecutorOptions::load(path)
            .with_context(|| format!("load executor options {}", path.display())),
        None => Ok(ExecutorOptions::default()),
    }
}
