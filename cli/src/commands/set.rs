use std::time::{Duration, Instant};

use colored::*;
use snmpush_common::config::Config;
use snmpush_common::{success, warn};
use snmpush_core::{batch, input, runner::BatchSummary};

use crate::commands::InputArgs;
use crate::mprint;
use crate::terminal::{colors, pause, print, progress};

pub async fn set(input_args: &InputArgs, cfg: &Config) -> anyhow::Result<()> {
    let result = run_batch(input_args, cfg).await;

    if cfg.pause {
        pause::wait_for_key()?;
    }

    result
}

async fn run_batch(input_args: &InputArgs, cfg: &Config) -> anyhow::Result<()> {
    let targets = input::read_targets(&input_args.targets)?;
    let specs = input_args.spec_files();

    let unit: &str = if targets.len() == 1 { "target" } else { "targets" };
    success!("{} {unit} loaded from {}", targets.len(), input_args.targets.display());
    if targets.is_empty() {
        warn!("No targets found, the result log will only hold its header");
    }

    print::header("sending set requests", cfg.quiet);

    let total: u64 = (targets.len() * specs.len()) as u64;
    let pb = progress::start(total, cfg.quiet);
    let start_time: Instant = Instant::now();

    let summary = batch::perform_batch(&targets, &specs, cfg, Some(progress::callback(pb.clone()))).await;
    pb.finish_and_clear();
    let summary = summary?;

    print_summary(&summary, start_time.elapsed(), cfg);
    Ok(())
}

fn print_summary(summary: &BatchSummary, total_time: Duration, cfg: &Config) {
    let successful: ColoredString = format!("{} successful", summary.successful).bold().green();
    let failed: ColoredString = format!("{} failed", summary.failed).bold().color(colors::FAILURE);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!(
        "{} {successful}, {failed}, {} skipped in {total_time}",
        "Batch Complete:".color(colors::TEXT_DEFAULT),
        summary.skipped
    );
    let log_line: String = format!(
        "Results written to {}",
        cfg.output.display().to_string().color(colors::VALUE)
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::centerln(&log_line);
        }
        _ => {
            mprint!(&output);
        }
    }
}
