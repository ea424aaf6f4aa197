//! # Batch SET Service
//!
//! Entry point used by the CLI. Builds the SNMPv2c adapter and the CSV log
//! from the [`Config`] and hands them to a [`BatchRunner`].

use snmpush_common::config::Config;
use snmpush_common::network::target::Target;
use snmpush_protocols::SnmpV2cSetter;
use tracing::debug;

use crate::input::SpecFiles;
use crate::log::CsvResultLog;
use crate::runner::{BatchRunner, BatchSummary, ProgressCallback};

/// Applies every spec triple to every target and writes the result log.
///
/// The log is created before the first request, so it exists (header only)
/// even when every combination is skipped.
pub async fn perform_batch(
    targets: &[Target],
    specs: &[SpecFiles],
    cfg: &Config,
    on_progress: Option<ProgressCallback>,
) -> anyhow::Result<BatchSummary> {
    let log = CsvResultLog::create(&cfg.output)?;
    let setter = SnmpV2cSetter::new(&cfg.community, cfg.port, cfg.timeout);
    debug!(
        port = cfg.port,
        timeout = ?cfg.timeout,
        output = %cfg.output.display(),
        "starting batch"
    );

    let mut runner = BatchRunner::new(setter, log);
    if let Some(on_progress) = on_progress {
        runner = runner.with_progress(on_progress);
    }

    runner.run(targets, specs).await
}
