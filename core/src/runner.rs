//! The batch loop: every target against every spec triple, one at a time.
//!
//! Per combination the runner loads the spec files, converts the value, sends
//! one SET through the [`SnmpSetter`] and appends one [`ResultRecord`] to the
//! [`ResultSink`]. Missing files and unknown value types skip the combination
//! without a row. Nothing about a single operation stops the batch; only a
//! failing sink does.

use snmpush_common::error::SpecError;
use snmpush_common::network::target::Target;
use snmpush_common::operation::{Outcome, ResultRecord};
use snmpush_common::snmp::SnmpSetter;
use snmpush_common::{success, warn};

use crate::input::SpecFiles;
use crate::log::ResultSink;

pub type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Combinations that produced a result row.
    pub attempted: usize,
    pub successful: usize,
    pub failed: usize,
    /// Combinations dropped before a row was written.
    pub skipped: usize,
}

pub struct BatchRunner<S, L> {
    setter: S,
    sink: L,
    on_progress: Option<ProgressCallback>,
}

impl<S: SnmpSetter, L: ResultSink> BatchRunner<S, L> {
    pub fn new(setter: S, sink: L) -> Self {
        Self {
            setter,
            sink,
            on_progress: None,
        }
    }

    /// Called after each combination with the number processed so far.
    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub async fn run(
        &mut self,
        targets: &[Target],
        specs: &[SpecFiles],
    ) -> anyhow::Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        let mut processed: usize = 0;

        for target in targets {
            for files in specs {
                match self.apply(target, files).await? {
                    Some(outcome) if outcome.is_success() => {
                        summary.attempted += 1;
                        summary.successful += 1;
                    }
                    Some(_) => {
                        summary.attempted += 1;
                        summary.failed += 1;
                    }
                    None => summary.skipped += 1,
                }

                processed += 1;
                if let Some(on_progress) = &self.on_progress {
                    on_progress(processed);
                }
            }
        }

        Ok(summary)
    }

    /// Runs one combination. `None` means it was skipped.
    async fn apply(&mut self, target: &Target, files: &SpecFiles) -> anyhow::Result<Option<Outcome>> {
        let spec = match files.load() {
            Ok(spec) => spec,
            Err(e) => {
                report_skip(target, files, &e);
                return Ok(None);
            }
        };

        let (value, outcome) = match spec.typed_value() {
            Ok(value) => {
                let result = self.setter.set(target, &spec.oid, &value).await;
                (value.to_string(), Outcome::classify(result))
            }
            Err(e) if e.skips_operation() => {
                report_skip(target, files, &e);
                return Ok(None);
            }
            Err(e) => (spec.value.clone(), Outcome::Indication(e.to_string())),
        };

        let record = ResultRecord {
            target: target.clone(),
            oid: spec.oid,
            value,
            outcome,
        };
        self.sink.append(&record)?;

        let line = format!(
            "SNMP SET operation for {} with OID {} completed. Result: {}",
            record.target, record.oid, record.outcome
        );
        if record.outcome.is_success() {
            success!("{line}");
        } else {
            warn!("{line}");
        }

        Ok(Some(record.outcome))
    }
}

fn report_skip(target: &Target, files: &SpecFiles, err: &SpecError) {
    match err {
        SpecError::MissingFile { .. } | SpecError::Read { .. } => warn!(
            "One of the required files not found for OID file {} ({err}). Skipping {target}...",
            files.oid.display()
        ),
        _ => warn!("{err}. Skipping OID file {} for {target}...", files.oid.display()),
    }
}
