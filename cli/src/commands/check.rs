use colored::*;
use snmpush_common::success;
use snmpush_core::input::{self, PlannedOperation};

use crate::commands::InputArgs;
use crate::mprint;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

/// Loads every input the `set` command would use and prints the plan. Sends nothing.
pub fn check(input_args: &InputArgs, q_level: u8) -> anyhow::Result<()> {
    let targets = input::read_targets(&input_args.targets)?;
    let specs = input_args.spec_files();
    let planned: Vec<PlannedOperation<'_>> = input::plan(&specs);

    print::header("targets", q_level);
    if q_level == 0 {
        for target in &targets {
            print::print_status(target.address());
        }
    }

    print::header("operations", q_level);
    for (idx, operation) in planned.iter().enumerate() {
        if q_level == 0 {
            print::tree_head(idx + 1, &operation.files.oid.display().to_string());
            print::as_tree_one_level(operation_details(operation));
            if idx + 1 != planned.len() {
                mprint!();
            }
        }
    }

    let ready: usize = planned.iter().filter(|op| !skipped(op)).count();
    let requests: usize = planned.iter().filter(|op| op.value.is_ok()).count() * targets.len();
    success!(
        "{} targets, {ready} of {} operations usable, {requests} SET requests would be sent",
        targets.len(),
        planned.len()
    );
    Ok(())
}

/// Operations that produce no result row at all.
fn skipped(operation: &PlannedOperation<'_>) -> bool {
    matches!(&operation.value, Err(e) if e.skips_operation())
}

fn operation_details(operation: &PlannedOperation<'_>) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    if let Some(spec) = &operation.spec {
        details.push(("OID".to_string(), spec.oid.color(colors::VALUE)));
        details.push(("Type".to_string(), spec.value_type.normal()));
    }

    let (value, status): (ColoredString, ColoredString) = match &operation.value {
        Ok(value) => (
            value.to_string().color(colors::VALUE),
            format!("ready ({})", value.value_type()).color(colors::PRIMARY),
        ),
        Err(e) if e.skips_operation() => (
            "-".color(colors::SEPARATOR),
            format!("skipped: {e}").color(colors::ACCENT),
        ),
        Err(e) => (
            operation
                .spec
                .as_ref()
                .map(|spec| spec.value.as_str())
                .unwrap_or("-")
                .color(colors::FAILURE),
            format!("every row fails: {e}").color(colors::FAILURE),
        ),
    };

    details.push(("Value".to_string(), value));
    details.push(("Status".to_string(), status));
    details
}
