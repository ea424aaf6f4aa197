//! # Input files
//!
//! Targets come from one line-delimited file. Each operation comes from three
//! files holding a single token each: the OID, the value and the value type.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use snmpush_common::error::SpecError;
use snmpush_common::network::target::{self, Target};
use snmpush_common::operation::OperationSpec;
use snmpush_common::snmp::SetValue;

/// Number of numbered spec triples used when none are given.
const DEFAULT_SPEC_COUNT: usize = 2;

/// The three files describing one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFiles {
    pub oid: PathBuf,
    pub value: PathBuf,
    pub value_type: PathBuf,
}

impl SpecFiles {
    pub fn new(oid: impl Into<PathBuf>, value: impl Into<PathBuf>, value_type: impl Into<PathBuf>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
            value_type: value_type.into(),
        }
    }

    /// `oid{n}.txt`, `value{n}.txt`, `value_type{n}.txt`.
    pub fn numbered(n: usize) -> Self {
        Self::new(
            format!("oid{n}.txt"),
            format!("value{n}.txt"),
            format!("value_type{n}.txt"),
        )
    }

    pub fn defaults() -> Vec<Self> {
        (1..=DEFAULT_SPEC_COUNT).map(Self::numbered).collect()
    }

    /// Reads all three files. Fails on the first one that is missing or unreadable.
    pub fn load(&self) -> Result<OperationSpec, SpecError> {
        Ok(OperationSpec {
            oid: read_scalar(&self.oid)?,
            value: read_scalar(&self.value)?,
            value_type: read_scalar(&self.value_type)?,
        })
    }
}

fn read_scalar(path: &Path) -> Result<String, SpecError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SpecError::MissingFile {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SpecError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reads the targets file. Only a file that cannot be read stops the run; odd
/// lines are kept and fail per row.
pub fn read_targets(path: &Path) -> anyhow::Result<Vec<Target>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading targets file {}", path.display()))?;

    Ok(target::parse_target_list(&content))
}

/// A spec triple after loading and value conversion, for dry runs.
pub struct PlannedOperation<'a> {
    pub files: &'a SpecFiles,
    pub spec: Option<OperationSpec>,
    pub value: Result<SetValue, SpecError>,
}

/// Loads and converts every spec triple without sending anything.
pub fn plan(specs: &[SpecFiles]) -> Vec<PlannedOperation<'_>> {
    specs
        .iter()
        .map(|files| match files.load() {
            Ok(spec) => {
                let value = spec.typed_value();
                PlannedOperation {
                    files,
                    spec: Some(spec),
                    value,
                }
            }
            Err(e) => PlannedOperation {
                files,
                spec: None,
                value: Err(e),
            },
        })
        .collect()
}
