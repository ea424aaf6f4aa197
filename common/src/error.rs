use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Reasons an operation spec cannot be turned into a SET request.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "invalid value type '{0}'. Supported types: 'integer', 'ipaddress', 'string'"
    )]
    UnknownValueType(String),

    #[error("invalid {value_type} value '{value}'")]
    InvalidValue { value_type: &'static str, value: String },
}

impl SpecError {
    /// Errors after which the operation is dropped without a result row.
    ///
    /// An unconvertible value still gets a `Failed` row: its files exist and its type is known.
    pub fn skips_operation(&self) -> bool {
        !matches!(self, SpecError::InvalidValue { .. })
    }
}

/// Failures that happen before the agent answers, or instead of an answer.
///
/// The `Display` text is what ends up after `Failed: ` in the result log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    #[error("invalid OID '{0}'")]
    InvalidOid(String),

    #[error("No SNMP response received before timeout")]
    Timeout(Duration),

    #[error("cannot open session to {addr}: {reason}")]
    Session { addr: String, reason: String },

    #[error("{0}")]
    Request(String),
}
