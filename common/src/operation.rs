//! # Operations and their results
//!
//! An [`OperationSpec`] is the raw (OID, value, value-type) triple loaded from
//! one set of spec files. Each attempt to apply it to a [`Target`] yields
//! exactly one [`ResultRecord`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{SetError, SpecError};
use crate::network::target::Target;
use crate::snmp::{ErrorStatus, SetResponse, SetValue, ValueType};

/// Raw triple as read from the spec files, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub oid: String,
    pub value: String,
    pub value_type: String,
}

impl OperationSpec {
    pub fn new(oid: impl Into<String>, value: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
            value_type: value_type.into(),
        }
    }

    pub fn parse_type(&self) -> Result<ValueType, SpecError> {
        self.value_type.parse()
    }

    /// Resolves the tag and converts the value in one step.
    pub fn typed_value(&self) -> Result<SetValue, SpecError> {
        self.parse_type()?.convert(&self.value)
    }
}

/// Classified result of one SET attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Successful,
    /// The request never got a usable answer (transport, engine or input failure).
    Indication(String),
    /// The agent answered with a non-zero error status.
    Agent {
        status: ErrorStatus,
        offending_oid: Option<String>,
    },
}

impl Outcome {
    pub fn classify(result: Result<SetResponse, SetError>) -> Self {
        match result {
            Err(e) => Outcome::Indication(e.to_string()),
            Ok(resp) if resp.error_status.is_error() => Outcome::Agent {
                status: resp.error_status,
                offending_oid: resp.offending_oid().map(str::to_string),
            },
            Ok(_) => Outcome::Successful,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Successful)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Successful => f.write_str("Successful"),
            Outcome::Indication(reason) => write!(f, "Failed: {reason}"),
            Outcome::Agent {
                status,
                offending_oid,
            } => write!(
                f,
                "Failed: {status} at {}",
                offending_oid.as_deref().unwrap_or("?")
            ),
        }
    }
}

/// One row of the result log. Written once, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "Target_IP", serialize_with = "as_display")]
    pub target: Target,
    #[serde(rename = "OID")]
    pub oid: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Result", serialize_with = "as_display")]
    pub outcome: Outcome,
}

impl ResultRecord {
    pub const HEADER: [&'static str; 4] = ["Target_IP", "OID", "Value", "Result"];
}

fn as_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
