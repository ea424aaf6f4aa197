//! Shared model for `snmpush`.
//!
//! * [`network`]: targets and how they map onto agent addresses.
//! * [`snmp`]: value types, error status codes and the [`snmp::SnmpSetter`] port.
//! * [`operation`]: operation specs and the result records they produce.
//! * [`config`]: run configuration assembled by the CLI.

pub mod config;
pub mod error;
pub mod network;
pub mod operation;
pub mod snmp;

#[doc(hidden)]
pub use tracing;

/// Logs a completed step. Rendered with the success symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "snmpush::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
