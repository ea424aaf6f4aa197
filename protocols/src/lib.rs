//! Protocol adapters for `snmpush`.
//!
//! The SNMP wire format and transport come from the `snmp2` crate. This crate
//! only maps the shared model onto it.

pub mod oid;
pub mod snmp;

pub use snmp::SnmpV2cSetter;
