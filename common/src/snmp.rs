//! SNMP vocabulary shared by the runner and the protocol adapter.
//!
//! Nothing in here touches the network. The adapter in `snmpush-protocols`
//! implements [`SnmpSetter`] on top of a real client library.

pub mod setter;
pub mod status;
pub mod value;

pub use setter::{SetResponse, SnmpSetter};
pub use status::ErrorStatus;
pub use value::{SetValue, ValueType};
