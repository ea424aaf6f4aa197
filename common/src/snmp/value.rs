use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SpecError;

/// The value-type tag read from a value-type file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// SNMP `INTEGER` (Integer32).
    Integer,
    /// SNMP `IpAddress`, four octets.
    IpAddress,
    /// SNMP `OCTET STRING` holding text.
    String,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::IpAddress => "ipaddress",
            ValueType::String => "string",
        }
    }

    /// Converts the raw value text into the typed value sent to the agent.
    pub fn convert(&self, raw: &str) -> Result<SetValue, SpecError> {
        let invalid = || SpecError::InvalidValue {
            value_type: self.name(),
            value: raw.to_string(),
        };

        match self {
            ValueType::Integer => raw.parse::<i32>().map(SetValue::Integer).map_err(|_| invalid()),
            ValueType::IpAddress => raw
                .parse::<Ipv4Addr>()
                .map(SetValue::IpAddress)
                .map_err(|_| invalid()),
            ValueType::String => Ok(SetValue::OctetString(raw.to_string())),
        }
    }
}

impl FromStr for ValueType {
    type Err = SpecError;

    /// Tags are matched case-insensitively, so `IPAddress` and `String` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" => Ok(ValueType::Integer),
            "ipaddress" => Ok(ValueType::IpAddress),
            "string" => Ok(ValueType::String),
            _ => Err(SpecError::UnknownValueType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value ready to be placed in a variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetValue {
    Integer(i32),
    IpAddress(Ipv4Addr),
    OctetString(String),
}

impl SetValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            SetValue::Integer(_) => ValueType::Integer,
            SetValue::IpAddress(_) => ValueType::IpAddress,
            SetValue::OctetString(_) => ValueType::String,
        }
    }
}

impl fmt::Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetValue::Integer(v) => write!(f, "{v}"),
            SetValue::IpAddress(addr) => write!(f, "{addr}"),
            SetValue::OctetString(text) => f.write_str(text),
        }
    }
}
