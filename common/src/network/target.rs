//! # SET Target Model
//!
//! A target is one managed device, read as a single line of the targets file.
//!
//! The address is kept as written. It can be:
//! * An IPv4 address (e.g., `192.0.2.1`).
//! * An IPv6 address (e.g., `2001:db8::1`).
//! * A hostname, resolved by the SNMP client when the request is sent.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Represents a single device that receives SET requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    address: String,
}

impl Target {
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Builds the `host:port` string handed to the SNMP client.
    ///
    /// IP literals go through [`SocketAddr`] so IPv6 addresses get their brackets.
    pub fn agent_addr(&self, port: u16) -> String {
        match self.address.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, port).to_string(),
            Err(_) => format!("{}:{}", self.address, port),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    /// Parses one line of the targets file.
    ///
    /// Surrounding whitespace is dropped and only empty input is rejected. Anything
    /// else is kept as written; an address the client cannot use fails its own rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = s.trim();

        if address.is_empty() {
            return Err("empty target".to_string());
        }

        Ok(Target {
            address: address.to_string(),
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Parses the content of a targets file, one address per line.
///
/// Blank lines are skipped. File order is kept and duplicates are not removed.
pub fn parse_target_list(content: &str) -> Vec<Target> {
    content
        .lines()
        .filter_map(|line| Target::from_str(line).ok())
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
