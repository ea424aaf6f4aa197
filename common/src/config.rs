use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TARGETS_FILE: &str = "target_ips.txt";
pub const DEFAULT_LOG_FILE: &str = "snmp_set_results.csv";
pub const DEFAULT_COMMUNITY: &str = "public";
pub const DEFAULT_AGENT_PORT: u16 = 161;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

pub struct Config {
    /// Community string sent with every request.
    ///
    /// SNMPv2c sends it in clear text.
    pub community: String,
    /// UDP port of the agents, the same for every target.
    pub port: u16,
    /// How long one SET waits for its response. There are no retries.
    pub timeout: Duration,
    /// Where the CSV result log is written. Truncated at start.
    pub output: PathBuf,
    /// Wait for a key press before the process exits.
    pub pause: bool,
    /// 0 prints everything, 1 drops headers and info lines, 2 keeps errors only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            community: DEFAULT_COMMUNITY.to_string(),
            port: DEFAULT_AGENT_PORT,
            timeout: DEFAULT_TIMEOUT,
            output: PathBuf::from(DEFAULT_LOG_FILE),
            pause: true,
            quiet: 0,
        }
    }
}
