pub mod check;
pub mod set;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use snmpush_common::config::{
    Config, DEFAULT_AGENT_PORT, DEFAULT_COMMUNITY, DEFAULT_LOG_FILE, DEFAULT_TARGETS_FILE,
};
use snmpush_core::input::SpecFiles;

#[derive(Parser)]
#[command(name = "snmpush", version)]
#[command(about = "Batched SNMP SET driven by plain text files.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output: -q hides headers and per-operation lines, -qq keeps errors only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one SET per target and spec triple and log the results to CSV
    #[command(alias = "s")]
    Set {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        snmp: SetArgs,
    },
    /// Load targets and spec files and show what would be sent
    #[command(alias = "c")]
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// File with one target address per line
    #[arg(short, long, default_value = DEFAULT_TARGETS_FILE)]
    pub targets: PathBuf,

    /// OID, value and value-type files of one operation. Repeat for more operations.
    /// Defaults to oid1.txt value1.txt value_type1.txt and oid2.txt value2.txt value_type2.txt
    #[arg(
        short,
        long = "spec",
        num_args = 3,
        value_names = ["OID_FILE", "VALUE_FILE", "TYPE_FILE"],
        action = ArgAction::Append
    )]
    pub spec: Vec<PathBuf>,
}

impl InputArgs {
    pub fn spec_files(&self) -> Vec<SpecFiles> {
        if self.spec.is_empty() {
            return SpecFiles::defaults();
        }

        self.spec
            .chunks_exact(3)
            .map(|triple| SpecFiles::new(&triple[0], &triple[1], &triple[2]))
            .collect()
    }
}

#[derive(Args)]
pub struct SetArgs {
    /// CSV file receiving one row per attempted operation
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    pub output: PathBuf,

    /// Community string (SNMPv2c, sent in clear text)
    #[arg(short, long, default_value = DEFAULT_COMMUNITY)]
    pub community: String,

    /// UDP port of the agents
    #[arg(short, long, default_value_t = DEFAULT_AGENT_PORT)]
    pub port: u16,

    /// Seconds to wait for each response
    #[arg(long, default_value = "6", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_pause: bool,
}

impl SetArgs {
    pub fn into_config(self, quiet: u8) -> Config {
        Config {
            community: self.community,
            port: self.port,
            timeout: self.timeout,
            output: self.output,
            pause: !self.no_pause,
            quiet,
        }
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("invalid timeout '{s}'"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{s}'"));
    }
    Ok(Duration::from_secs_f64(secs))
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
