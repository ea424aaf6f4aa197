mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, set};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);
    print::banner(commands.no_banner, commands.quiet);

    match commands.command {
        Commands::Set { input, snmp } => {
            let cfg = snmp.into_config(commands.quiet);
            print::header("getting ready for batch set", cfg.quiet);
            set::set(&input, &cfg).await
        }
        Commands::Check { input } => {
            print::header("checking input files", commands.quiet);
            check::check(&input, commands.quiet)
        }
    }
}
