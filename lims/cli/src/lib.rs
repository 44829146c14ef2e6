pub mod cli;
pub mod table;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

const ENV_LIMS_LOGLEVEL: &str = "LIMS_LOGLEVEL";

/// Main entry point for the CLI, shared by the binary and tests
pub fn cli_main(args: Vec<String>) -> Result<()> {
    let _ = env_logger::try_init_from_env(Env::new().filter(ENV_LIMS_LOGLEVEL));

    let cli = cli::Cli::parse_from(args);
    let output = cli.run()?;
    print!("{output}");
    Ok(())
}
