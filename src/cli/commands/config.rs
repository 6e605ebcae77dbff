use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::BenchConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show,
    /// Validate configuration
    Validate,
}

pub fn execute(args: ConfigArgs, config: &BenchConfig, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommand::Validate => {
            config.validate()?;
            output.success("Configuration is valid");
        }
    }
    Ok(())
}
