use anyhow::Result;
use clap::Parser;

use linebench::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
