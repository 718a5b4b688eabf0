//! ofc-wizard: interactive generator for the OpenFaaS Cloud init.yml

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use ofc_wizard::cli::{run_generate, run_options, Cli, Commands};
use ofc_wizard::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let dir = Path::new(".");
    match cli.command {
        Commands::Generate => run_generate(dir),
        Commands::Options => run_options(dir),
    }
}
