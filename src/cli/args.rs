//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};

/// ofc-wizard - Answer a few questions and get an init.yml for OpenFaaS Cloud
#[derive(Parser, Debug)]
#[command(name = "ofc-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the install wizard and write init.yml in the current directory
    Generate,

    /// Set the final platform options (audit URL, customers list, version,
    /// network policies, ingress) in an existing init.yml
    Options,
}
