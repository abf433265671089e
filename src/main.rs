//! ServerlessUI CLI
//!
//! Usage: serverlessui <COMMAND>
//!
//! Commands:
//!   deploy            Compile and provision a preview or production deployment
//!   configure-domain  Bootstrap a hosted zone and wildcard certificate

mod commands;

use anyhow::Result;
use clap::Parser;

use serverlessui::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Deploy(args) => commands::deploy::cmd_deploy(args, &cli),
        Commands::ConfigureDomain(args) => {
            commands::configure_domain::cmd_configure_domain(args, &cli)
        }
    }
}
