//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ServerlessUI - deploy a static site and its API functions behind one CDN
#[derive(Parser, Debug)]
#[command(name = "serverlessui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON event stream)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile and provision a preview or production deployment
    Deploy(DeployArgs),

    /// Create the hosted zone and wildcard certificate for a custom domain
    ConfigureDomain(ConfigureDomainArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeployArgs {
    /// Custom domain (requires hosted zone id and certificate ARN)
    #[arg(long)]
    pub domain: Option<String>,

    /// Route 53 hosted zone id for the custom domain
    #[arg(long)]
    pub hosted_zone_id: Option<String>,

    /// ACM certificate ARN covering `*.{domain}`
    #[arg(long)]
    pub certificate_arn: Option<String>,

    /// Directory containing API entry files
    #[arg(long, value_name = "DIR")]
    pub functions: Option<PathBuf>,

    /// Directory containing the built UI
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Deploy the stable production stack
    #[arg(long)]
    pub prod: bool,

    /// Serve the UI through a single server-rendered app function
    #[arg(long, conflicts_with = "private_s3")]
    pub next_app: bool,

    /// Keep the asset bucket private to the CDN
    #[arg(long)]
    pub private_s3: bool,

    /// Output directory for synthesized plans
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Compile only; do not provision
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: ./serverlessui.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigureDomainArgs {
    /// Domain to bootstrap, e.g. example.com
    #[arg(long)]
    pub domain: String,

    /// Write the resulting triple to ./serverlessui.toml
    #[arg(long)]
    pub save: bool,

    /// Output directory for synthesized plans
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Config file (default: ./serverlessui.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
