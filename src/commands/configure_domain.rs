//! `serverlessui configure-domain`

use anyhow::Result;
use serverlessui::config::{Config, PROJECT_CONFIG_FILE};
use serverlessui::presentation::output::render_configure_domain;
use serverlessui::presentation::terminal::detect_capabilities;
use serverlessui::presentation::{create_configure_domain_use_case, Cli, ConfigureDomainArgs, OutputFormat};

use super::load_config;

pub fn cmd_configure_domain(args: &ConfigureDomainArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| loaded.config.provision.out_dir.clone());

    let use_case = create_configure_domain_use_case(out_dir);
    let result = use_case.execute(&args.domain)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    println!(
        "{}",
        render_configure_domain(&result, format, detect_capabilities().supports_unicode)
    );

    if args.save {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => std::env::current_dir()?.join(PROJECT_CONFIG_FILE),
        };
        Config::save_domain(&path, &result.domain_config())?;
        if !cli.json {
            println!("\n  Saved [domain] to {}", path.display());
        }
    }
    Ok(())
}
