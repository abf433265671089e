//! `serverlessui deploy`

use anyhow::Result;
use serverlessui::application::DeployOptions;
use serverlessui::domain::value_objects::DomainConfig;
use serverlessui::presentation::terminal::{color_enabled, detect_capabilities};
use serverlessui::presentation::{
    create_deploy_use_case, create_event_sink, Cli, DeployArgs, DeployResultRenderer,
    JsonRenderer, TextRenderer,
};

use super::load_config;

pub fn cmd_deploy(args: &DeployArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;
    let options = apply_cli_overrides(DeployOptions::from_config(&loaded.config), args);
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| loaded.config.provision.out_dir.clone());

    let caps = detect_capabilities();
    let use_case = create_deploy_use_case(out_dir);
    let sink = create_event_sink(cli.json, cli.verbose, caps.supports_unicode);
    let result = use_case.execute_with_events(&options, sink)?;

    let rendered = if cli.json {
        JsonRenderer.render(&result)
    } else {
        TextRenderer {
            color: color_enabled(cli.color, &caps),
            unicode: caps.supports_unicode,
            verbose: cli.verbose,
        }
        .render(&result)
    };
    println!("{}", rendered);
    Ok(())
}

/// Flags override config and environment; domain flags replace the whole triple
fn apply_cli_overrides(mut options: DeployOptions, args: &DeployArgs) -> DeployOptions {
    let cli_domain = DomainConfig {
        domain_name: args.domain.clone(),
        hosted_zone_id: args.hosted_zone_id.clone(),
        certificate_arn: args.certificate_arn.clone(),
    };
    if !cli_domain.is_empty() {
        options.domain = Some(cli_domain);
    }

    if let Some(functions) = &args.functions {
        options.functions_dir = functions.clone();
    }
    if let Some(dir) = &args.dir {
        options.ui_entry = dir.clone();
    }

    options.production |= args.prod;
    options.next_app |= args.next_app;
    options.private_s3 |= args.private_s3;
    options.dry_run |= args.dry_run;
    options
}
