// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point of the ttfn web server

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use ttfn::config::{self, Config};
use ttfn::site::Site;
use ttfn::web::{build_rocket, rocket_figment};

/// Web front end of the ttfn TikTok application
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a configuration to validate and exit
    #[arg(long)]
    validate_config: Option<PathBuf>,

    /// Output the configuration schema as JSON and exit
    #[arg(long)]
    show_config_schema: bool,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Web server address
    #[arg(short = 'a', long)]
    address: Option<String>,

    /// TikTok "Redirect URI" sent with the authorization request
    #[arg(long = "tik-tok-rurl", value_name = "URL")]
    tik_tok_rurl: Option<String>,

    /// Directory holding base.hbs, head.hbs and the pages/ bodies
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Disable all logging output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[rocket::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger with appropriate level based on verbose and quiet flags
    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if args.show_config_schema {
        return config::output_config_schema();
    }

    if let Some(validate_path) = args.validate_config {
        if !validate_path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file does not exist: {}",
                validate_path.display()
            ));
        }

        Config::from_file(&validate_path)
            .map_err(|err| anyhow::anyhow!("Configuration validation failed: {:#}", err))?;
        println!("Configuration file is valid: {}", validate_path.display());
        return Ok(());
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config.yaml"));
    let mut config = Config::from_file(&config_path)?;

    config.apply_args(
        args.port,
        args.address.clone(),
        args.templates_dir.clone(),
        args.static_dir.clone(),
        args.tik_tok_rurl.clone(),
    );
    config::validate_specific_rules(&config)?;

    let site = Site::compose(&config.site).with_context(|| {
        format!(
            "Failed to compose the site from {}",
            config.site.templates_dir.display()
        )
    })?;

    info!(
        "Starting web server on {}:{}",
        config.server.address, config.server.port
    );
    let _rocket = build_rocket(rocket_figment(&config), &config, site)
        .launch()
        .await?;

    Ok(())
}
