// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management
//!
//! The configuration is backed by a YAML file and validated against an
//! embedded JSON schema before it is deserialized.
//!
//! ## Configuration Structure
//!
//! - `server`: network settings of the web server
//! - `site`: template and static directories, shared document values
//! - `tiktok`: the OAuth2 authorization request sent to TikTok
//!
//! ## Usage
//!
//! ```no_run
//! use ttfn::config::Config;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file("config.yaml").unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(8181),                     // Port
//!     Some("127.0.0.1".to_string()),  // Address
//!     None,                           // Templates directory
//!     None,                           // Static directory
//!     None,                           // TikTok redirect URI
//! );
//!
//! println!("Server port: {}", config.server.port);
//! ```

pub mod server;
pub mod site;
pub mod tiktok;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use site::SiteConfig;
pub use tiktok::{TikTokConfig, CLIENT_KEY_ENV};
pub use utils::{is_valid_ip_address, output_config_schema, validate_specific_rules};

/// Configuration schema embedded in the binary
pub const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Root configuration structure.
///
/// Every section falls back to its defaults when absent from the file, so
/// an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings of the web server.
    #[serde(default)]
    pub server: ServerConfig,

    /// Templates, static assets and shared page values.
    #[serde(default)]
    pub site: SiteConfig,

    /// TikTok OAuth2 authorization request settings.
    #[serde(default)]
    pub tiktok: TikTokConfig,
}

impl Config {
    /// Write a `<name>.sample.yaml` file with default values next to `path`
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let sample_path = path.as_ref().with_extension("sample.yaml");
        debug!("Creating sample configuration file at {:?}", sample_path);

        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file
    ///
    /// A missing file is created with the default configuration. A file
    /// failing validation produces a sample file and an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        Self::from_yaml_str(&contents).or_else(|err| {
            error!("Configuration error in {}: {:#}", path.display(), err);
            Self::create_sample_config(path)?;
            Err(err.context(format!("Invalid configuration file {}", path.display())))
        })
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // An empty document is a YAML null, treat it as an empty mapping
        let yaml_value: serde_yml::Value = if contents.trim().is_empty() {
            serde_yml::Value::Null
        } else {
            serde_yml::from_str(contents).context("Failed to parse YAML configuration")?
        };
        let yaml_value = match yaml_value {
            serde_yml::Value::Null => serde_yml::Value::Mapping(Default::default()),
            value => value,
        };

        let json_value = serde_json::to_value(&yaml_value)
            .context("Failed to convert YAML to JSON for validation")?;

        let schema: serde_json::Value =
            serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;
        let validator = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)?;

        debug!("Validating configuration against schema");
        if let Err(error) = validator.validate(&json_value) {
            anyhow::bail!("Configuration validation failed: {}", error);
        }

        let config: Config = serde_yml::from_value(yaml_value)
            .context("Failed to deserialize configuration")?;

        validate_specific_rules(&config)?;
        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only the values that are provided override the configuration.
    ///
    /// # Parameters
    ///
    /// * `port` - TCP port of the web server
    /// * `address` - Network address the web server binds to
    /// * `templates_dir` - Directory of the page templates
    /// * `static_dir` - Directory served under `/static`
    /// * `redirect_uri` - TikTok "Redirect URI"
    pub fn apply_args(
        &mut self,
        port: Option<u16>,
        address: Option<String>,
        templates_dir: Option<PathBuf>,
        static_dir: Option<PathBuf>,
        redirect_uri: Option<String>,
    ) {
        if let Some(port) = port {
            debug!("Overriding port from command line: {}", port);
            self.server.port = port;
        }

        if let Some(address) = address {
            debug!("Overriding address from command line: {}", address);
            self.server.address = address;
        }

        if let Some(dir) = templates_dir {
            debug!("Overriding templates directory from command line: {:?}", dir);
            self.site.templates_dir = dir;
        }

        if let Some(dir) = static_dir {
            debug!("Overriding static directory from command line: {:?}", dir);
            self.site.static_dir = dir;
        }

        if let Some(uri) = redirect_uri {
            debug!("Overriding TikTok redirect URI from command line: {}", uri);
            self.tiktok.redirect_uri = uri;
        }
    }
}
