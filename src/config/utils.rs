// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including validation and schema management.

use anyhow::{Context, Result};
use log::{debug, warn};
use url::Url;

use super::{Config, CONFIG_SCHEMA};

/// Output the embedded JSON schema to the console.
///
/// Called when the `--show-config-schema` flag is provided on the command line.
///
/// # Example
///
/// ```bash
/// ./ttfn --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    let schema: serde_json::Value =
        serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);

    Ok(())
}

/// Check if a string is a valid IP address
///
/// Validates that a string represents a valid IPv4 or IPv6 address,
/// or is one of the special values like "localhost" or "0.0.0.0".
pub fn is_valid_ip_address(addr: &str) -> bool {
    if addr.parse::<std::net::IpAddr>().is_ok() {
        return true;
    }

    // Special cases
    matches!(addr, "localhost" | "::" | "::0" | "0.0.0.0")
}

/// Validates the configuration against additional rules that aren't covered by the JSON schema.
///
/// # Validation Rules
///
/// - **Port Range**: the server port is within 1-65534
/// - **IP Address Format**: only warns, hostnames are accepted by the server
/// - **Directories**: template and static directories are not empty paths
/// - **Redirect URI**: the TikTok redirect URI is an absolute http(s) URL
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    debug!("Performing additional validation checks");

    if config.server.port < 1 || config.server.port > 65534 {
        anyhow::bail!("Invalid port number: {}", config.server.port);
    }

    if !is_valid_ip_address(&config.server.address) {
        warn!(
            "Potentially invalid address format: {}",
            config.server.address
        );
    }

    if config.site.templates_dir.as_os_str().is_empty() {
        anyhow::bail!("site.templates_dir must not be empty");
    }
    if config.site.static_dir.as_os_str().is_empty() {
        anyhow::bail!("site.static_dir must not be empty");
    }

    let redirect = Url::parse(&config.tiktok.redirect_uri)
        .with_context(|| format!("Invalid TikTok redirect URI: {}", config.tiktok.redirect_uri))?;
    if !matches!(redirect.scheme(), "http" | "https") {
        anyhow::bail!(
            "TikTok redirect URI must use http or https: {}",
            config.tiktok.redirect_uri
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip_address() {
        assert!(is_valid_ip_address("127.0.0.1"));
        assert!(is_valid_ip_address("::1"));
        assert!(is_valid_ip_address("localhost"));
        assert!(!is_valid_ip_address("not an address"));
    }

    #[test]
    fn test_default_config_passes_specific_rules() {
        assert!(validate_specific_rules(&Config::default()).is_ok());
    }

    #[test]
    fn test_redirect_uri_must_be_http() {
        let mut config = Config::default();
        config.tiktok.redirect_uri = "ftp://example.com/cb".to_string();
        assert!(validate_specific_rules(&config).is_err());

        config.tiktok.redirect_uri = "not a url".to_string();
        assert!(validate_specific_rules(&config).is_err());
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(validate_specific_rules(&config).is_err());
    }
}
