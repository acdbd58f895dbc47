// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// Network settings of the web server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The network address the server will bind to.
    ///
    /// Default is "0.0.0.0", every IPv4 interface.
    #[serde(default = "default_address")]
    pub address: String,

    /// The TCP port the server will listen on.
    ///
    /// Valid range is 1-65534. Default value is 8180.
    #[serde(default = "default_port")]
    pub port: u16,

    /// The server name reported in the `Server` header.
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8180
}

fn default_name() -> String {
    format!("ttfn/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            name: default_name(),
        }
    }
}
