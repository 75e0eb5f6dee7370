//! Host configuration from the environment.
//!
//! `PORT` picks the listen port (default 3000). `RECIPE_SITE_ROOT` overrides
//! the Leptos site root holding the `pkg/` bundle. Everything else comes from
//! `[package.metadata.leptos]` via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

/// Resolved host settings.
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub port: u16,
    pub leptos_options: LeptosOptions,
}

impl HostConfig {
    /// Load from process env and the Leptos metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is malformed or the Leptos configuration
    /// cannot be read.
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
        let mut leptos_options = conf.leptos_options;
        if let Ok(site_root) = std::env::var("RECIPE_SITE_ROOT") {
            leptos_options.site_root = site_root.into();
        }
        Ok(Self { port, leptos_options })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parse an optional `PORT` value; unset or blank means [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
