// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server configuration from environment variables.
//!
//! Convention: `PETRA_SERVER_<FIELD>`. Content-source configuration
//! (`CONTENT_API_URL`, `CONTENT_API_TOKEN`, `SITE_URL`) is owned by
//! `petra-content`; this module only covers the listener itself.

use thiserror::Error;

/// Errors produced while resolving server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Locale used when a request carries none.
	pub default_locale: String,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 3000,
			default_locale: "en".to_string(),
		}
	}
}

impl ServerConfig {
	/// Load configuration from the environment, falling back to defaults
	/// for unset values.
	pub fn from_env() -> Result<Self, ConfigError> {
		let defaults = Self::default();

		let host = env_var("PETRA_SERVER_HOST").unwrap_or(defaults.host);
		let port = match env_var("PETRA_SERVER_PORT") {
			Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
				key: "PETRA_SERVER_PORT".to_string(),
				message: format!("invalid port '{v}'"),
			})?,
			None => defaults.port,
		};
		let default_locale =
			env_var("PETRA_SERVER_DEFAULT_LOCALE").unwrap_or(defaults.default_locale);

		Ok(Self {
			host,
			port,
			default_locale,
		})
	}

	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}
