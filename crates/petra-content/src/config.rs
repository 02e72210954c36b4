// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content-source configuration from environment variables.
//!
//! Recognized variables:
//! - `CONTENT_API_URL` - base URL of the content source
//! - `CONTENT_API_TOKEN` - bearer credential for the content source
//! - `SITE_URL` - public base URL for absolute links and the sitemap
//!
//! Missing values never abort startup. The site must keep rendering from
//! fallback dictionaries in degraded environments, so configuration gaps
//! are collected into [`ConfigDiagnostics`] and logged exactly once by the
//! binary instead of failing fast.

const DEFAULT_API_URL: &str = "http://localhost:1337";
const DEFAULT_SITE_URL: &str = "https://petra-foam.com";

/// Resolved content-source configuration.
#[derive(Debug, Clone)]
pub struct ContentConfig {
	/// Base URL of the content source, no trailing slash.
	pub api_url: String,
	/// Bearer credential; `None` means calls go out unauthenticated.
	pub api_token: Option<String>,
	/// Public base URL of the site itself.
	pub site_url: String,
}

/// Startup warnings produced while resolving configuration.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
	warnings: Vec<String>,
}

impl ConfigDiagnostics {
	fn warn(&mut self, message: impl Into<String>) {
		self.warnings.push(message.into());
	}

	/// The collected warnings, in resolution order.
	pub fn warnings(&self) -> &[String] {
		&self.warnings
	}

	/// Emit every warning through `tracing`. Called once at startup.
	pub fn log(&self) {
		for warning in &self.warnings {
			tracing::warn!("{warning}");
		}
	}
}

impl ContentConfig {
	/// Resolve configuration from the process environment.
	pub fn from_env() -> (Self, ConfigDiagnostics) {
		let mut diagnostics = ConfigDiagnostics::default();

		let api_url = match env_var("CONTENT_API_URL") {
			Some(url) => url.trim_end_matches('/').to_string(),
			None => {
				diagnostics.warn(format!(
					"CONTENT_API_URL is not set, using {DEFAULT_API_URL}"
				));
				DEFAULT_API_URL.to_string()
			}
		};

		let api_token = env_var("CONTENT_API_TOKEN");
		if api_token.is_none() {
			diagnostics.warn(
				"CONTENT_API_TOKEN is not set, content source calls will be unauthenticated",
			);
		}

		let site_url = match env_var("SITE_URL") {
			Some(url) => url.trim_end_matches('/').to_string(),
			None => DEFAULT_SITE_URL.to_string(),
		};

		(
			Self {
				api_url,
				api_token,
				site_url,
			},
			diagnostics,
		)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}
