// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent and default headers.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Default request timeout for all outbound calls.
///
/// The content source is queried once per page section per render; a slow
/// upstream should degrade that render to fallback copy, not hang it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates a new HTTP client with the standard site User-Agent header.
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Creates a new HTTP client builder with the standard User-Agent header,
/// JSON content type, and default timeout.
///
/// # Example
/// ```ignore
/// let client = petra_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	let mut headers = HeaderMap::new();
	headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

	Client::builder()
		.user_agent(user_agent())
		.default_headers(headers)
		.timeout(DEFAULT_TIMEOUT)
}

/// Creates a client builder that additionally carries the content-source
/// bearer credential on every request.
///
/// A `None` token yields a plain [`builder`]: calls are still attempted
/// unauthenticated so that a misconfigured environment degrades instead of
/// failing outright. The caller is expected to have surfaced the missing
/// credential through its startup diagnostics.
pub fn authorized_builder(token: Option<&str>) -> ClientBuilder {
	let Some(token) = token else {
		return builder();
	};

	match HeaderValue::from_str(&format!("Bearer {token}")) {
		Ok(mut value) => {
			value.set_sensitive(true);
			let mut headers = HeaderMap::new();
			headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
			headers.insert(AUTHORIZATION, value);

			Client::builder()
				.user_agent(user_agent())
				.default_headers(headers)
				.timeout(DEFAULT_TIMEOUT)
		}
		Err(_) => {
			tracing::warn!("content API token contains invalid header characters, sending unauthenticated");
			builder()
		}
	}
}

/// Returns the standard site User-Agent string.
///
/// Format: `petra-site/{version}`
pub fn user_agent() -> String {
	format!("petra-site/{}", env!("CARGO_PKG_VERSION"))
}
