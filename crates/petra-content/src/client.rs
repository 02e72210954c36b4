// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content source client.
//!
//! One best-effort HTTP call per resource per page render: no retries, no
//! caching. Every failure (network, non-2xx, malformed body) is logged at
//! this boundary and converted into the `None`/empty sentinel the
//! normalizers expect, so a broken content source can never fail a page
//! render.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use petra_common_i18n::Locale;

use crate::config::ContentConfig;
use crate::record::{
	AboutRecord, ContactRecord, Envelope, HomeRecord, ProductRecord, ProjectRecord,
};

/// A named content-source resource with its related-field expansion list.
///
/// The expansion ("populate") lists are configuration, not string
/// concatenation at call sites: adding a related field to a resource is a
/// one-line change here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
	HomePage,
	Products,
	Projects,
	AboutUs,
	ContactInfo,
}

impl Resource {
	/// Request path on the content source.
	pub fn path(self) -> &'static str {
		match self {
			Resource::HomePage => "/api/home-page",
			Resource::Products => "/api/products",
			Resource::Projects => "/api/projects",
			Resource::AboutUs => "/api/about-us-info",
			Resource::ContactInfo => "/api/contact-info",
		}
	}

	/// Related fields to expand in the response.
	pub fn populate(self) -> &'static [&'static str] {
		match self {
			Resource::HomePage => &["header_image"],
			Resource::Products => &["images", "catalogue"],
			Resource::Projects => &["images"],
			Resource::AboutUs => &["image"],
			Resource::ContactInfo => &[],
		}
	}
}

/// Internal failure taxonomy. Never escapes the client: callers only see
/// the sentinel values.
#[derive(Debug, Error)]
enum ContentError {
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("content source returned status {status}")]
	Status { status: u16 },

	#[error("invalid response body: {0}")]
	InvalidResponse(String),
}

/// Client for the headless content source.
#[derive(Debug, Clone)]
pub struct ContentClient {
	http: Client,
	base_url: String,
}

impl ContentClient {
	/// Build a client from resolved configuration. A missing token is
	/// tolerated (the call goes out unauthenticated); the binary surfaces
	/// that condition through startup diagnostics.
	pub fn new(config: &ContentConfig) -> Self {
		let http = petra_common_http::authorized_builder(config.api_token.as_deref())
			.build()
			.expect("failed to build HTTP client");

		Self {
			http,
			base_url: config.api_url.clone(),
		}
	}

	/// Base URL of the content source, no trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Home page record, or `None` on any failure.
	pub async fn home(&self, locale: Locale) -> Option<HomeRecord> {
		self.fetch_one(Resource::HomePage, locale).await
	}

	/// Product records in source order; empty on any failure.
	pub async fn products(&self, locale: Locale) -> Vec<ProductRecord> {
		self.fetch_many(Resource::Products, locale).await
	}

	/// Project records in source order; empty on any failure.
	pub async fn projects(&self, locale: Locale) -> Vec<ProjectRecord> {
		self.fetch_many(Resource::Projects, locale).await
	}

	/// About-us record, or `None` on any failure.
	pub async fn about(&self, locale: Locale) -> Option<AboutRecord> {
		self.fetch_one(Resource::AboutUs, locale).await
	}

	/// Contact-info record, or `None` on any failure.
	pub async fn contact(&self, locale: Locale) -> Option<ContactRecord> {
		self.fetch_one(Resource::ContactInfo, locale).await
	}

	/// Fetch a single-entity resource. All failure paths collapse to
	/// `None`; a successful call with null `data` is also `None`.
	pub async fn fetch_one<T: DeserializeOwned>(
		&self,
		resource: Resource,
		locale: Locale,
	) -> Option<T> {
		match self.fetch_envelope::<T>(resource, locale).await {
			Ok(envelope) => envelope.data,
			Err(e) => {
				warn!(resource = resource.path(), %locale, error = %e, "content fetch failed, using fallback");
				None
			}
		}
	}

	/// Fetch a collection resource. All failure paths collapse to an
	/// empty list, as does a null `data`.
	pub async fn fetch_many<T: DeserializeOwned>(
		&self,
		resource: Resource,
		locale: Locale,
	) -> Vec<T> {
		match self.fetch_envelope::<Vec<T>>(resource, locale).await {
			Ok(envelope) => envelope.data.unwrap_or_default(),
			Err(e) => {
				warn!(resource = resource.path(), %locale, error = %e, "content fetch failed, using empty collection");
				Vec::new()
			}
		}
	}

	/// Forward a raw endpoint string to the content source, appending the
	/// locale when the endpoint does not already carry one. Used by the
	/// `/api/strapi` proxy route, which passes the upstream status and
	/// body through to the browser.
	pub async fn forward(
		&self,
		endpoint: &str,
		locale: Locale,
	) -> Result<reqwest::Response, reqwest::Error> {
		let url = format!("{}{}", self.base_url, append_locale(endpoint, locale));
		debug!(%url, "forwarding request to content source");
		self.http.get(url).send().await
	}

	async fn fetch_envelope<T: DeserializeOwned>(
		&self,
		resource: Resource,
		locale: Locale,
	) -> Result<Envelope<T>, ContentError> {
		let url = format!("{}{}", self.base_url, resource.path());
		let mut query: Vec<(String, &str)> = resource
			.populate()
			.iter()
			.enumerate()
			.map(|(i, field)| (format!("populate[{i}]"), *field))
			.collect();
		query.push(("locale".to_string(), locale.code()));

		debug!(%url, %locale, "fetching content resource");

		let response = self.http.get(&url).query(&query).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(ContentError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text().await?;
		serde_json::from_str(&body).map_err(|e| ContentError::InvalidResponse(e.to_string()))
	}
}

/// Append `locale={code}` to a raw endpoint string unless it already
/// specifies a locale.
pub fn append_locale(endpoint: &str, locale: Locale) -> String {
	if endpoint.contains("locale=") {
		return endpoint.to_string();
	}
	let separator = if endpoint.contains('?') { '&' } else { '?' };
	format!("{endpoint}{separator}locale={locale}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use wiremock::matchers::{header, method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn client_for(server_url: &str, token: Option<&str>) -> ContentClient {
		ContentClient::new(&ContentConfig {
			api_url: server_url.trim_end_matches('/').to_string(),
			api_token: token.map(str::to_string),
			site_url: "https://petra-foam.com".to_string(),
		})
	}

	#[test]
	fn test_append_locale() {
		assert_eq!(
			append_locale("/api/products", Locale::Ar),
			"/api/products?locale=ar"
		);
		assert_eq!(
			append_locale("/api/products?populate[0]=images", Locale::En),
			"/api/products?populate[0]=images&locale=en"
		);
		assert_eq!(
			append_locale("/api/products?locale=ar", Locale::En),
			"/api/products?locale=ar"
		);
	}

	#[test]
	fn test_populate_table() {
		assert_eq!(Resource::Products.populate(), &["images", "catalogue"]);
		assert_eq!(Resource::ContactInfo.populate(), &[] as &[&str]);
	}

	#[tokio::test]
	async fn test_fetch_one_success_sends_locale_populate_and_bearer() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/home-page"))
			.and(query_param("locale", "ar"))
			.and(query_param("populate[0]", "header_image"))
			.and(header("authorization", "Bearer test-token"))
			.respond_with(ResponseTemplate::new(200).set_body_raw(
				r#"{"data":{"title":"حلول العزل","description":"وصف"}}"#,
				"application/json",
			))
			.expect(1)
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), Some("test-token"));
		let record = client.home(Locale::Ar).await.expect("record");
		assert_eq!(record.title.as_deref(), Some("حلول العزل"));
	}

	#[tokio::test]
	async fn test_missing_token_still_attempts_call() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/contact-info"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_raw(r#"{"data":{"email1":"a@b.com"}}"#, "application/json"),
			)
			.expect(1)
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), None);
		let record = client.contact(Locale::En).await.expect("record");
		assert_eq!(record.email1.as_deref(), Some("a@b.com"));
	}

	#[tokio::test]
	async fn test_server_error_yields_sentinels() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(500))
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), Some("t"));
		assert!(client.home(Locale::En).await.is_none());
		assert!(client.products(Locale::En).await.is_empty());
		assert!(client.about(Locale::En).await.is_none());
	}

	#[tokio::test]
	async fn test_malformed_json_yields_sentinels() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_raw("not json {", "application/json"))
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), Some("t"));
		assert!(client.home(Locale::En).await.is_none());
		assert!(client.projects(Locale::En).await.is_empty());
	}

	#[tokio::test]
	async fn test_network_error_yields_sentinels() {
		// Nothing listens here; the connection is refused.
		let client = client_for("http://127.0.0.1:9", Some("t"));
		assert!(client.home(Locale::En).await.is_none());
		assert!(client.products(Locale::En).await.is_empty());
	}

	#[tokio::test]
	async fn test_null_data_is_none_and_empty() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(
				ResponseTemplate::new(200).set_body_raw(r#"{"data":null}"#, "application/json"),
			)
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), Some("t"));
		assert!(client.about(Locale::En).await.is_none());
		assert!(client.projects(Locale::En).await.is_empty());
	}

	#[tokio::test]
	async fn test_forward_appends_locale_once() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/products"))
			.and(query_param("locale", "ar"))
			.respond_with(
				ResponseTemplate::new(200).set_body_raw(r#"{"data":[]}"#, "application/json"),
			)
			.expect(1)
			.mount(&server)
			.await;

		let client = client_for(&server.uri(), Some("t"));
		let response = client.forward("/api/products", Locale::Ar).await.unwrap();
		assert!(response.status().is_success());
	}
}
