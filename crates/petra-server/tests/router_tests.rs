// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end router tests against a mocked content source.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use petra_content::ContentConfig;
use petra_server::{create_app_state, create_router};

fn app_for(api_url: &str) -> Router {
	let config = ContentConfig {
		api_url: api_url.trim_end_matches('/').to_string(),
		api_token: Some("test-token".to_string()),
		site_url: "https://petra-foam.com".to_string(),
	};
	create_router(create_app_state(&config, "en"))
}

/// Router wired to an address nothing listens on, so every content fetch
/// fails and the site renders from fallbacks.
fn app_with_unreachable_source() -> Router {
	app_for("http://127.0.0.1:9")
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();

	let status = response.status();
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let json = serde_json::from_slice(&body).unwrap();
	(status, json)
}

#[tokio::test]
async fn test_health_check() {
	let (status, body) = get(app_with_unreachable_source(), "/health").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "ok");
	assert!(body.get("version").is_some());
}

#[tokio::test]
async fn test_proxy_rejects_missing_endpoint() {
	let (status, body) = get(app_with_unreachable_source(), "/api/strapi").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "endpoint parameter is required");
}

#[tokio::test]
async fn test_proxy_rejects_empty_endpoint() {
	let (status, _) = get(app_with_unreachable_source(), "/api/strapi?endpoint=").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_proxy_passes_body_through_and_appends_locale() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/products"))
		.and(query_param("locale", "ar"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"data":[{"id":1,"title":"لوح XPS"}]}"#,
			"application/json",
		))
		.expect(1)
		.mount(&server)
		.await;

	let (status, body) = get(
		app_for(&server.uri()),
		"/api/strapi?endpoint=/api/products&locale=ar",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["data"][0]["title"], "لوح XPS");
}

#[tokio::test]
async fn test_proxy_preserves_upstream_error_status() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/missing"))
		.respond_with(ResponseTemplate::new(404))
		.mount(&server)
		.await;

	let (status, body) = get(
		app_for(&server.uri()),
		"/api/strapi?endpoint=/api/missing",
	)
	.await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_proxy_unreachable_source_is_internal_error() {
	let (status, _) = get(
		app_with_unreachable_source(),
		"/api/strapi?endpoint=/api/products",
	)
	.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_home_page_falls_back_when_source_is_down() {
	let (status, body) = get(app_with_unreachable_source(), "/api/pages/home").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["locale"], "en");
	assert_eq!(body["rtl"], false);
	assert_eq!(body["hero"]["title"], "Advanced Thermal Insulation Solutions");
	assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_home_page_arabic_is_rtl() {
	let (status, body) = get(
		app_with_unreachable_source(),
		"/api/pages/home?locale=ar",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["locale"], "ar");
	assert_eq!(body["rtl"], true);
	assert_eq!(body["hero"]["title"], "حلول متقدمة للعزل الحراري");
}

#[tokio::test]
async fn test_unknown_locale_falls_back_to_default() {
	let (_, body) = get(
		app_with_unreachable_source(),
		"/api/pages/home?locale=fr",
	)
	.await;

	assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn test_products_page_resolves_media_against_source() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/products"))
		.and(query_param("populate[0]", "images"))
		.and(query_param("populate[1]", "catalogue"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"data":[{
				"id": 1,
				"title": "XPS Board",
				"short_description": "Rigid extruded board.",
				"images": [{"url": "/uploads/board.jpg"}]
			}]}"#,
			"application/json",
		))
		.mount(&server)
		.await;

	let (status, body) = get(app_for(&server.uri()), "/api/pages/products").await;

	assert_eq!(status, StatusCode::OK);
	let product = &body["products"][0];
	assert_eq!(product["title"], "XPS Board");
	assert_eq!(product["description"], "Rigid extruded board.");
	assert_eq!(
		product["primary_image"]["url"],
		format!("{}/uploads/board.jpg", server.uri())
	);
	assert_eq!(body["page"]["title"], "Our Insulation Products");
}

#[tokio::test]
async fn test_projects_page_derives_slugs() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/projects"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"data":[{"id":7,"title":"Amman Towers Phase 2"}]}"#,
			"application/json",
		))
		.mount(&server)
		.await;

	let (_, body) = get(app_for(&server.uri()), "/api/pages/projects").await;

	assert_eq!(body["projects"][0]["slug"], "amman-towers-phase-2");
}

#[tokio::test]
async fn test_contact_page_falls_back_to_fixed_details() {
	let (status, body) = get(
		app_with_unreachable_source(),
		"/api/pages/contact-us",
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["contact"]["email1"], "info@petra-foam.com");
	assert_eq!(body["contact"]["phone1"], "+962 6 402 1234");
	assert_eq!(
		body["contact"]["address"],
		"Al-Muwaqqar Industrial City, Amman, Jordan"
	);
}

#[tokio::test]
async fn test_contact_page_partial_record_fills_gaps() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/contact-info"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"data":{"email1":"ops@petra-foam.com"}}"#,
			"application/json",
		))
		.mount(&server)
		.await;

	let (_, body) = get(app_for(&server.uri()), "/api/pages/contact-us").await;

	assert_eq!(body["contact"]["email1"], "ops@petra-foam.com");
	assert_eq!(body["contact"]["email2"], "sales@petra-foam.com");
}

#[tokio::test]
async fn test_about_page_fallback() {
	let (_, body) = get(
		app_with_unreachable_source(),
		"/api/pages/about-us?locale=ar",
	)
	.await;

	assert_eq!(body["about"]["title"], "من نحن");
}

#[tokio::test]
async fn test_sitemap_covers_every_route_in_every_locale() {
	let (status, body) = get(app_with_unreachable_source(), "/api/sitemap").await;

	assert_eq!(status, StatusCode::OK);
	let entries = body["entries"].as_array().unwrap();
	// 5 routes x 2 locales.
	assert_eq!(entries.len(), 10);

	let urls: Vec<&str> = entries.iter().map(|e| e["url"].as_str().unwrap()).collect();
	assert!(urls.contains(&"https://petra-foam.com/en"));
	assert!(urls.contains(&"https://petra-foam.com/ar/products"));
	assert!(urls.contains(&"https://petra-foam.com/ar/contact-us"));

	for entry in entries {
		let url = entry["url"].as_str().unwrap();
		let is_home = url.ends_with("/en") || url.ends_with("/ar");
		let expected = if is_home { 1.0 } else { 0.8 };
		assert_eq!(entry["priority"].as_f64().unwrap(), expected);
	}
}
