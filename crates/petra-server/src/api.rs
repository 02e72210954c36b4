// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use petra_content::{ContentClient, ContentConfig, MediaResolver};

use crate::routes;

/// Shared per-process state. Everything here is read-only after startup;
/// concurrent page renders share nothing mutable.
#[derive(Clone)]
pub struct AppState {
	pub content: Arc<ContentClient>,
	pub media: MediaResolver,
	pub site_url: String,
	pub default_locale: String,
}

/// Build application state from resolved configuration.
pub fn create_app_state(config: &ContentConfig, default_locale: impl Into<String>) -> AppState {
	AppState {
		content: Arc::new(ContentClient::new(config)),
		media: MediaResolver::new(config.api_url.clone()),
		site_url: config.site_url.clone(),
		default_locale: default_locale.into(),
	}
}

/// Build the site router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/strapi", get(routes::proxy::proxy_content_source))
		.route("/api/sitemap", get(routes::sitemap::sitemap))
		.route("/api/pages/home", get(routes::pages::home_page))
		.route("/api/pages/products", get(routes::pages::products_page))
		.route("/api/pages/projects", get(routes::pages::projects_page))
		.route("/api/pages/about-us", get(routes::pages::about_page))
		.route("/api/pages/contact-us", get(routes::pages::contact_page))
		.with_state(state)
}
