// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sitemap handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use petra_common_i18n::LOCALES;

use crate::api::AppState;

/// Site routes that appear in the sitemap, one entry per locale each.
const ROUTES: &[&str] = &["", "/products", "/projects", "/about-us", "/contact-us"];

#[derive(Debug, Serialize)]
struct SitemapEntry {
	url: String,
	priority: f64,
}

#[derive(Debug, Serialize)]
struct SitemapResponse {
	entries: Vec<SitemapEntry>,
}

/// GET /api/sitemap - every route in every locale, rooted at the
/// configured site URL. The home pages carry top priority.
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
	let entries = LOCALES
		.iter()
		.flat_map(|locale| {
			let site_url = state.site_url.clone();
			ROUTES.iter().map(move |route| SitemapEntry {
				url: format!("{}/{}{}", site_url, locale.code(), route),
				priority: if route.is_empty() { 1.0 } else { 0.8 },
			})
		})
		.collect();

	Json(SitemapResponse { entries })
}
