// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET /health - liveness probe.
///
/// Deliberately does not probe the content source: the site renders from
/// fallback dictionaries when the source is down, so source health is not
/// site health.
pub async fn health_check() -> impl IntoResponse {
	(
		StatusCode::OK,
		Json(json!({
			"status": "ok",
			"version": env!("CARGO_PKG_VERSION"),
		})),
	)
}
