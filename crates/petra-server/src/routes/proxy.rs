// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content-source proxy handler.
//!
//! Client-side components cannot hold the bearer credential, so they call
//! this route instead of the content source directly. The route forwards
//! the request with the credential attached and passes the upstream
//! status and JSON body through unchanged.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use petra_common_i18n::resolve_locale;

use crate::api::AppState;
use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
	pub endpoint: Option<String>,
	pub locale: Option<String>,
}

/// GET /api/strapi?endpoint={path}&locale={locale} - forward a request to
/// the content source.
///
/// The locale is appended to the endpoint unless it already carries one.
/// Upstream failures keep their status code; the body is replaced with an
/// `{ "error": ... }` envelope rather than leaking upstream error bodies.
pub async fn proxy_content_source(
	State(state): State<AppState>,
	Query(query): Query<ProxyQuery>,
) -> Result<impl IntoResponse, ServerError> {
	let Some(endpoint) = query.endpoint.filter(|e| !e.is_empty()) else {
		return Err(ServerError::BadRequest(
			"endpoint parameter is required".to_string(),
		));
	};

	let locale = resolve_locale(query.locale.as_deref(), &state.default_locale);

	let response = state
		.content
		.forward(&endpoint, locale)
		.await
		.map_err(|e| {
			tracing::error!(%endpoint, error = %e, "proxy request failed");
			ServerError::Internal("internal server error".to_string())
		})?;

	let status = response.status();
	if !status.is_success() {
		tracing::warn!(%endpoint, status = status.as_u16(), "content source returned error status");
		return Err(ServerError::Upstream {
			status: status.as_u16(),
		});
	}

	let body: serde_json::Value = response.json().await.map_err(|e| {
		tracing::error!(%endpoint, error = %e, "content source returned unparseable body");
		ServerError::Internal("internal server error".to_string())
	})?;

	Ok((StatusCode::OK, Json(body)))
}
