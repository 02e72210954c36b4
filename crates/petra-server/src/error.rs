// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type with JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients as `{ "error": ... }` bodies.
///
/// Note the content-resolution layer never produces these: a failing
/// content source degrades the page endpoints to fallback view models.
/// Only the proxy route (which passes upstream failures through by
/// contract) and malformed inbound requests reach this type.
#[derive(Debug, Error)]
pub enum ServerError {
	/// Malformed inbound request.
	#[error("{0}")]
	BadRequest(String),

	/// The proxied content source answered with a non-success status.
	#[error("content source error: {status}")]
	Upstream { status: u16 },

	/// Unexpected internal failure.
	#[error("{0}")]
	Internal(String),
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = match &self {
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::Upstream { status } => StatusCode::from_u16(*status)
				.unwrap_or(StatusCode::BAD_GATEWAY),
			ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}
