// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod health;
pub mod pages;
pub mod proxy;
pub mod sitemap;

use serde::Deserialize;

use petra_common_i18n::{resolve_locale, Locale};

use crate::api::AppState;

/// Query parameters shared by locale-aware routes.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
	pub locale: Option<String>,
}

impl LocaleQuery {
	/// Effective locale for this request.
	pub fn resolve(&self, state: &AppState) -> Locale {
		resolve_locale(self.locale.as_deref(), &state.default_locale)
	}
}
