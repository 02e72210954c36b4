// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale resolution and locale-aware path rewriting.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale from a request preference and the site
/// default.
///
/// Resolution order (highest to lowest priority):
/// 1. Request locale (query parameter or path segment), if valid
/// 2. Site default locale, if valid
/// 3. Fallback to English
///
/// # Example
///
/// ```
/// use petra_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("ar"), "en"), Locale::Ar);
/// assert_eq!(resolve_locale(None, "ar"), Locale::Ar);
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::En);
/// ```
pub fn resolve_locale(preference: Option<&str>, site_default: &str) -> Locale {
	if let Some(code) = preference {
		if let Some(locale) = Locale::parse(code) {
			return locale;
		}
	}

	Locale::parse(site_default).unwrap_or(DEFAULT_LOCALE)
}

/// Compute the path the language switcher should navigate to.
///
/// Site paths always carry the locale as their first segment
/// (`/en/products/3`). The segment is replaced wholesale; the rest of the
/// path is untouched. No existence check is performed on the result: the
/// locale set is small and pages are kept in parity, so a dangling target
/// is accepted.
///
/// An empty path falls back to the site root.
///
/// # Example
///
/// ```
/// use petra_common_i18n::{switch_locale_path, Locale};
///
/// assert_eq!(switch_locale_path("/en/products/3", Locale::Ar), "/ar/products/3");
/// assert_eq!(switch_locale_path("/en", Locale::Ar), "/ar");
/// assert_eq!(switch_locale_path("", Locale::Ar), "/");
/// ```
pub fn switch_locale_path(path: &str, target: Locale) -> String {
	if path.is_empty() {
		return "/".to_string();
	}

	let mut segments: Vec<&str> = path.split('/').collect();
	if segments.len() > 1 {
		segments[1] = target.code();
	}
	segments.join("/")
}
