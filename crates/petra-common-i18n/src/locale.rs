// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The closed locale set and text-direction metadata.

use serde::{Deserialize, Serialize};

/// A supported site locale.
///
/// The set is closed: pages exist in parity for every member, and the
/// content source is queried with the same two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Ar,
}

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Ltr,
	Rtl,
}

/// Default locale when no preference is usable.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales, in display order.
pub const LOCALES: &[Locale] = &[Locale::En, Locale::Ar];

impl Locale {
	/// Two-letter code used in URLs and content-source query parameters.
	pub fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Ar => "ar",
		}
	}

	/// Parse a two-letter code. Unknown codes are rejected.
	pub fn parse(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Locale::En),
			"ar" => Some(Locale::Ar),
			_ => None,
		}
	}

	/// Text direction for this locale.
	pub fn direction(self) -> Direction {
		match self {
			Locale::En => Direction::Ltr,
			Locale::Ar => Direction::Rtl,
		}
	}

	/// Native display name, used by the language switcher.
	pub fn native_name(self) -> &'static str {
		match self {
			Locale::En => "English",
			Locale::Ar => "العربية",
		}
	}
}

impl std::fmt::Display for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.code())
	}
}

/// Whether a locale renders right-to-left.
pub fn is_rtl(locale: Locale) -> bool {
	locale.direction() == Direction::Rtl
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_round_trip() {
		for &locale in LOCALES {
			assert_eq!(Locale::parse(locale.code()), Some(locale));
		}
	}

	#[test]
	fn test_unknown_codes_rejected() {
		assert_eq!(Locale::parse("fr"), None);
		assert_eq!(Locale::parse(""), None);
		assert_eq!(Locale::parse("EN"), None);
	}

	#[test]
	fn test_arabic_is_rtl() {
		assert!(is_rtl(Locale::Ar));
		assert!(!is_rtl(Locale::En));
	}

	#[test]
	fn test_serde_uses_lowercase_codes() {
		assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
		let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(parsed, Locale::En);
	}
}
