// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! URL-safe slug derivation for project titles.

/// Derive a URL-safe slug from a title.
///
/// Lowercases, collapses whitespace runs to single hyphens, strips every
/// character outside `[a-z0-9-]`, collapses the resulting hyphen runs,
/// and trims leading/trailing hyphens.
///
/// Slugs are always derived from the title, never taken from the content
/// source, so project URLs stay stable under CMS re-imports that would
/// regenerate source slugs.
///
/// ```
/// use petra_content::slugify;
///
/// assert_eq!(slugify("XPS Board — 50mm!"), "xps-board-50mm");
/// ```
pub fn slugify(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());

	for ch in title.chars() {
		if ch.is_whitespace() {
			if !slug.ends_with('-') {
				slug.push('-');
			}
			continue;
		}
		for lower in ch.to_lowercase() {
			if lower.is_ascii_alphanumeric() || lower == '-' {
				if lower == '-' && slug.ends_with('-') {
					continue;
				}
				slug.push(lower);
			}
		}
	}

	slug.trim_matches('-').to_string()
}
