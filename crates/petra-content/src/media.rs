// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Media URL resolution.
//!
//! The content source stores asset paths either relative to its own host
//! (`/uploads/board.jpg`) or as fully-qualified URLs when a CDN is in
//! front of it. Browsers need absolute URLs either way.

/// Resolves possibly-relative asset paths against the content-source base
/// URL. A pure string transform; reachability is never checked.
#[derive(Debug, Clone)]
pub struct MediaResolver {
	base_url: String,
}

impl MediaResolver {
	/// `base_url` is the content-source base; trailing slashes are
	/// normalized away so joining always produces exactly one separator.
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url }
	}

	/// Turn a stored asset path into an absolute URL.
	///
	/// - `None` or empty input yields `None`: the caller must treat it as
	///   "no image" rather than constructing a broken URL.
	/// - A path starting with `/` is joined onto the base URL.
	/// - Anything else is assumed to already be absolute and is returned
	///   unchanged.
	pub fn resolve(&self, path: Option<&str>) -> Option<String> {
		let path = path?;
		if path.is_empty() {
			return None;
		}

		if path.starts_with('/') {
			return Some(format!("{}/{}", self.base_url, path.trim_start_matches('/')));
		}

		Some(path.to_string())
	}
}
