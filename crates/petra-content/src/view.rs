// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! UI-ready view models.
//!
//! Invariant: every field is populated from the content source or from a
//! static fallback. The rendering layer never re-checks the source and
//! never sees a missing top-level field; "no value" is an explicit empty
//! string, empty list, or `None` for optional media.

use serde::Serialize;
use std::collections::BTreeMap;

/// A resolved, display-ready image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
	/// Absolute URL.
	pub url: String,
	pub alt: String,
	pub width: Option<u32>,
	pub height: Option<u32>,
}

/// Home page hero section.
#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
	pub title: String,
	pub description: String,
	pub image: Option<ImageView>,
}

/// One product entry.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
	pub id: u64,
	pub title: String,
	pub description: String,
	/// Technical specification rows, keyed by attribute name.
	pub details: BTreeMap<String, String>,
	/// All resolved images, source order preserved.
	pub images: Vec<ImageView>,
	/// Convenience: the first resolved image.
	pub primary_image: Option<ImageView>,
	/// Absolute URL of the downloadable catalogue, when published.
	pub catalogue_url: Option<String>,
}

/// One project entry.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
	pub id: u64,
	pub title: String,
	/// Derived from the title, never taken from the content source.
	pub slug: String,
	pub description: String,
	pub images: Vec<ImageView>,
	pub primary_image: Option<ImageView>,
}

/// About-us section.
#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
	pub title: String,
	pub description: String,
	pub image: Option<ImageView>,
}

/// Contact details.
#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
	pub email1: String,
	pub email2: String,
	pub phone1: String,
	pub phone2: String,
	pub address: String,
}
