// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed content-source records.
//!
//! The content source returns a `{ "data": ... }` envelope around
//! per-resource record shapes. Every field the site reads is modelled
//! explicitly as an `Option` with `#[serde(default)]`, so a record that is
//! missing fields (or grew new ones) deserializes instead of erroring;
//! absent fields fall through the normalizer's precedence chain.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Content-source response envelope.
///
/// `data` is a single record, a list of records, or null depending on the
/// resource. A null/missing `data` is a valid "nothing published" answer.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
	#[serde(default)]
	pub data: Option<T>,
}

/// A stored media asset with optional named size variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Media {
	pub url: Option<String>,
	#[serde(rename = "alternativeText")]
	pub alternative_text: Option<String>,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub formats: Option<MediaFormats>,
}

/// Named size variants generated by the content source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaFormats {
	pub thumbnail: Option<MediaFormat>,
	pub small: Option<MediaFormat>,
	pub medium: Option<MediaFormat>,
	pub large: Option<MediaFormat>,
}

/// One size variant of a media asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaFormat {
	pub url: Option<String>,
	pub width: Option<u32>,
	pub height: Option<u32>,
}

impl Media {
	/// The preferred display source: the `medium` variant when present,
	/// otherwise the original full-size asset. Returns the still-relative
	/// path plus its dimensions.
	pub fn preferred_source(&self) -> (Option<&str>, Option<u32>, Option<u32>) {
		if let Some(medium) = self.formats.as_ref().and_then(|f| f.medium.as_ref()) {
			if medium.url.is_some() {
				return (medium.url.as_deref(), medium.width, medium.height);
			}
		}
		(self.url.as_deref(), self.width, self.height)
	}
}

/// Home page single-type record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HomeRecord {
	pub title: Option<String>,
	pub description: Option<String>,
	pub header_image: Option<Media>,
	pub locale: Option<String>,
}

/// One product collection entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
	pub id: u64,
	pub title: Option<String>,
	pub description: Option<String>,
	pub short_description: Option<String>,
	pub details: Option<BTreeMap<String, serde_json::Value>>,
	pub images: Option<Vec<Media>>,
	pub catalogue: Option<Media>,
	pub locale: Option<String>,
}

/// One project collection entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
	pub id: u64,
	pub title: Option<String>,
	pub description: Option<String>,
	pub images: Option<Vec<Media>>,
	pub locale: Option<String>,
}

/// About-us single-type record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AboutRecord {
	pub title: Option<String>,
	pub description: Option<String>,
	pub image: Option<Media>,
	pub locale: Option<String>,
}

/// Contact-info single-type record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
	pub email1: Option<String>,
	pub email2: Option<String>,
	pub phone1: Option<String>,
	pub phone2: Option<String>,
	pub address: Option<String>,
	pub locale: Option<String>,
}
