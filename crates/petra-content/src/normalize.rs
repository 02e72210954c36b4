// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content-to-view-model normalization.
//!
//! One pure function per page section. Uniform algorithm:
//!
//! 1. No usable record: return the dictionary fallback view.
//! 2. Otherwise resolve every field independently: record value if
//!    present and non-empty, else dictionary value, else empty default.
//! 3. Image-bearing records: prefer the `medium` variant, resolve through
//!    [`MediaResolver`], preserve source order, expose the first image as
//!    `primary_image`.
//! 4. Collections with zero records normalize to an empty list; the page
//!    renders its own "no items" state from the dictionary.

use petra_common_i18n::Dictionary;

use crate::media::MediaResolver;
use crate::record::{AboutRecord, ContactRecord, HomeRecord, Media, ProductRecord, ProjectRecord};
use crate::slug::slugify;
use crate::view::{AboutView, ContactView, HeroView, ImageView, ProductView, ProjectView};

/// Record value if present and non-empty, else the dictionary fallback.
fn field(value: Option<String>, fallback: &str) -> String {
	match value {
		Some(v) if !v.trim().is_empty() => v,
		_ => fallback.to_string(),
	}
}

/// Resolve one media record into a display image. `None` when the record
/// carries no usable URL.
fn image(media: &Media, alt_fallback: &str, resolver: &MediaResolver) -> Option<ImageView> {
	let (source, width, height) = media.preferred_source();
	let url = resolver.resolve(source)?;
	let alt = media
		.alternative_text
		.clone()
		.filter(|alt| !alt.is_empty())
		.unwrap_or_else(|| alt_fallback.to_string());

	Some(ImageView {
		url,
		alt,
		width,
		height,
	})
}

/// Resolve an ordered image list; records without a usable URL are
/// dropped rather than rendered as broken images.
fn images(media: Option<&[Media]>, alt_fallback: &str, resolver: &MediaResolver) -> Vec<ImageView> {
	media
		.unwrap_or_default()
		.iter()
		.filter_map(|m| image(m, alt_fallback, resolver))
		.collect()
}

/// Home page hero section.
pub fn hero(record: Option<HomeRecord>, dict: &Dictionary, resolver: &MediaResolver) -> HeroView {
	let Some(record) = record else {
		return HeroView {
			title: dict.hero.title.to_string(),
			description: dict.hero.description.to_string(),
			image: None,
		};
	};

	let title = field(record.title, dict.hero.title);
	let image = record
		.header_image
		.as_ref()
		.and_then(|m| image(m, &title, resolver));

	HeroView {
		description: field(record.description, dict.hero.description),
		title,
		image,
	}
}

/// Products collection. Zero records normalize to an empty list.
pub fn products(records: Vec<ProductRecord>, resolver: &MediaResolver) -> Vec<ProductView> {
	records
		.into_iter()
		.map(|record| {
			let title = field(record.title, "");
			// Short marketing copy wins over the long-form description.
			let description = match record.short_description {
				Some(s) if !s.trim().is_empty() => s,
				_ => field(record.description, ""),
			};

			let images = images(record.images.as_deref(), &title, resolver);
			let primary_image = images.first().cloned();

			let details = record
				.details
				.unwrap_or_default()
				.into_iter()
				.map(|(key, value)| {
					let value = match value {
						serde_json::Value::String(s) => s,
						other => other.to_string(),
					};
					(key, value)
				})
				.collect();

			let catalogue_url = record
				.catalogue
				.as_ref()
				.and_then(|c| resolver.resolve(c.url.as_deref()));

			ProductView {
				id: record.id,
				title,
				description,
				details,
				images,
				primary_image,
				catalogue_url,
			}
		})
		.collect()
}

/// Projects collection. Zero records normalize to an empty list.
pub fn projects(records: Vec<ProjectRecord>, resolver: &MediaResolver) -> Vec<ProjectView> {
	records
		.into_iter()
		.map(|record| {
			let title = field(record.title, "");
			let slug = slugify(&title);
			let images = images(record.images.as_deref(), &title, resolver);
			let primary_image = images.first().cloned();

			ProjectView {
				id: record.id,
				description: field(record.description, ""),
				slug,
				title,
				images,
				primary_image,
			}
		})
		.collect()
}

/// About-us section.
pub fn about(record: Option<AboutRecord>, dict: &Dictionary, resolver: &MediaResolver) -> AboutView {
	let Some(record) = record else {
		return AboutView {
			title: dict.about.title.to_string(),
			description: dict.about.description.to_string(),
			image: None,
		};
	};

	let title = field(record.title, dict.about.title);
	let image = record
		.image
		.as_ref()
		.and_then(|m| image(m, &title, resolver));

	AboutView {
		description: field(record.description, dict.about.description),
		title,
		image,
	}
}

/// Contact details. Dictionary fallbacks apply per field, so a partially
/// published record fills its gaps from the static contact constants.
pub fn contact(record: Option<ContactRecord>, dict: &Dictionary) -> ContactView {
	let record = record.unwrap_or_default();

	ContactView {
		email1: field(record.email1, dict.contact.email1),
		email2: field(record.email2, dict.contact.email2),
		phone1: field(record.phone1, dict.contact.phone1),
		phone2: field(record.phone2, dict.contact.phone2),
		address: field(record.address, dict.contact.address),
	}
}
