// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content resolution layer for the Petra Foam site.
//!
//! Page copy and media live in a headless CMS; this crate fetches them,
//! reshapes the raw records into UI-ready view models, and falls back
//! deterministically to the static dictionaries in `petra-common-i18n`
//! when the source is unreachable or partially populated.
//!
//! The layer is deliberately forgiving: nothing here is allowed to fail a
//! page render. The [`client::ContentClient`] converts every transport or
//! shape failure into a `None`/empty sentinel at its boundary, and the
//! normalizers in [`normalize`] guarantee fully-populated view models
//! regardless of what the source returned.
//!
//! Resolution precedence for every view-model field, independently:
//! content-source value, then dictionary value, then a safe empty default.

pub mod client;
pub mod config;
pub mod media;
pub mod normalize;
pub mod record;
pub mod slug;
pub mod view;

pub use client::{append_locale, ContentClient, Resource};
pub use config::{ConfigDiagnostics, ContentConfig};
pub use media::MediaResolver;
pub use slug::slugify;
