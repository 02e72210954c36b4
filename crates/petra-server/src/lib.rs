// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP server for the Petra Foam site content API.
//!
//! Routes:
//! - `/health` - liveness probe
//! - `/api/strapi` - authenticated proxy between the browser and the
//!   content source
//! - `/api/pages/*` - composed, fallback-resolved view models per page
//! - `/api/sitemap` - locale-expanded sitemap entries
//!
//! Each request resolves its content independently; there is no shared
//! mutable state between renders and no caching in front of the content
//! source.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
