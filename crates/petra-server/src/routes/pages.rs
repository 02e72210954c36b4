// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-page content endpoints.
//!
//! Each handler performs the section fetches a page render needs, runs
//! the results through the normalizers, and returns fully-resolved view
//! models plus the static page copy for the requested locale. A failing
//! content source never fails these endpoints; the response degrades to
//! dictionary fallbacks or empty collections.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use petra_common_i18n::{dictionary, is_rtl, Locale};
use petra_content::normalize;
use petra_content::view::{AboutView, ContactView, HeroView, ProductView, ProjectView};

use crate::api::AppState;
use crate::routes::LocaleQuery;

#[derive(Debug, Serialize)]
struct PageCopy {
	title: String,
	description: String,
	no_items: String,
}

#[derive(Serialize)]
struct HomePageResponse {
	locale: Locale,
	rtl: bool,
	hero: HeroView,
	products: Vec<ProductView>,
}

/// GET /api/pages/home - hero plus a product overview.
pub async fn home_page(
	State(state): State<AppState>,
	Query(query): Query<LocaleQuery>,
) -> impl IntoResponse {
	let locale = query.resolve(&state);
	let dict = dictionary(locale);

	// Independent, unordered fetches; one failing section falls back on
	// its own without disturbing the other.
	let (home, products) = tokio::join!(state.content.home(locale), state.content.products(locale));

	Json(HomePageResponse {
		locale,
		rtl: is_rtl(locale),
		hero: normalize::hero(home, dict, &state.media),
		products: normalize::products(products, &state.media),
	})
}

#[derive(Serialize)]
struct ProductsPageResponse {
	locale: Locale,
	rtl: bool,
	page: PageCopy,
	specifications_title: String,
	download_catalogue: String,
	products: Vec<ProductView>,
}

/// GET /api/pages/products - all products, source order.
pub async fn products_page(
	State(state): State<AppState>,
	Query(query): Query<LocaleQuery>,
) -> impl IntoResponse {
	let locale = query.resolve(&state);
	let dict = dictionary(locale);
	let products = state.content.products(locale).await;

	Json(ProductsPageResponse {
		locale,
		rtl: is_rtl(locale),
		page: PageCopy {
			title: dict.products.title.to_string(),
			description: dict.products.description.to_string(),
			no_items: dict.products.no_items.to_string(),
		},
		specifications_title: dict.products.specifications_title.to_string(),
		download_catalogue: dict.products.download_catalogue.to_string(),
		products: normalize::products(products, &state.media),
	})
}

#[derive(Serialize)]
struct ProjectsPageResponse {
	locale: Locale,
	rtl: bool,
	page: PageCopy,
	projects: Vec<ProjectView>,
}

/// GET /api/pages/projects - all projects, source order.
pub async fn projects_page(
	State(state): State<AppState>,
	Query(query): Query<LocaleQuery>,
) -> impl IntoResponse {
	let locale = query.resolve(&state);
	let dict = dictionary(locale);
	let projects = state.content.projects(locale).await;

	Json(ProjectsPageResponse {
		locale,
		rtl: is_rtl(locale),
		page: PageCopy {
			title: dict.projects.title.to_string(),
			description: dict.projects.description.to_string(),
			no_items: dict.projects.no_items.to_string(),
		},
		projects: normalize::projects(projects, &state.media),
	})
}

#[derive(Serialize)]
struct AboutPageResponse {
	locale: Locale,
	rtl: bool,
	about: AboutView,
}

/// GET /api/pages/about-us.
pub async fn about_page(
	State(state): State<AppState>,
	Query(query): Query<LocaleQuery>,
) -> impl IntoResponse {
	let locale = query.resolve(&state);
	let dict = dictionary(locale);
	let about = state.content.about(locale).await;

	Json(AboutPageResponse {
		locale,
		rtl: is_rtl(locale),
		about: normalize::about(about, dict, &state.media),
	})
}

#[derive(Serialize)]
struct ContactPageResponse {
	locale: Locale,
	rtl: bool,
	title: String,
	description: String,
	email_title: String,
	phone_title: String,
	address_title: String,
	contact: ContactView,
}

/// GET /api/pages/contact-us.
pub async fn contact_page(
	State(state): State<AppState>,
	Query(query): Query<LocaleQuery>,
) -> impl IntoResponse {
	let locale = query.resolve(&state);
	let dict = dictionary(locale);
	let contact = state.content.contact(locale).await;

	Json(ContactPageResponse {
		locale,
		rtl: is_rtl(locale),
		title: dict.contact.title.to_string(),
		description: dict.contact.description.to_string(),
		email_title: dict.contact.email_title.to_string(),
		phone_title: dict.contact.phone_title.to_string(),
		address_title: dict.contact.address_title.to_string(),
		contact: normalize::contact(contact, dict),
	})
}
