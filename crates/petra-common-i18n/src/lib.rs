// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Petra Foam site.
//!
//! The site is bilingual: English (LTR) and Arabic (RTL). This crate owns
//! the closed locale set, the static fallback dictionaries used when the
//! content source has no value, and the path helper behind the header
//! language switcher.
//!
//! # Example
//!
//! ```
//! use petra_common_i18n::{dictionary, is_rtl, resolve_locale, switch_locale_path, Locale};
//!
//! let locale = resolve_locale(Some("ar"), "en");
//! assert_eq!(locale, Locale::Ar);
//!
//! // Check for RTL language
//! if is_rtl(locale) {
//!     // Render with dir="rtl"
//! }
//!
//! // Fallback copy for the products page
//! let dict = dictionary(locale);
//! assert!(!dict.products.title.is_empty());
//!
//! // Language switcher target path
//! assert_eq!(switch_locale_path("/en/products/3", Locale::Ar), "/ar/products/3");
//! ```

mod dictionary;
mod locale;
mod resolve;

pub use dictionary::{dictionary, ContactDict, Dictionary, HeroDict, PageDict, ProductsDict};
pub use locale::{is_rtl, Direction, Locale, DEFAULT_LOCALE, LOCALES};
pub use resolve::{resolve_locale, switch_locale_path};
