// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Static, locale-keyed fallback dictionaries.
//!
//! These are the strings the site falls back to when the content source
//! has no value for a field, or is unreachable altogether. Every section
//! normalizer takes its fallbacks from here; there is intentionally no
//! second fallback mechanism (contact details included), so degraded
//! rendering is uniform across sections.

use crate::locale::Locale;

/// Full fallback dictionary for one locale.
#[derive(Debug)]
pub struct Dictionary {
	pub hero: HeroDict,
	pub products: ProductsDict,
	pub projects: PageDict,
	pub about: PageDict,
	pub contact: ContactDict,
}

/// Home page hero copy.
#[derive(Debug)]
pub struct HeroDict {
	pub title: &'static str,
	pub description: &'static str,
}

/// Products page copy.
#[derive(Debug)]
pub struct ProductsDict {
	pub title: &'static str,
	pub description: &'static str,
	pub specifications_title: &'static str,
	pub download_catalogue: &'static str,
	pub no_items: &'static str,
}

/// Generic page copy (projects, about-us).
#[derive(Debug)]
pub struct PageDict {
	pub title: &'static str,
	pub description: &'static str,
	pub no_items: &'static str,
}

/// Contact page copy, including the fixed contact details used when the
/// content source is unreachable.
#[derive(Debug)]
pub struct ContactDict {
	pub title: &'static str,
	pub description: &'static str,
	pub email_title: &'static str,
	pub phone_title: &'static str,
	pub address_title: &'static str,
	pub email1: &'static str,
	pub email2: &'static str,
	pub phone1: &'static str,
	pub phone2: &'static str,
	pub address: &'static str,
}

static EN: Dictionary = Dictionary {
	hero: HeroDict {
		title: "Advanced Thermal Insulation Solutions",
		description: "Petra Foam manufactures XPS and EPS insulation boards for \
		              construction projects across Jordan and the region.",
	},
	products: ProductsDict {
		title: "Our Insulation Products",
		description: "Explore our range of high-quality thermal insulation solutions \
		              for your construction projects.",
		specifications_title: "Technical Specifications",
		download_catalogue: "Download Catalogue",
		no_items: "No products found.",
	},
	projects: PageDict {
		title: "Our Projects",
		description: "A selection of landmark projects insulated with Petra Foam \
		              boards across the region.",
		no_items: "No projects found.",
	},
	about: PageDict {
		title: "About Us",
		description: "Petra Foam is Jordan's premier manufacturer of industrial \
		              insulation solutions. Learn about our story, values, and journey.",
		no_items: "",
	},
	contact: ContactDict {
		title: "Contact Us",
		description: "Have questions or need more information? Reach out to us and \
		              we'll get back to you as soon as possible.",
		email_title: "Email",
		phone_title: "Phone",
		address_title: "Address",
		email1: "info@petra-foam.com",
		email2: "sales@petra-foam.com",
		phone1: "+962 6 402 1234",
		phone2: "+962 79 555 1234",
		address: "Al-Muwaqqar Industrial City, Amman, Jordan",
	},
};

static AR: Dictionary = Dictionary {
	hero: HeroDict {
		title: "حلول متقدمة للعزل الحراري",
		description: "تصنع بترا فوم ألواح العزل الحراري XPS وEPS لمشاريع البناء في الأردن والمنطقة.",
	},
	products: ProductsDict {
		title: "منتجات العزل لدينا",
		description: "اكتشف مجموعتنا من حلول العزل الحراري عالية الجودة لمشاريعك الإنشائية.",
		specifications_title: "المواصفات الفنية",
		download_catalogue: "تحميل الكتالوج",
		no_items: "لا توجد منتجات.",
	},
	projects: PageDict {
		title: "مشاريعنا",
		description: "مجموعة مختارة من المشاريع الرائدة التي تم عزلها بألواح بترا فوم في مختلف أنحاء المنطقة.",
		no_items: "لا توجد مشاريع.",
	},
	about: PageDict {
		title: "من نحن",
		description: "بترا فوم هي الشركة الرائدة في الأردن في مجال تصنيع حلول العزل الصناعية. تعرف على قصتنا وقيمنا ومسيرتنا.",
		no_items: "",
	},
	contact: ContactDict {
		title: "تواصل معنا",
		description: "هل لديك أسئلة أو تحتاج إلى مزيد من المعلومات؟ تواصل معنا وسنرد عليك في أقرب وقت ممكن.",
		email_title: "البريد الإلكتروني",
		phone_title: "الهاتف",
		address_title: "العنوان",
		email1: "info@petra-foam.com",
		email2: "sales@petra-foam.com",
		phone1: "+962 6 402 1234",
		phone2: "+962 79 555 1234",
		address: "مدينة الموقر الصناعية، عمان، الأردن",
	},
};

/// Fallback dictionary for a locale.
pub fn dictionary(locale: Locale) -> &'static Dictionary {
	match locale {
		Locale::En => &EN,
		Locale::Ar => &AR,
	}
}
