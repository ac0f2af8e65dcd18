// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory translation catalog for Loom.
//!
//! [`Localize`] holds the known languages, the multi-language translation
//! table and the validated options, and translates ids into the active
//! language. The table manipulation and templating live in
//! [`loom_common_i18n`]; this crate keeps the state around them.
//!
//! # Example
//!
//! ```
//! use loom_i18n::{InitializePayload, Localize};
//! use loom_common_i18n::{LocalizeOptions, TemplateData, TranslateOptions};
//! use serde_json::json;
//!
//! let mut localize = Localize::initialize(
//!     InitializePayload::new(["en", "fr"])
//!         .with_translation(json!({ "greeting": ["Hello ${name}", "Bonjour ${name}"] }))
//!         .with_options(LocalizeOptions::new().without_static_markup()),
//! )
//! .unwrap();
//!
//! localize.set_active_language("fr");
//! let data: TemplateData = TemplateData::new().with("name", "Ada");
//! let greeting = localize.translate("greeting", &data, &TranslateOptions::new());
//! assert_eq!(greeting.as_str(), Some("Bonjour Ada"));
//! ```

mod config;
mod localize;

pub use config::{InitializePayload, LanguageInput};
pub use localize::{Localize, MISSING_TRANSLATION_TEMPLATE};
