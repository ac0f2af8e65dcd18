// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation tables and placeholder templating for Loom.
//!
//! This crate holds the pure parts of Loom's localization support:
//!
//! - [`resolve`]: fills `${name}` placeholders with runtime data, embedding
//!   structured values inline when needed
//! - [`contains_markup`] and [`localize`]: decide whether a resolved
//!   translation is rendered as text, markup or a fragment
//! - [`to_single_language_map`] and [`merge_single_language_update`]: convert
//!   between the per-key multi-language table and per-language maps
//! - [`validate`]: checks [`LocalizeOptions`] before they are used
//! - [`get_path`]: defensive dotted-path lookup into JSON documents
//!
//! Every function here is side-effect free. Warnings are reported through an
//! injected [`Diagnostics`] sink.
//!
//! # Translation Table Layout
//!
//! Translations are stored per key, with one slot per language in the order
//! of the [`LanguageSet`]:
//!
//! ```text
//! languages: [en, fr]
//! greeting:  ["Hi", "Salut"]
//! farewell:  ["Bye", None]      // not translated to French yet
//! ```
//!
//! # Example
//!
//! ```
//! use loom_common_i18n::{resolve, Resolved, TemplateData};
//!
//! let data: TemplateData = TemplateData::new().with("name", "Ada");
//! assert_eq!(
//!     resolve("Hello ${ name }!", &data),
//!     Resolved::Text("Hello Ada!".to_string())
//! );
//! ```

mod diagnostics;
mod error;
mod language;
mod markup;
mod options;
mod path;
mod table;
mod template;

pub use diagnostics::{Diagnostics, TracingDiagnostics, Warning};
pub use error::{I18nError, Result};
pub use language::{resolve_default_language, Language, LanguageSet};
pub use markup::{contains_markup, localize, Localized};
pub use options::{
	validate, Callback, LocalizeOptions, MissingTranslation, MissingTranslationFn,
	RenderToStaticMarkupFn, TranslateOptions,
};
pub use path::get_path;
pub use table::{
	flatten_single_language, flatten_translations, index_for_language_code,
	merge_single_language_update, merge_tables, to_single_language_map, FlatTranslations,
	LanguageTranslations, TranslationTable,
};
pub use template::{resolve, Resolved, TemplateData, Value};
