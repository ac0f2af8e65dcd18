// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The translation catalog.

use std::collections::BTreeMap;

use loom_common_i18n::{
	flatten_single_language, flatten_translations, localize, merge_single_language_update,
	merge_tables, resolve, resolve_default_language, to_single_language_map, validate, Diagnostics,
	FlatTranslations, Language, LanguageSet, LanguageTranslations, LocalizeOptions, Localized,
	MissingTranslation, Result, TemplateData, TracingDiagnostics, TranslateOptions,
	TranslationTable,
};
use tracing::debug;

use crate::config::InitializePayload;

/// Template used when a translation is missing and no hook is configured.
pub const MISSING_TRANSLATION_TEMPLATE: &str =
	"Missing translationId: ${ translationId } for language: ${ languageCode }";

/// Multi-language translations with an active language.
///
/// Translations are kept in a [`TranslationTable`] aligned with the
/// catalog's [`LanguageSet`]. Reads go through the pure functions of
/// `loom_common_i18n`; writes replace the table with a merged copy.
pub struct Localize<D = TracingDiagnostics> {
	languages: LanguageSet,
	translations: TranslationTable,
	options: LocalizeOptions,
	diagnostics: D,
}

impl Default for Localize {
	fn default() -> Self {
		Self {
			languages: LanguageSet::default(),
			translations: TranslationTable::new(),
			options: LocalizeOptions::new().without_static_markup(),
			diagnostics: TracingDiagnostics,
		}
	}
}

impl Localize {
	/// An empty catalog without languages.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a catalog from `payload`, reporting warnings through `tracing`.
	pub fn initialize(payload: InitializePayload) -> Result<Self> {
		Self::with_diagnostics(payload, TracingDiagnostics)
	}

	/// Reads the payload under `section` of a JSON document and initializes
	/// a catalog from it.
	pub fn from_config(document: &serde_json::Value, section: &str) -> Result<Self> {
		Self::initialize(InitializePayload::from_config(document, section)?)
	}
}

impl<D: Diagnostics> Localize<D> {
	/// Builds a catalog from `payload`, reporting warnings to `diagnostics`.
	///
	/// Fails when the options do not validate. The active language is the
	/// configured default language when it is known, the first language
	/// otherwise.
	pub fn with_diagnostics(payload: InitializePayload, diagnostics: D) -> Result<Self> {
		let mut languages = payload.language_set();
		let options = validate(payload.options)?;

		let active = match options.default_language.as_deref() {
			Some(code) if languages.contains(code) => Some(code.to_string()),
			_ => languages.first().map(|language| language.code.clone()),
		};
		if let Some(code) = active {
			languages.set_active(&code);
		}

		let mut localize = Self {
			languages,
			translations: TranslationTable::new(),
			options,
			diagnostics,
		};
		if let Some(translation) = &payload.translation {
			localize.add_translation(translation);
		}

		debug!(
			languages = localize.languages.len(),
			keys = localize.translations.len(),
			active = ?localize.active_language().map(|language| language.code.as_str()),
			"initialized translations"
		);

		Ok(localize)
	}

	pub fn languages(&self) -> &LanguageSet {
		&self.languages
	}

	pub fn active_language(&self) -> Option<&Language> {
		self.languages.active()
	}

	pub fn translations(&self) -> &TranslationTable {
		&self.translations
	}

	pub fn options(&self) -> &LocalizeOptions {
		&self.options
	}

	/// The configured default language, or the first language.
	pub fn default_language(&self) -> Option<&str> {
		resolve_default_language(self.options.default_language.as_deref(), &self.languages)
	}

	pub fn ignore_translate_children(&self) -> bool {
		self.options.ignore_translate_children
	}

	/// Makes `code` the active language. Unknown codes leave no language
	/// active.
	pub fn set_active_language(&mut self, code: &str) {
		if !self.languages.contains(code) {
			debug!(language = %code, "activating unknown language");
		}
		self.languages.set_active(code);
	}

	/// Appends a language. Existing translations keep their positions.
	pub fn add_language(&mut self, language: Language) -> bool {
		self.languages.push(language)
	}

	/// Merges multi-language translations, one array slot per language.
	///
	/// Nested objects are flattened into dotted keys. Slots beyond the known
	/// languages are dropped.
	pub fn add_translation(&mut self, translation: &serde_json::Value) {
		let language_count = self.languages.len();
		let mut update = flatten_translations(translation);
		for (key, values) in update.iter_mut() {
			if values.len() > language_count {
				debug!(
					key = %key,
					values = values.len(),
					languages = language_count,
					"dropping translations for unknown languages"
				);
				values.truncate(language_count);
			}
		}
		self.translations = merge_tables(&self.translations, update);
	}

	/// Merges flat translations for a single language.
	///
	/// Nested objects are flattened into dotted keys. Translations for an
	/// unknown language are ignored.
	pub fn add_translation_for_language(&mut self, translation: &serde_json::Value, code: &str) {
		self.merge_for_language(&flatten_single_language(translation), code);
	}

	fn merge_for_language(&mut self, flat: &FlatTranslations, code: &str) {
		let update =
			merge_single_language_update(code, &self.languages.codes(), flat, &self.translations);
		self.translations = merge_tables(&self.translations, update);
	}

	/// Translations of the active language.
	pub fn translations_for_active_language(&self) -> LanguageTranslations {
		to_single_language_map(self.active_language(), &self.languages, &self.translations)
	}

	/// Translations of `code`; empty for unknown languages.
	pub fn translations_for_language(&self, code: &str) -> LanguageTranslations {
		to_single_language_map(self.languages.get(code), &self.languages, &self.translations)
	}

	fn lookup(&self, id: &str, code: &str) -> Option<&str> {
		let index = self.languages.index_of(code)?;
		self.translations.get(id)?.get(index)?.as_deref()
	}

	/// Translates `id` into the active language, or `options.language`.
	///
	/// A missing translation is replaced by the missing translation hook
	/// (per call, then global) or the default "Missing translationId" text.
	/// The result is resolved against `data` either way.
	pub fn translate<E: Clone>(
		&self,
		id: &str,
		data: &TemplateData<E>,
		options: &TranslateOptions,
	) -> Localized<E> {
		let language_code = options
			.language
			.as_deref()
			.or_else(|| self.active_language().map(|language| language.code.as_str()))
			.unwrap_or_default();
		let render_inner_html = options
			.render_inner_html
			.unwrap_or(self.options.render_inner_html);

		let missing;
		let translation = match self.lookup(id, language_code) {
			Some(translation) => translation,
			None => {
				missing = self.missing_translation(id, language_code, options);
				missing.as_str()
			}
		};

		localize(translation, data, render_inner_html, &self.diagnostics)
	}

	/// Translates several ids at once, keyed by id.
	pub fn translate_many<E: Clone>(
		&self,
		ids: &[&str],
		data: &TemplateData<E>,
		options: &TranslateOptions,
	) -> BTreeMap<String, Localized<E>> {
		ids.iter()
			.map(|id| (id.to_string(), self.translate(id, data, options)))
			.collect()
	}

	fn missing_translation(
		&self,
		id: &str,
		language_code: &str,
		options: &TranslateOptions,
	) -> String {
		let data = TemplateData::<()>::new()
			.with("translationId", id)
			.with("languageCode", language_code);
		let default_translation = resolve(MISSING_TRANSLATION_TEMPLATE, &data)
			.into_text()
			.unwrap_or_default();

		debug!(translation_id = %id, language = %language_code, "missing translation");

		let hook = options
			.on_missing_translation
			.as_ref()
			.or_else(|| self.options.on_missing_translation());
		match hook {
			Some(hook) => hook(&MissingTranslation {
				translation_id: id,
				language_code,
				default_translation: &default_translation,
			}),
			None => default_translation,
		}
	}

	/// Registers default children as the translation of `id` in the default
	/// language.
	///
	/// Children are rendered through `renderToStaticMarkup` when one is
	/// configured and stored as is otherwise. Nothing is added without an
	/// id, children or a default language, or when translate children are
	/// ignored. Returns whether a translation was added.
	pub fn add_default_translation(
		&mut self,
		id: &str,
		children: Option<&str>,
		options: &TranslateOptions,
	) -> bool {
		let Some(children) = children else {
			return false;
		};
		if id.is_empty() {
			return false;
		}
		let ignore = options
			.ignore_translate_children
			.unwrap_or(self.options.ignore_translate_children);
		if ignore {
			return false;
		}
		let Some(language) = options
			.language
			.clone()
			.or_else(|| self.default_language().map(str::to_string))
		else {
			return false;
		};
		if !self.languages.contains(&language) {
			debug!(language = %language, id = %id, "default translation for unknown language");
			return false;
		}

		let translation = match self.options.render_to_static_markup() {
			Some(render) => render(children),
			None => children.to_string(),
		};
		let flat = FlatTranslations::from([(id.to_string(), translation)]);
		self.merge_for_language(&flat, &language);
		true
	}
}
