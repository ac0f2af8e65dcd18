// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Initialization payload and loading it from configuration documents.

use loom_common_i18n::{get_path, I18nError, Language, LanguageSet, LocalizeOptions, Result};
use serde::Deserialize;

/// A language given either as a bare code or as a full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LanguageInput {
	Code(String),
	Language(Language),
}

impl From<LanguageInput> for Language {
	fn from(input: LanguageInput) -> Self {
		match input {
			LanguageInput::Code(code) => Language::new(code),
			LanguageInput::Language(language) => language,
		}
	}
}

impl From<&str> for LanguageInput {
	fn from(code: &str) -> Self {
		LanguageInput::Code(code.to_string())
	}
}

impl From<Language> for LanguageInput {
	fn from(language: Language) -> Self {
		LanguageInput::Language(language)
	}
}

/// Everything needed to initialize a [`crate::Localize`] catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitializePayload {
	pub languages: Vec<LanguageInput>,
	/// Multi-language translations; nested objects are flattened into dotted
	/// keys.
	pub translation: Option<serde_json::Value>,
	pub options: LocalizeOptions,
}

impl InitializePayload {
	pub fn new<I, L>(languages: I) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<LanguageInput>,
	{
		Self {
			languages: languages.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	pub fn with_translation(mut self, translation: serde_json::Value) -> Self {
		self.translation = Some(translation);
		self
	}

	pub fn with_options(mut self, options: LocalizeOptions) -> Self {
		self.options = options;
		self
	}

	/// Reads a payload from `document`, under the dotted `section` path when
	/// it is not empty.
	///
	/// Callbacks cannot be expressed in a document, so `renderToStaticMarkup`
	/// has to be `false` there or be set on [`InitializePayload::options`]
	/// before initializing.
	pub fn from_config(document: &serde_json::Value, section: &str) -> Result<Self> {
		let value = get_path(document, section, &serde_json::Value::Null);
		if value.is_null() {
			return Err(I18nError::MissingConfigSection(section.to_string()));
		}
		Ok(serde_json::from_value(value.clone())?)
	}

	/// Parses a JSON document and reads the payload under `section`.
	pub fn from_json_str(json: &str, section: &str) -> Result<Self> {
		let document: serde_json::Value = serde_json::from_str(json)?;
		Self::from_config(&document, section)
	}

	pub(crate) fn language_set(&self) -> LanguageSet {
		self.languages
			.iter()
			.cloned()
			.map(Language::from)
			.collect()
	}
}
