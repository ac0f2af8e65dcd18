// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Languages and the ordered language set.
//!
//! The position of a language in its [`LanguageSet`] is the index of its
//! values in every multi-language translation array. Languages are only ever
//! appended, so existing positions never move.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A known language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
	/// Unique language code (e.g., "en", "fr")
	pub code: String,
	/// Display name
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default)]
	pub active: bool,
}

impl Language {
	pub fn new(code: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			name: None,
			active: false,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Ordered, uniquely keyed languages.
///
/// Keeps a `code -> position` index next to the ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSet {
	languages: Vec<Language>,
	positions: HashMap<String, usize>,
}

impl LanguageSet {
	/// Builds a set, keeping the first occurrence of a repeated code.
	pub fn new(languages: impl IntoIterator<Item = Language>) -> Self {
		let mut set = Self::default();
		for language in languages {
			set.push(language);
		}
		set
	}

	pub fn from_codes<I, S>(codes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(codes.into_iter().map(Language::new))
	}

	/// Appends a language. Returns false when its code is already known.
	pub fn push(&mut self, language: Language) -> bool {
		if self.positions.contains_key(&language.code) {
			return false;
		}
		self.positions
			.insert(language.code.clone(), self.languages.len());
		self.languages.push(language);
		true
	}

	/// Position of `code`, the index of its values in translation arrays.
	pub fn index_of(&self, code: &str) -> Option<usize> {
		self.positions.get(code).copied()
	}

	pub fn contains(&self, code: &str) -> bool {
		self.positions.contains_key(code)
	}

	pub fn get(&self, code: &str) -> Option<&Language> {
		self.index_of(code).map(|index| &self.languages[index])
	}

	pub fn codes(&self) -> Vec<String> {
		self.languages
			.iter()
			.map(|language| language.code.clone())
			.collect()
	}

	pub fn first(&self) -> Option<&Language> {
		self.languages.first()
	}

	pub fn active(&self) -> Option<&Language> {
		self.languages.iter().find(|language| language.active)
	}

	/// Marks `code` as the only active language.
	///
	/// An unknown code leaves every language inactive.
	pub fn set_active(&mut self, code: &str) {
		for language in &mut self.languages {
			language.active = language.code == code;
		}
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Language> {
		self.languages.iter()
	}

	pub fn as_slice(&self) -> &[Language] {
		&self.languages
	}

	pub fn len(&self) -> usize {
		self.languages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}
}

impl<'a> IntoIterator for &'a LanguageSet {
	type Item = &'a Language;
	type IntoIter = std::slice::Iter<'a, Language>;

	fn into_iter(self) -> Self::IntoIter {
		self.languages.iter()
	}
}

impl FromIterator<Language> for LanguageSet {
	fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
		Self::new(iter)
	}
}

/// Resolve the default language for translations.
///
/// Resolution order:
/// 1. The configured default language, when the set contains it
/// 2. The first language of the set
pub fn resolve_default_language<'a>(
	configured: Option<&'a str>,
	languages: &'a LanguageSet,
) -> Option<&'a str> {
	configured
		.filter(|code| languages.contains(code))
		.or_else(|| languages.first().map(|language| language.code.as_str()))
}
