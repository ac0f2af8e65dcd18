// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation table shapes and the conversions between them.
//!
//! The canonical storage is a [`TranslationTable`]: every key holds one slot
//! per language, aligned with the positions of a [`LanguageSet`]. `None`
//! means "not translated yet" and is distinct from an empty translation.
//!
//! A [`LanguageTranslations`] map is the read view of a single language and
//! is always derived from the table.

use std::collections::BTreeMap;

use crate::language::{Language, LanguageSet};

/// Translation key to per-language values.
pub type TranslationTable = BTreeMap<String, Vec<Option<String>>>;

/// Translation key to the value of one language.
pub type LanguageTranslations = BTreeMap<String, Option<String>>;

/// Flat translations for one language, as supplied by an update.
pub type FlatTranslations = BTreeMap<String, String>;

/// Position of `code` in `languages`.
pub fn index_for_language_code(code: &str, languages: &LanguageSet) -> Option<usize> {
	languages.index_of(code)
}

/// Projects `table` onto a single language.
///
/// No language, or a language outside `languages`, yields an empty map.
/// Keys whose array is shorter than the language position map to `None`.
pub fn to_single_language_map(
	language: Option<&Language>,
	languages: &LanguageSet,
	table: &TranslationTable,
) -> LanguageTranslations {
	let Some(language) = language else {
		return LanguageTranslations::new();
	};
	let Some(index) = languages.index_of(&language.code) else {
		return LanguageTranslations::new();
	};

	table
		.iter()
		.map(|(key, values)| (key.clone(), values.get(index).cloned().flatten()))
		.collect()
}

/// Reshapes a single-language update into table rows.
///
/// Each key of `update` gets an array of `language_codes.len()` slots: the
/// slot of `language_code` holds the new value and every other slot keeps the
/// value from `existing`, if any. Keys that only exist in `existing` are not
/// part of the result; merge it into the table with [`merge_tables`].
///
/// An unknown `language_code` rejects the whole update and returns an empty
/// table.
pub fn merge_single_language_update(
	language_code: &str,
	language_codes: &[String],
	update: &FlatTranslations,
	existing: &TranslationTable,
) -> TranslationTable {
	let Some(index) = language_codes.iter().position(|code| code == language_code) else {
		tracing::debug!(
			language = %language_code,
			keys = update.len(),
			"rejected translation update for unknown language"
		);
		return TranslationTable::new();
	};

	update
		.iter()
		.map(|(key, value)| {
			let previous = existing.get(key);
			let values = (0..language_codes.len())
				.map(|position| {
					if position == index {
						Some(value.clone())
					} else {
						previous
							.and_then(|values| values.get(position))
							.cloned()
							.flatten()
					}
				})
				.collect();
			(key.clone(), values)
		})
		.collect()
}

/// Returns `existing` with every row of `update` written over it.
pub fn merge_tables(existing: &TranslationTable, update: TranslationTable) -> TranslationTable {
	let mut merged = existing.clone();
	merged.extend(update);
	merged
}

/// Flattens a nested multi-language translation document.
///
/// Arrays are leaves and hold one value per language; nested objects join
/// their keys with `.`. Strings inside arrays are kept, `null` marks a missing
/// translation and other values are stringified. A string where an array is
/// expected is taken as the value of the first language.
pub fn flatten_translations(document: &serde_json::Value) -> TranslationTable {
	let mut table = TranslationTable::new();
	flatten_into(document, String::new(), &mut |key, leaf| {
		let values = match leaf {
			serde_json::Value::Array(items) => items.iter().map(leaf_text).collect(),
			other => vec![leaf_text(other)],
		};
		table.insert(key, values);
	});
	table
}

/// Flattens a nested single-language translation document.
///
/// Nested objects join their keys with `.`; `null` leaves are skipped and
/// other scalars are stringified.
pub fn flatten_single_language(document: &serde_json::Value) -> FlatTranslations {
	let mut flat = FlatTranslations::new();
	flatten_into(document, String::new(), &mut |key, leaf| {
		if let Some(text) = leaf_text(leaf) {
			flat.insert(key, text);
		}
	});
	flat
}

fn flatten_into(
	value: &serde_json::Value,
	prefix: String,
	emit: &mut dyn FnMut(String, &serde_json::Value),
) {
	match value {
		serde_json::Value::Object(map) => {
			for (key, child) in map {
				let path = if prefix.is_empty() {
					key.clone()
				} else {
					format!("{prefix}.{key}")
				};
				flatten_into(child, path, emit);
			}
		}
		leaf if !prefix.is_empty() => emit(prefix, leaf),
		_ => {}
	}
}

fn leaf_text(value: &serde_json::Value) -> Option<String> {
	match value {
		serde_json::Value::Null => None,
		serde_json::Value::String(text) => Some(text.clone()),
		other => Some(other.to_string()),
	}
}
