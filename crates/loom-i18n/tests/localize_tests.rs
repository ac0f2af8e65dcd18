// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};
use std::thread;

use loom_common_i18n::{
	Diagnostics, I18nError, Language, LocalizeOptions, Localized, TemplateData, TranslateOptions,
	Value, Warning,
};
use loom_i18n::{InitializePayload, Localize};
use proptest::prelude::*;
use serde_json::json;

#[derive(Clone, Default)]
struct RecordingDiagnostics {
	warnings: Arc<Mutex<Vec<Warning>>>,
}

impl Diagnostics for RecordingDiagnostics {
	fn warn(&self, warning: Warning) {
		self.warnings.lock().unwrap().push(warning);
	}
}

fn no_data() -> TemplateData {
	TemplateData::new()
}

fn payload() -> InitializePayload {
	InitializePayload::new(["en", "fr"])
		.with_translation(json!({
			"title": ["<b>Welcome</b>", "<b>Bienvenue</b>"],
			"profile": {
				"link": ["See ${link}", "Voir ${link}"],
				"bold_link": ["<b>See</b> ${link}", null]
			}
		}))
		.with_options(LocalizeOptions::new().without_static_markup())
}

#[test]
fn test_config_document_round_trip() {
	let document = json!({
		"app": {
			"i18n": {
				"languages": ["en", {"code": "fr", "name": "Français"}],
				"translation": {"greeting": ["Hi ${name}", "Salut ${name}"]},
				"options": {"renderToStaticMarkup": false, "defaultLanguage": "fr"}
			}
		}
	});

	let localize = Localize::from_config(&document, "app.i18n").unwrap();
	let data: TemplateData = TemplateData::new().with("name", "Ada");

	assert_eq!(localize.active_language().map(|l| l.code.as_str()), Some("fr"));
	assert_eq!(
		localize.languages().get("fr").and_then(|l| l.name.as_deref()),
		Some("Français")
	);
	assert_eq!(
		localize
			.translate("greeting", &data, &TranslateOptions::new())
			.as_str(),
		Some("Salut Ada")
	);
}

#[test]
fn test_config_with_invalid_hook_fails() {
	let document = json!({
		"languages": ["en"],
		"options": {"renderToStaticMarkup": false, "onMissingTranslation": "not a function"}
	});

	let err = Localize::from_config(&document, "").err().unwrap();

	assert!(matches!(
		err,
		I18nError::InvalidOption {
			option: "onMissingTranslation",
			..
		}
	));
}

#[test]
fn test_config_callbacks_attached_in_code() {
	let document = json!({"languages": ["en", "fr"], "options": {"defaultLanguage": "en"}});
	let mut payload = InitializePayload::from_config(&document, "").unwrap();
	payload.options = payload
		.options
		.with_render_to_static_markup(|children| format!("<p>{children}</p>"));

	let mut localize = Localize::initialize(payload).unwrap();
	assert!(localize.add_default_translation("intro", Some("Hello"), &TranslateOptions::new()));

	assert_eq!(
		localize.translations_for_language("en").get("intro"),
		Some(&Some("<p>Hello</p>".to_string()))
	);
	assert_eq!(
		localize.translations_for_language("fr").get("intro"),
		Some(&None)
	);
}

#[test]
fn test_markup_requires_opt_in() {
	let localize = Localize::initialize(payload()).unwrap();
	let data: TemplateData = TemplateData::new();

	assert_eq!(
		localize.translate("title", &data, &TranslateOptions::new()),
		Localized::Text("<b>Welcome</b>".to_string())
	);
	assert_eq!(
		localize.translate(
			"title",
			&data,
			&TranslateOptions::new().with_render_inner_html(true)
		),
		Localized::Markup("<b>Welcome</b>".to_string())
	);
}

#[test]
fn test_global_render_inner_html() {
	let payload = payload().with_options(
		LocalizeOptions::new()
			.without_static_markup()
			.with_render_inner_html(true),
	);
	let localize = Localize::initialize(payload).unwrap();

	assert_eq!(
		localize.translate("title", &no_data(), &TranslateOptions::new()),
		Localized::Markup("<b>Welcome</b>".to_string())
	);
}

#[test]
fn test_nested_keys_with_embedded_elements() {
	let diagnostics = RecordingDiagnostics::default();
	let localize = Localize::with_diagnostics(payload(), diagnostics.clone()).unwrap();
	let link = json!({"type": "a", "href": "/profile"});
	let data = TemplateData::new().with("link", Value::element(link.clone()));

	let options = TranslateOptions::new().with_language("fr");
	let localized = localize.translate("profile.link", &data, &options);

	assert_eq!(
		localized,
		Localized::Fragment(vec![Value::Text("Voir ".to_string()), Value::Element(link)])
	);
	assert!(diagnostics.warnings.lock().unwrap().is_empty());
}

#[test]
fn test_mixed_markup_and_elements_warns() {
	let diagnostics = RecordingDiagnostics::default();
	let localize = Localize::with_diagnostics(payload(), diagnostics.clone()).unwrap();
	let data = TemplateData::new().with("link", Value::element(json!({"type": "a"})));

	let localized = localize.translate("profile.bold_link", &data, &TranslateOptions::new());

	assert!(localized.is_empty());
	assert_eq!(
		*diagnostics.warnings.lock().unwrap(),
		vec![Warning::UnsupportedMixedMarkup]
	);
}

#[test]
fn test_global_missing_translation_hook() {
	let payload = payload().with_options(
		LocalizeOptions::new()
			.without_static_markup()
			.with_on_missing_translation(|missing| {
				format!("{} ({})", missing.default_translation, missing.translation_id)
			}),
	);
	let localize = Localize::initialize(payload).unwrap();

	let localized = localize.translate(
		"profile.bold_link",
		&no_data(),
		&TranslateOptions::new().with_language("fr"),
	);

	assert_eq!(
		localized.as_str(),
		Some("Missing translationId: profile.bold_link for language: fr (profile.bold_link)")
	);
}

#[test]
fn test_translate_many() {
	let localize = Localize::initialize(payload()).unwrap();
	let data: TemplateData = TemplateData::new();

	let translations = localize.translate_many(&["title", "nope"], &data, &TranslateOptions::new());

	assert_eq!(translations.len(), 2);
	assert_eq!(translations["title"].as_str(), Some("<b>Welcome</b>"));
	assert_eq!(
		translations["nope"].as_str(),
		Some("Missing translationId: nope for language: en")
	);
}

#[test]
fn test_added_language_receives_translations() {
	let mut localize = Localize::initialize(payload()).unwrap();
	localize.add_language(Language::new("es").with_name("Español"));
	localize.add_translation_for_language(&json!({"title": "<b>Bienvenido</b>"}), "es");
	localize.set_active_language("es");

	assert_eq!(
		localize
			.translate("title", &no_data(), &TranslateOptions::new())
			.as_str(),
		Some("<b>Bienvenido</b>")
	);
	assert_eq!(
		localize.translations().get("title").map(Vec::len),
		Some(3)
	);
}

#[test]
fn test_catalog_is_shareable_across_threads() {
	let localize = Arc::new(Localize::initialize(payload()).unwrap());

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let localize = Arc::clone(&localize);
			thread::spawn(move || {
				localize
					.translate("title", &no_data(), &TranslateOptions::new())
					.as_str()
					.map(str::to_string)
			})
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), Some("<b>Welcome</b>".to_string()));
	}
}

proptest! {
	/// Per-language updates never disturb the other languages' slots.
	#[test]
	fn language_updates_are_isolated(
		key in "[a-z]{1,8}",
		english in "[a-zA-Z ]{0,16}",
		french in "[a-zA-Z ]{0,16}",
	) {
		let mut localize = Localize::initialize(payload()).unwrap();
		let mut english_doc = serde_json::Map::new();
		english_doc.insert(key.clone(), json!(english));
		let mut french_doc = serde_json::Map::new();
		french_doc.insert(key.clone(), json!(french));

		localize.add_translation_for_language(&english_doc.into(), "en");
		localize.add_translation_for_language(&french_doc.into(), "fr");

		prop_assert_eq!(
			localize.translations_for_language("en").get(&key).cloned().flatten(),
			Some(english)
		);
		prop_assert_eq!(
			localize.translations_for_language("fr").get(&key).cloned().flatten(),
			Some(french)
		);
	}
}
