// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization options and their validation.
//!
//! Options can be assembled in code or deserialized from a JSON document
//! (camelCase keys). Callback slots accept functions in code; a document can
//! only switch them off with `false`, and any other value is kept so that
//! [`validate`] can reject it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::error::{I18nError, Result};

/// Renders default children into the string stored as their translation.
pub type RenderToStaticMarkupFn = dyn Fn(&str) -> String + Send + Sync;

/// Produces the text shown for a missing translation.
pub type MissingTranslationFn = dyn Fn(&MissingTranslation<'_>) -> String + Send + Sync;

/// Details passed to a missing translation hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingTranslation<'a> {
	pub translation_id: &'a str,
	pub language_code: &'a str,
	/// The text that would be shown without a hook.
	pub default_translation: &'a str,
}

/// A configurable callback slot.
pub enum Callback<F: ?Sized> {
	Function(Arc<F>),
	Flag(bool),
	/// A configuration value that is neither a function nor a flag.
	Other(serde_json::Value),
}

impl<F: ?Sized> Callback<F> {
	pub fn function(&self) -> Option<&Arc<F>> {
		match self {
			Callback::Function(function) => Some(function),
			_ => None,
		}
	}

	pub fn is_function(&self) -> bool {
		matches!(self, Callback::Function(_))
	}

	pub fn is_disabled(&self) -> bool {
		matches!(self, Callback::Flag(false))
	}

	fn kind(&self) -> String {
		match self {
			Callback::Function(_) => "function".to_string(),
			Callback::Flag(flag) | Callback::Other(serde_json::Value::Bool(flag)) => {
				format!("boolean {flag}")
			}
			Callback::Other(serde_json::Value::String(_)) => "string".to_string(),
			Callback::Other(serde_json::Value::Number(_)) => "number".to_string(),
			Callback::Other(serde_json::Value::Array(_)) => "array".to_string(),
			Callback::Other(serde_json::Value::Object(_)) => "object".to_string(),
			Callback::Other(serde_json::Value::Null) => "null".to_string(),
		}
	}
}

impl<F: ?Sized> Clone for Callback<F> {
	fn clone(&self) -> Self {
		match self {
			Callback::Function(function) => Callback::Function(Arc::clone(function)),
			Callback::Flag(flag) => Callback::Flag(*flag),
			Callback::Other(value) => Callback::Other(value.clone()),
		}
	}
}

impl<F: ?Sized> fmt::Debug for Callback<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Callback::Function(_) => f.write_str("Function(..)"),
			Callback::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
			Callback::Other(value) => f.debug_tuple("Other").field(value).finish(),
		}
	}
}

impl<'de, F: ?Sized> Deserialize<'de> for Callback<F> {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match serde_json::Value::deserialize(deserializer)? {
			serde_json::Value::Bool(flag) => Callback::Flag(flag),
			other => Callback::Other(other),
		})
	}
}

/// Options applied to every translation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizeOptions {
	/// Renders default children; must be a function or `false`.
	pub render_to_static_markup: Option<Callback<RenderToStaticMarkupFn>>,
	/// Hook for missing translations; must be a function when set.
	pub on_missing_translation: Option<Callback<MissingTranslationFn>>,
	/// Skip registering default children as translations.
	pub ignore_translate_children: bool,
	pub default_language: Option<String>,
	/// Render translations containing HTML as markup.
	pub render_inner_html: bool,
}

impl LocalizeOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_render_to_static_markup<F>(mut self, render: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		self.render_to_static_markup = Some(Callback::Function(Arc::new(render)));
		self
	}

	/// Disables static markup rendering of default children.
	pub fn without_static_markup(mut self) -> Self {
		self.render_to_static_markup = Some(Callback::Flag(false));
		self
	}

	pub fn with_on_missing_translation<F>(mut self, hook: F) -> Self
	where
		F: Fn(&MissingTranslation<'_>) -> String + Send + Sync + 'static,
	{
		self.on_missing_translation = Some(Callback::Function(Arc::new(hook)));
		self
	}

	pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
		self.default_language = Some(code.into());
		self
	}

	pub fn with_render_inner_html(mut self, enabled: bool) -> Self {
		self.render_inner_html = enabled;
		self
	}

	pub fn with_ignore_translate_children(mut self, ignore: bool) -> Self {
		self.ignore_translate_children = ignore;
		self
	}

	pub fn render_to_static_markup(&self) -> Option<&Arc<RenderToStaticMarkupFn>> {
		self.render_to_static_markup.as_ref().and_then(Callback::function)
	}

	pub fn on_missing_translation(&self) -> Option<&Arc<MissingTranslationFn>> {
		self.on_missing_translation.as_ref().and_then(Callback::function)
	}
}

/// Per-call overrides for a single translation.
///
/// Deserializes from camelCase keys. The missing translation hook can only
/// be attached in code.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateOptions {
	/// Translate into this language instead of the active one.
	pub language: Option<String>,
	pub render_inner_html: Option<bool>,
	#[serde(skip)]
	pub on_missing_translation: Option<Arc<MissingTranslationFn>>,
	pub ignore_translate_children: Option<bool>,
}

impl TranslateOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language(mut self, code: impl Into<String>) -> Self {
		self.language = Some(code.into());
		self
	}

	pub fn with_render_inner_html(mut self, enabled: bool) -> Self {
		self.render_inner_html = Some(enabled);
		self
	}

	pub fn with_on_missing_translation<F>(mut self, hook: F) -> Self
	where
		F: Fn(&MissingTranslation<'_>) -> String + Send + Sync + 'static,
	{
		self.on_missing_translation = Some(Arc::new(hook));
		self
	}

	pub fn with_ignore_translate_children(mut self, ignore: bool) -> Self {
		self.ignore_translate_children = Some(ignore);
		self
	}
}

impl fmt::Debug for TranslateOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TranslateOptions")
			.field("language", &self.language)
			.field("render_inner_html", &self.render_inner_html)
			.field(
				"on_missing_translation",
				&self.on_missing_translation.as_ref().map(|_| ".."),
			)
			.field("ignore_translate_children", &self.ignore_translate_children)
			.finish()
	}
}

/// Checks the callback slots of `options` and hands them back unchanged.
///
/// `onMissingTranslation` must be a function when present.
/// `renderToStaticMarkup` must be a function or explicitly `false`.
pub fn validate(options: LocalizeOptions) -> Result<LocalizeOptions> {
	if let Some(hook) = &options.on_missing_translation {
		if !hook.is_function() {
			return Err(I18nError::InvalidOption {
				option: "onMissingTranslation",
				reason: format!("expected a function, got {}", hook.kind()),
			});
		}
	}

	match &options.render_to_static_markup {
		Some(render) if render.is_function() || render.is_disabled() => {}
		Some(render) => {
			return Err(I18nError::InvalidOption {
				option: "renderToStaticMarkup",
				reason: format!("expected a function or false, got {}", render.kind()),
			});
		}
		None => {
			return Err(I18nError::InvalidOption {
				option: "renderToStaticMarkup",
				reason: "expected a function or false, got nothing".to_string(),
			});
		}
	}

	Ok(options)
}
