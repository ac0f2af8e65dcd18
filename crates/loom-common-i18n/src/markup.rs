// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML detection and the text/markup decision for resolved translations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{Diagnostics, Warning};
use crate::template::{resolve, Resolved, TemplateData, Value};

static MARKUP: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r#"(&[^\s]*;|</?(?-u:\w)+((\s+(?-u:\w)+(\s*=\s*(?:".*?"|'.*?'|[\^'">\s]+))?)+\s*|\s*)/?>)"#,
	)
	.expect("markup pattern must compile")
});

/// Returns true when `value` contains an HTML entity (`&amp;`) or an
/// opening, closing or self-closing tag.
pub fn contains_markup(value: &str) -> bool {
	MARKUP.is_match(value)
}

/// A translation ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Localized<E = serde_json::Value> {
	/// Literal text, to be escaped by the renderer.
	Text(String),
	/// Text the caller opted to render as raw HTML.
	Markup(String),
	/// Text interleaved with embedded elements.
	Fragment(Vec<Value<E>>),
}

impl<E> Localized<E> {
	pub fn is_empty(&self) -> bool {
		match self {
			Localized::Text(text) | Localized::Markup(text) => text.is_empty(),
			Localized::Fragment(segments) => segments.is_empty(),
		}
	}

	/// Returns the string of a `Text` or `Markup` result.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Localized::Text(text) | Localized::Markup(text) => Some(text),
			Localized::Fragment(_) => None,
		}
	}
}

/// Resolves `translation` against `data` and decides how it should be
/// rendered.
///
/// Plain strings become [`Localized::Markup`] only when `render_inner_html`
/// is set and the string looks like HTML. Embedding elements next to text
/// that contains HTML is not supported: a
/// [`Warning::UnsupportedMixedMarkup`] is reported and the result is empty.
pub fn localize<E, D>(
	translation: &str,
	data: &TemplateData<E>,
	render_inner_html: bool,
	diagnostics: &D,
) -> Localized<E>
where
	E: Clone,
	D: Diagnostics + ?Sized,
{
	match resolve(translation, data) {
		Resolved::Text(text) => {
			if render_inner_html && contains_markup(&text) {
				Localized::Markup(text)
			} else {
				Localized::Text(text)
			}
		}
		Resolved::Segments(segments) => {
			let has_markup = segments
				.iter()
				.filter_map(Value::as_text)
				.any(contains_markup);
			if has_markup {
				diagnostics.warn(Warning::UnsupportedMixedMarkup);
				return Localized::Text(String::new());
			}
			Localized::Fragment(segments)
		}
	}
}
