// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `${name}` placeholder templating.
//!
//! A template is split on every `${...}` token. Tokens naming a key of the
//! supplied [`TemplateData`] are replaced by that value, everything else is
//! kept verbatim, including placeholders nobody provided a value for.
//!
//! Values keep their type while substituted. When any of them is an
//! [`Value::Element`] the template resolves to the ordered segments instead
//! of a flat string, so callers can embed structured values inline.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
	RegexBuilder::new(r"\$\{\s*[^\s}]+\s*\}")
		.case_insensitive(true)
		.multi_line(true)
		.build()
		.expect("placeholder pattern must compile")
});

/// A value that can be interpolated into a template.
///
/// `E` is the opaque structured type embedded by [`Value::Element`]; it
/// defaults to a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<E = serde_json::Value> {
	Text(String),
	Number(f64),
	Bool(bool),
	Element(E),
}

impl<E> Value<E> {
	pub fn element(element: E) -> Self {
		Value::Element(element)
	}

	pub fn is_element(&self) -> bool {
		matches!(self, Value::Element(_))
	}

	/// Returns the text of a [`Value::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Appends the textual form of a scalar value. Elements have none.
	fn write_text(&self, out: &mut String) {
		match self {
			Value::Text(text) => out.push_str(text),
			Value::Number(number) => out.push_str(&format_number(*number)),
			Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
			Value::Element(_) => {}
		}
	}
}

/// Formats like a JavaScript number: exponent notation below 1e-6 and from
/// 1e21 on, plain decimals in between.
fn format_number(number: f64) -> String {
	if number.is_infinite() {
		return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if number == 0.0 {
		return "0".to_string();
	}
	if number.is_finite() {
		let scientific = format!("{number:e}");
		if let Some((mantissa, exponent)) = scientific.split_once('e') {
			if let Ok(exponent) = exponent.parse::<i32>() {
				if exponent >= 21 {
					return format!("{mantissa}e+{exponent}");
				}
				if exponent <= -7 {
					return format!("{mantissa}e{exponent}");
				}
			}
		}
	}
	number.to_string()
}

impl<E> From<&str> for Value<E> {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl<E> From<String> for Value<E> {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl<E> From<f64> for Value<E> {
	fn from(value: f64) -> Self {
		Value::Number(value)
	}
}

impl<E> From<i64> for Value<E> {
	fn from(value: i64) -> Self {
		Value::Number(value as f64)
	}
}

impl<E> From<i32> for Value<E> {
	fn from(value: i32) -> Self {
		Value::Number(f64::from(value))
	}
}

impl<E> From<bool> for Value<E> {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

/// Interpolation data: named values in insertion order.
///
/// Lookups walk the entries in order and the first matching key wins.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateData<E = serde_json::Value> {
	entries: Vec<(String, Value<E>)>,
}

impl<E> Default for TemplateData<E> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
		}
	}
}

impl<E> TemplateData<E> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`TemplateData::insert`].
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value<E>>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets `key`, replacing an earlier value in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value<E>>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value<E>> {
		self.entries
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<E>)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<E, K, V> FromIterator<(K, V)> for TemplateData<E>
where
	K: Into<String>,
	V: Into<Value<E>>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut data = Self::new();
		for (key, value) in iter {
			data.insert(key, value);
		}
		data
	}
}

impl From<serde_json::Map<String, serde_json::Value>> for TemplateData {
	/// Strings, numbers and booleans become scalars; objects and arrays are
	/// embedded as elements.
	fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
		let mut data = Self::new();
		for (key, value) in map {
			let value = match value {
				serde_json::Value::String(text) => Value::Text(text),
				serde_json::Value::Number(number) => {
					Value::Number(number.as_f64().unwrap_or(f64::NAN))
				}
				serde_json::Value::Bool(flag) => Value::Bool(flag),
				serde_json::Value::Null => Value::Text("null".to_string()),
				structured => Value::Element(structured),
			};
			data.insert(key, value);
		}
		data
	}
}

/// Result of resolving a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<E = serde_json::Value> {
	/// Every segment was textual and they were concatenated.
	Text(String),
	/// At least one segment is an element; segments are kept in order.
	Segments(Vec<Value<E>>),
}

impl<E> Resolved<E> {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Resolved::Text(text) => Some(text),
			Resolved::Segments(_) => None,
		}
	}

	/// Returns the flat string, or `None` when elements are embedded.
	pub fn into_text(self) -> Option<String> {
		match self {
			Resolved::Text(text) => Some(text),
			Resolved::Segments(_) => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Portion<'a> {
	Literal(&'a str),
	Placeholder { token: &'a str, name: &'a str },
}

/// Splits a template into literal runs and placeholder tokens, dropping
/// empty runs.
fn split_placeholders(template: &str) -> Vec<Portion<'_>> {
	let mut portions = Vec::new();
	let mut last = 0;

	for found in PLACEHOLDER.find_iter(template) {
		if found.start() > last {
			portions.push(Portion::Literal(&template[last..found.start()]));
		}
		let token = found.as_str();
		let name = token[2..token.len() - 1].trim();
		portions.push(Portion::Placeholder { token, name });
		last = found.end();
	}

	if last < template.len() {
		portions.push(Portion::Literal(&template[last..]));
	}

	portions
}

/// Resolves `${name}` placeholders in `template` against `data`.
///
/// Never fails: unknown placeholders and malformed syntax stay as literal
/// text. Key comparison is exact, so `${NAME}` does not pick up `name`.
pub fn resolve<E: Clone>(template: &str, data: &TemplateData<E>) -> Resolved<E> {
	if template.is_empty() {
		return Resolved::Text(String::new());
	}

	let segments: Vec<Value<E>> = split_placeholders(template)
		.into_iter()
		.map(|portion| match portion {
			Portion::Literal(text) => Value::Text(text.to_string()),
			Portion::Placeholder { token, name } => data
				.iter()
				.find(|(key, _)| *key == name)
				.map(|(_, value)| value.clone())
				.unwrap_or_else(|| Value::Text(token.to_string())),
		})
		.collect();

	if segments.iter().any(Value::is_element) {
		return Resolved::Segments(segments);
	}

	let mut text = String::with_capacity(template.len());
	for segment in &segments {
		segment.write_text(&mut text);
	}
	Resolved::Text(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn text(template: &str, data: &TemplateData) -> String {
		resolve(template, data)
			.into_text()
			.expect("expected flat text")
	}

	#[test]
	fn test_empty_template_resolves_to_empty_text() {
		let data: TemplateData = TemplateData::new().with("a", "x");
		assert_eq!(resolve("", &data), Resolved::Text(String::new()));
	}

	#[test]
	fn test_plain_text_is_unchanged() {
		assert_eq!(
			text("no placeholder here", &TemplateData::new()),
			"no placeholder here"
		);
	}

	#[test]
	fn test_single_placeholder() {
		let data = TemplateData::new().with("a", "x");
		assert_eq!(text("${a}", &data), "x");
	}

	#[test]
	fn test_whitespace_inside_braces_is_ignored() {
		let data = TemplateData::new().with("a", "x");
		assert_eq!(text("${ a }", &data), "x");
		assert_eq!(text("${a }", &data), "x");
		assert_eq!(text("${\ta\n}", &data), "x");
	}

	#[test]
	fn test_missing_placeholder_stays_literal() {
		assert_eq!(text("${missing}", &TemplateData::new()), "${missing}");
		assert_eq!(
			text("Hi ${ missing }!", &TemplateData::new()),
			"Hi ${ missing }!"
		);
	}

	#[test]
	fn test_key_matching_is_case_sensitive() {
		let data = TemplateData::new().with("name", "Ada");
		assert_eq!(text("${NAME}", &data), "${NAME}");
		assert_eq!(text("${name}", &data), "Ada");
	}

	#[test]
	fn test_case_variants_split_identically() {
		let portions = split_placeholders("a${ name }b${NAME}c${name}");
		assert_eq!(
			portions,
			vec![
				Portion::Literal("a"),
				Portion::Placeholder {
					token: "${ name }",
					name: "name"
				},
				Portion::Literal("b"),
				Portion::Placeholder {
					token: "${NAME}",
					name: "NAME"
				},
				Portion::Literal("c"),
				Portion::Placeholder {
					token: "${name}",
					name: "name"
				},
			]
		);
	}

	#[test]
	fn test_numbers_are_stringified() {
		let data = TemplateData::new().with("a", 1).with("b", 2);
		assert_eq!(text("${a}-${b}", &data), "1-2");

		let data = TemplateData::new().with("n", 1.5).with("z", -0.0);
		assert_eq!(text("${n}/${z}", &data), "1.5/0");
	}

	#[test]
	fn test_number_exponent_notation() {
		assert_eq!(format_number(1e21), "1e+21");
		assert_eq!(format_number(-2.5e30), "-2.5e+30");
		assert_eq!(format_number(1e20), "100000000000000000000");
		assert_eq!(format_number(0.000001), "0.000001");
		assert_eq!(format_number(1.5e-7), "1.5e-7");
		assert_eq!(format_number(f64::NAN), "NaN");
	}

	#[test]
	fn test_bools_are_stringified() {
		let data = TemplateData::new().with("on", true);
		assert_eq!(text("flag=${on}", &data), "flag=true");
	}

	#[test]
	fn test_element_yields_ordered_segments() {
		let element = json!({"type": "strong", "children": "Ada"});
		let data = TemplateData::new()
			.with("a", Value::element(element.clone()))
			.with("b", 2);

		assert_eq!(
			resolve("${a}-${b}", &data),
			Resolved::Segments(vec![
				Value::Element(element),
				Value::Text("-".to_string()),
				Value::Number(2.0),
			])
		);
	}

	#[test]
	fn test_multiline_template() {
		let data = TemplateData::new().with("first", "Ada").with("last", "Lovelace");
		assert_eq!(
			text("First: ${first}\nLast: ${ last }", &data),
			"First: Ada\nLast: Lovelace"
		);
	}

	#[test]
	fn test_malformed_placeholders_are_literal() {
		let data = TemplateData::new().with("a", "x");
		assert_eq!(text("${a", &data), "${a");
		assert_eq!(text("${}", &data), "${}");
		assert_eq!(text("${a b}", &data), "${a b}");
		assert_eq!(text("$a}", &data), "$a}");
	}

	#[test]
	fn test_insert_replaces_in_place() {
		let data: TemplateData = [("a", "first"), ("b", "second"), ("a", "replaced")]
			.into_iter()
			.collect();
		assert_eq!(data.len(), 2);
		assert_eq!(text("${a}", &data), "replaced");
	}

	#[test]
	fn test_substituted_values_are_not_reexpanded() {
		let data = TemplateData::new().with("a", "${b}").with("b", "nope");
		assert_eq!(text("${a}", &data), "${b}");
	}

	#[test]
	fn test_data_from_json_map() {
		let serde_json::Value::Object(map) =
			json!({"name": "Ada", "count": 3, "link": {"href": "/ada"}})
		else {
			unreachable!()
		};
		let data = TemplateData::from(map);

		assert_eq!(data.get("name"), Some(&Value::Text("Ada".to_string())));
		assert_eq!(data.get("count"), Some(&Value::Number(3.0)));
		assert!(data.get("link").is_some_and(Value::is_element));
	}

	proptest! {
		/// Templates without a `$` are returned untouched.
		#[test]
		fn templates_without_placeholders_are_identity(template in "[^$]{0,64}") {
			let data: TemplateData = TemplateData::new().with("a", "x");
			prop_assert_eq!(resolve(&template, &data), Resolved::Text(template.clone()));
		}

		/// Unresolved placeholders survive verbatim.
		#[test]
		fn unknown_placeholders_survive(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
			let template = format!("x ${{{name}}} y");
			prop_assert_eq!(text(&template, &TemplateData::new()), template.clone());
		}

		/// Substituting a known key inserts exactly its value.
		#[test]
		fn known_placeholder_is_replaced(
			name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
			value in "[^$]{0,32}",
			pad in " {0,3}",
		) {
			let data = TemplateData::new().with(name.clone(), value.clone());
			let template = format!("<${{{pad}{name}{pad}}}>");
			prop_assert_eq!(text(&template, &data), format!("<{value}>"));
		}
	}
}
