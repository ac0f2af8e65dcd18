// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dotted-path lookup into JSON documents.

use serde_json::Value;

/// Looks up `path` (e.g. `"options.language"`) in `object`.
///
/// Empty segments are ignored, objects are indexed by key and arrays by
/// position. The walk stops at the first value that is missing or falsy
/// (`null`, `false`, `0`, `""`) and returns `fallback`; this includes the
/// final value, so a stored `0` reads back as `fallback`.
pub fn get_path<'a>(object: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
	let mut current = object;

	for segment in path.split('.').filter(|segment| !segment.is_empty()) {
		let next = match current {
			Value::Object(map) => map.get(segment),
			Value::Array(items) => segment
				.parse::<usize>()
				.ok()
				.and_then(|index| items.get(index)),
			_ => None,
		};

		match next {
			Some(value) if is_truthy(value) => current = value,
			_ => return fallback,
		}
	}

	current
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
