// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Warning sink for non-fatal translation problems.

use std::fmt;

/// Non-fatal problems surfaced while localizing a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
	/// A translation embedded structured values next to text containing HTML.
	UnsupportedMixedMarkup,
}

impl Warning {
	pub fn message(&self) -> &'static str {
		match self {
			Warning::UnsupportedMixedMarkup => {
				"HTML tags in the translation string are not supported when passing structured values as arguments to the translation."
			}
		}
	}
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

/// Receives warnings from the localization functions.
pub trait Diagnostics {
	fn warn(&self, warning: Warning);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
	fn warn(&self, warning: Warning) {
		tracing::warn!(warning = ?warning, "{}", warning.message());
	}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
	fn warn(&self, warning: Warning) {
		(**self).warn(warning)
	}
}
