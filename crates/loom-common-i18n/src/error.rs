// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for translation configuration.

use thiserror::Error;

/// Errors raised while configuring translations.
///
/// Lookups, templating and table reshaping never fail; only configuration
/// does.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("invalid option {option}: {reason}")]
	InvalidOption {
		option: &'static str,
		reason: String,
	},

	#[error("config section not found: {0}")]
	MissingConfigSection(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for translation configuration.
pub type Result<T> = std::result::Result<T, I18nError>;
