// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Style configuration and rendering error types.

use std::path::PathBuf;

/// Errors that can occur while loading a style configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// I/O error reading the style file
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Validation error
	#[error("Validation error: {0}")]
	Validation(String),
}

impl ConfigError {
	/// Create a validation error
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}
}

/// Errors that can occur while rendering a layout.
///
/// Neither variant carries partial output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The layout text is not a valid template
	#[error("failed to parse layout template: {0}")]
	Parse(#[source] minijinja::Error),

	/// The template failed while executing against the input
	#[error("failed to execute layout template: {0}")]
	Execute(#[source] minijinja::Error),
}
