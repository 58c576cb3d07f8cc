// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Printer error types.

use buildstamp_style::RenderError;

/// Errors that can occur while printing build information.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
	/// Writing to the output sink failed
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// JSON encoding failed
	#[error("failed to encode JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// YAML encoding failed
	#[error("failed to encode YAML: {0}")]
	Yaml(#[from] serde_yaml::Error),

	/// The styled layout failed to render
	#[error(transparent)]
	Render(#[from] RenderError),
}

/// An output format name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format '{0}', expected one of: pretty, json, yaml, short")]
pub struct UnknownFormat(pub String);
