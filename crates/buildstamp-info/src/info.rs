// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::InfoError;

/// Version shown when a binary was built without a release version.
pub const DEVEL_VERSION: &str = "(devel)";

/// Placeholder shown for metadata that was not captured at build time.
pub const NOT_AVAILABLE: &str = "N/A";

/// Presentation metadata that travels with an [`Info`] but is never printed
/// as data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
	/// Display name of the CLI, used by the styled header.
	pub cli_name: String,
}

/// Snapshot of build and version metadata for a program.
///
/// Serializes with camelCase keys. `extraFields` is omitted when unset and
/// `meta` is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
	pub version: String,
	pub git_commit: String,
	pub build_date: String,
	pub commit_date: String,
	pub dirty_build: bool,
	pub rust_version: String,
	pub compiler: String,
	pub platform: String,

	#[serde(skip)]
	pub meta: Meta,

	/// Caller-defined payload, exposed to templates as `extraFields`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extra_fields: Option<Value>,
}

impl Info {
	/// Create an `Info` carrying only a version.
	pub fn new(version: impl Into<String>) -> Self {
		Self {
			version: version.into(),
			..Self::default()
		}
	}

	pub fn with_git_commit(mut self, git_commit: impl Into<String>) -> Self {
		self.git_commit = git_commit.into();
		self
	}

	pub fn with_build_date(mut self, build_date: impl Into<String>) -> Self {
		self.build_date = build_date.into();
		self
	}

	pub fn with_commit_date(mut self, commit_date: impl Into<String>) -> Self {
		self.commit_date = commit_date.into();
		self
	}

	pub fn with_dirty_build(mut self, dirty_build: bool) -> Self {
		self.dirty_build = dirty_build;
		self
	}

	pub fn with_rust_version(mut self, rust_version: impl Into<String>) -> Self {
		self.rust_version = rust_version.into();
		self
	}

	pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
		self.compiler = compiler.into();
		self
	}

	pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
		self.platform = platform.into();
		self
	}

	pub fn with_cli_name(mut self, cli_name: impl Into<String>) -> Self {
		self.meta.cli_name = cli_name.into();
		self
	}

	/// Attach an arbitrary caller structure as extra fields.
	///
	/// The payload must serialize to a map so its keys can be addressed
	/// from templates.
	pub fn with_extra_fields<T: Serialize>(mut self, fields: T) -> Result<Self, InfoError> {
		let value = serde_json::to_value(fields)?;
		match value {
			Value::Object(_) => {
				self.extra_fields = Some(value);
				Ok(self)
			}
			other => Err(InfoError::ExtraFieldsNotAMap {
				kind: value_kind(&other),
			}),
		}
	}

	/// Fill empty fields with display defaults.
	///
	/// An empty version becomes [`DEVEL_VERSION`], every other empty string
	/// becomes [`NOT_AVAILABLE`].
	pub fn normalized(mut self) -> Self {
		if self.version.trim().is_empty() {
			self.version = DEVEL_VERSION.to_string();
		}
		for field in [
			&mut self.git_commit,
			&mut self.build_date,
			&mut self.commit_date,
			&mut self.rust_version,
			&mut self.compiler,
			&mut self.platform,
		] {
			if field.trim().is_empty() {
				*field = NOT_AVAILABLE.to_string();
			}
		}
		self
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
