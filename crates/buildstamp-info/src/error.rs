// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised while building an [`Info`](crate::Info).

/// Errors that can occur when attaching caller data to an `Info`.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
	/// The payload could not be serialized
	#[error("failed to serialize extra fields: {0}")]
	ExtraFields(#[from] serde_json::Error),

	/// The payload serialized to something other than a map
	#[error("extra fields must serialize to a map, got {kind}")]
	ExtraFieldsNotAMap { kind: &'static str },
}
