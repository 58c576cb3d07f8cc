// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Collecting an [`Info`](crate::Info) from compile-time build metadata.

/// Build an [`Info`](crate::Info) from a `shadow-rs` generated module.
///
/// The module is resolved in the calling crate, so the snapshot describes
/// the binary being built rather than this library. The calling crate needs
/// `shadow-rs` as both a dependency and a build dependency, with
/// `shadow_rs::new()` in its build script.
#[macro_export]
macro_rules! from_build {
	($($build:ident)::+) => {
		$crate::Info::new($($build)::+::PKG_VERSION)
			.with_git_commit($crate::commit_or_unknown($($build)::+::COMMIT_HASH))
			.with_build_date($($build)::+::BUILD_TIME_3339)
			.with_commit_date($($build)::+::COMMIT_DATE_3339)
			.with_dirty_build(!$($build)::+::GIT_CLEAN)
			.with_rust_version($crate::toolchain_version($($build)::+::RUST_VERSION))
			.with_compiler("rustc")
			.with_platform($($build)::+::BUILD_TARGET)
			.with_cli_name($($build)::+::PROJECT_NAME)
	};
}

/// Extract the bare version number from `rustc --version` output.
///
/// `"rustc 1.80.0 (051478957 2024-07-21)"` becomes `"1.80.0"`. Input that
/// does not start with `rustc` is returned trimmed.
pub fn toolchain_version(raw: &str) -> &str {
	let raw = raw.trim();
	match raw.strip_prefix("rustc ") {
		Some(rest) => rest.split_whitespace().next().unwrap_or(rest),
		None => raw,
	}
}

/// Builds outside a git checkout have no commit hash.
pub fn commit_or_unknown(commit: &str) -> &str {
	if commit.trim().is_empty() {
		"unknown"
	} else {
		commit
	}
}
