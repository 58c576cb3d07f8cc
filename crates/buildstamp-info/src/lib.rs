// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and version metadata for command-line tools.
//!
//! [`Info`] is the single snapshot every buildstamp printer works from:
//! version, git commit, build and commit dates, dirty flag, toolchain,
//! compiler and platform, plus an optional caller-defined payload in
//! [`Info::extra_fields`].
//!
//! The [`from_build!`] macro fills an [`Info`] from a `shadow-rs` generated
//! module in the calling crate:
//!
//! ```ignore
//! shadow_rs::shadow!(build);
//!
//! let info = buildstamp_info::from_build!(build);
//! ```

mod collect;
pub mod error;
mod info;

pub use collect::{commit_or_unknown, toolchain_version};
pub use error::InfoError;
pub use info::{Info, Meta, DEVEL_VERSION, NOT_AVAILABLE};
