// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Printers for build information.
//!
//! Each [`Printer`] writes an [`Info`] to any [`std::io::Write`] sink:
//! [`Short`] (version only), [`Json`], [`Yaml`] and [`Pretty`] (styled
//! layout via `buildstamp-style`). [`VersionPrinter`] picks one by
//! [`OutputFormat`].
//!
//! Enable the `clap` feature to use [`OutputFormat`] as a `clap::ValueEnum`.

pub mod error;
mod format;
mod printer;

use std::io::Write;

pub use buildstamp_info::Info;
use buildstamp_style::Render;

pub use error::{PrintError, UnknownFormat};
pub use format::OutputFormat;
pub use printer::{Json, Pretty, Printer, Short, Yaml};

/// Dispatches to the printer matching an [`OutputFormat`].
#[derive(Debug, Clone, Default)]
pub struct VersionPrinter {
	pretty: Pretty,
}

impl VersionPrinter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use `render` for [`OutputFormat::Pretty`].
	pub fn with_render(render: Render) -> Self {
		Self {
			pretty: Pretty::new(render),
		}
	}

	pub fn printer(&self, format: OutputFormat) -> &dyn Printer {
		match format {
			OutputFormat::Pretty => &self.pretty,
			OutputFormat::Json => &Json,
			OutputFormat::Yaml => &Yaml,
			OutputFormat::Short => &Short,
		}
	}

	pub fn print_info(
		&self,
		format: OutputFormat,
		info: Option<&Info>,
		out: &mut dyn Write,
	) -> Result<(), PrintError> {
		tracing::debug!(%format, present = info.is_some(), "printing build info");
		self.printer(format).print(info, out)
	}
}
