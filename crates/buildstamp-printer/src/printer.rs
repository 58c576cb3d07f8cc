// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;

use buildstamp_info::Info;
use buildstamp_style::Render;

use crate::PrintError;

/// Writes an [`Info`] to a sink in one particular format.
///
/// Every printer writes nothing when `info` is `None`. Sink failures are
/// returned as [`PrintError::Io`] unchanged.
pub trait Printer {
	fn print(&self, info: Option<&Info>, out: &mut dyn Write) -> Result<(), PrintError>;
}

/// Prints only the version.
#[derive(Debug, Clone, Copy, Default)]
pub struct Short;

impl Printer for Short {
	fn print(&self, info: Option<&Info>, out: &mut dyn Write) -> Result<(), PrintError> {
		let Some(info) = info else {
			return Ok(());
		};
		writeln!(out, "{}", info.version)?;
		Ok(())
	}
}

/// Pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Printer for Json {
	fn print(&self, info: Option<&Info>, out: &mut dyn Write) -> Result<(), PrintError> {
		let Some(info) = info else {
			return Ok(());
		};
		let encoded = serde_json::to_string_pretty(info)?;
		writeln!(out, "{encoded}")?;
		Ok(())
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Printer for Yaml {
	fn print(&self, info: Option<&Info>, out: &mut dyn Write) -> Result<(), PrintError> {
		let Some(info) = info else {
			return Ok(());
		};
		let encoded = serde_yaml::to_string(info)?;
		out.write_all(encoded.as_bytes())?;
		Ok(())
	}
}

/// Styled output through a [`Render`].
#[derive(Debug, Clone, Default)]
pub struct Pretty {
	render: Render,
}

impl Pretty {
	pub fn new(render: Render) -> Self {
		Self { render }
	}

	pub fn render(&self) -> &Render {
		&self.render
	}
}

impl Printer for Pretty {
	fn print(&self, info: Option<&Info>, out: &mut dyn Write) -> Result<(), PrintError> {
		let Some(info) = info else {
			return Ok(());
		};

		let config = self.render.config();
		let rendered = if config.formatting.header.name.trim().is_empty()
			&& !info.meta.cli_name.trim().is_empty()
		{
			let mut config = config.clone();
			config.formatting.header.name = info.meta.cli_name.clone();
			Render::with_config(config).render(info)?
		} else {
			self.render.render(info)?
		};

		writeln!(out, "{rendered}")?;
		Ok(())
	}
}
