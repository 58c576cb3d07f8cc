// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reusable `version` command for clap-based CLIs.
//!
//! Flatten [`VersionArgs`] into a subcommand and hand it to [`run`] with the
//! caller's own [`Info`]:
//!
//! ```ignore
//! #[derive(clap::Subcommand)]
//! enum Command {
//! 	/// Print version information
//! 	Version(buildstamp_cli::VersionArgs),
//! }
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use buildstamp_info::Info;
use buildstamp_printer::{OutputFormat, VersionPrinter};
use buildstamp_style::{Config, ConfigError, Render, STYLE_ENV};

shadow_rs::shadow!(build);

/// Platform string in `{os}/{arch}` format, e.g. "linux/x86_64".
///
/// Derived at compile time from target configuration.
pub const PLATFORM: &str = env!("BUILDSTAMP_PLATFORM");

/// Arguments for a `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
	/// Output format
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
	pub output: OutputFormat,

	/// Style file for pretty output
	#[arg(long, value_name = "PATH", env = STYLE_ENV)]
	pub style: Option<PathBuf>,
}

impl VersionArgs {
	/// Style from `--style` (or its environment variable), else defaults.
	pub fn style_config(&self) -> Result<Config, ConfigError> {
		match &self.style {
			Some(path) => Config::from_file(path),
			None => Config::from_env(),
		}
	}
}

/// Print `info` as requested by `args`.
///
/// Empty fields are shown with display defaults. The style file is only
/// read for pretty output.
pub fn run(args: &VersionArgs, info: &Info, out: &mut dyn Write) -> anyhow::Result<()> {
	let printer = match args.output {
		OutputFormat::Pretty => {
			let config = args
				.style_config()
				.context("failed to load style configuration")?;
			VersionPrinter::with_render(Render::with_config(config))
		}
		_ => VersionPrinter::new(),
	};

	let info = info.clone().normalized();
	printer
		.print_info(args.output, Some(&info), out)
		.with_context(|| format!("failed to print {} output", args.output))?;
	Ok(())
}

/// Build information for this binary.
pub fn build_info() -> Info {
	buildstamp_info::from_build!(build).with_platform(PLATFORM)
}
