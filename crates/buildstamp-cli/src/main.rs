// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::Parser;
use tracing_subscriber::EnvFilter;

use buildstamp_cli::VersionArgs;

/// Print build information for this binary.
#[derive(Debug, Parser)]
#[command(name = "buildstamp", version)]
struct Cli {
	#[command(flatten)]
	args: VersionArgs,
}

fn main() -> anyhow::Result<()> {
	// stdout carries only the printed info
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let info = buildstamp_cli::build_info();
	tracing::debug!(version = %info.version, output = %cli.args.output, "printing own build info");

	let mut stdout = std::io::stdout().lock();
	buildstamp_cli::run(&cli.args, &info, &mut stdout)
}
