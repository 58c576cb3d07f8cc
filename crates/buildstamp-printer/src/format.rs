// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use crate::UnknownFormat;

/// Output format selectable on the command line.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
	/// Colorized, aligned layout for humans
	#[default]
	Pretty,
	Json,
	Yaml,
	/// Version string only
	Short,
}

impl OutputFormat {
	pub const ALL: [OutputFormat; 4] = [
		OutputFormat::Pretty,
		OutputFormat::Json,
		OutputFormat::Yaml,
		OutputFormat::Short,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Pretty => "pretty",
			OutputFormat::Json => "json",
			OutputFormat::Yaml => "yaml",
			OutputFormat::Short => "short",
		}
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OutputFormat {
	type Err = UnknownFormat;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim();
		Self::ALL
			.into_iter()
			.find(|format| format.as_str().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| UnknownFormat(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
		assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
		assert_eq!(" Short ".parse::<OutputFormat>().unwrap(), OutputFormat::Short);
	}

	#[test]
	fn unknown_format_lists_accepted_names() {
		let err = "xml".parse::<OutputFormat>().unwrap_err();
		assert_eq!(err, UnknownFormat("xml".to_string()));
		assert!(err.to_string().contains("pretty, json, yaml, short"));
	}

	#[test]
	fn display_round_trips() {
		for format in OutputFormat::ALL {
			assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
		}
	}

	#[test]
	fn default_is_pretty() {
		assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
	}
}
