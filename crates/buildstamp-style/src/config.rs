// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Formatting policy and layout for the styled renderer.
//!
//! A [`Config`] is loaded once, usually from a TOML file, and then held
//! read-only by a [`Render`](crate::Render). Every key is optional:
//!
//! ```toml
//! [formatting]
//! color = "auto"
//!
//! [formatting.header]
//! color = "cyan"
//! bold = true
//! name = "mycli"
//! prefix = "> "
//!
//! [formatting.date]
//! enable_humanized_suffix = false
//!
//! [layout]
//! raw = "{{ header() }} {{ version }}"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable naming a style file for [`Config::from_env`].
pub const STYLE_ENV: &str = "BUILDSTAMP_STYLE";

/// Layout used when no other is configured.
///
/// Fields come from the serialized input; `extraFields` entries are listed
/// after the built-in fields in key order.
pub const DEFAULT_LAYOUT: &str = r#"{{ repeatMax(62, "─", header() ~ " ") }}

  {{ repeatMax(15, " ", key("Version")) }}{{ version | val }}
  {{ repeatMax(15, " ", key("Git Commit")) }}{{ gitCommit | commit | val }}
  {{ repeatMax(15, " ", key("Build Date")) }}{{ buildDate | fmtTime | val }}
  {{ repeatMax(15, " ", key("Commit Date")) }}{{ commitDate | fmtTime | val }}
  {{ repeatMax(15, " ", key("Dirty Build")) }}{{ dirtyBuild | fmtBool | val }}
  {{ repeatMax(15, " ", key("Rust Version")) }}{{ rustVersion | val }}
  {{ repeatMax(15, " ", key("Compiler")) }}{{ compiler | val }}
  {{ repeatMax(15, " ", key("Platform")) }}{{ platform | val }}
{%- for name, value in extraFields | default({}) | dictsort %}
  {{ repeatMax(15, " ", key(name)) }}{{ value | val }}
{%- endfor %}
"#;

/// Complete styled-renderer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	pub formatting: Formatting,
	pub layout: Layout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formatting {
	/// Whether ANSI escapes are emitted at all.
	pub color: ColorChoice,
	pub header: HeaderFormatting,
	pub date: DateFormatting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderFormatting {
	pub color: Color,
	pub bold: bool,
	/// Program name shown in the header. Derived from `argv[0]` when empty.
	pub name: String,
	pub prefix: String,
}

impl Default for HeaderFormatting {
	fn default() -> Self {
		Self {
			color: Color::Magenta,
			bold: true,
			name: String::new(),
			prefix: "▓▓▓ ".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatting {
	/// Append a relative time such as `(3 days ago)` to formatted dates.
	pub enable_humanized_suffix: bool,
}

impl Default for DateFormatting {
	fn default() -> Self {
		Self {
			enable_humanized_suffix: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
	/// Template text, in minijinja syntax.
	pub raw: String,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			raw: DEFAULT_LAYOUT.to_string(),
		}
	}
}

impl Config {
	/// Load a style file, falling back to defaults for missing keys.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		let config: Config = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source,
		})?;
		config.validate()?;

		tracing::debug!(path = %path.display(), "loaded style config");
		Ok(config)
	}

	/// Load the style file named by [`STYLE_ENV`], or the defaults when the
	/// variable is unset or empty.
	pub fn from_env() -> Result<Self, ConfigError> {
		match std::env::var_os(STYLE_ENV) {
			Some(path) if !path.is_empty() => Self::from_file(path),
			_ => Ok(Self::default()),
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.layout.raw.trim().is_empty() {
			return Err(ConfigError::validation("layout.raw must not be empty"));
		}
		Ok(())
	}
}

/// When to emit ANSI escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
	/// Follow terminal detection and `NO_COLOR` / `CLICOLOR`.
	#[default]
	Auto,
	Always,
	Never,
}

impl ColorChoice {
	pub(crate) fn apply(self, style: Style) -> Style {
		match self {
			ColorChoice::Auto => style,
			ColorChoice::Always => style.force_styling(true),
			ColorChoice::Never => style.force_styling(false),
		}
	}
}

/// Named foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
	Default,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	White,
	DarkGray,
	LightRed,
	LightGreen,
	LightYellow,
	LightBlue,
	LightMagenta,
	LightCyan,
	LightWhite,
}

impl Color {
	const NAMES: &'static [(&'static str, Color)] = &[
		("default", Color::Default),
		("black", Color::Black),
		("red", Color::Red),
		("green", Color::Green),
		("yellow", Color::Yellow),
		("blue", Color::Blue),
		("magenta", Color::Magenta),
		("cyan", Color::Cyan),
		("white", Color::White),
		("dark-gray", Color::DarkGray),
		("light-red", Color::LightRed),
		("light-green", Color::LightGreen),
		("light-yellow", Color::LightYellow),
		("light-blue", Color::LightBlue),
		("light-magenta", Color::LightMagenta),
		("light-cyan", Color::LightCyan),
		("light-white", Color::LightWhite),
	];

	pub fn name(self) -> &'static str {
		Self::NAMES
			.iter()
			.find(|(_, color)| *color == self)
			.map(|(name, _)| *name)
			.unwrap_or("default")
	}

	/// Every named color, in style-file order.
	pub fn all() -> impl Iterator<Item = Color> {
		Self::NAMES.iter().map(|(_, color)| *color)
	}

	/// Name under which layouts call this color, e.g. `darkGray`.
	pub fn template_name(self) -> String {
		let mut parts = self.name().split('-');
		let mut out = parts.next().unwrap_or_default().to_string();
		for part in parts {
			let mut chars = part.chars();
			if let Some(first) = chars.next() {
				out.extend(first.to_uppercase());
				out.push_str(chars.as_str());
			}
		}
		out
	}

	/// Apply this color to the foreground of `style`.
	pub fn paint(self, style: Style) -> Style {
		match self {
			Color::Default => style,
			Color::Black => style.black(),
			Color::Red => style.red(),
			Color::Green => style.green(),
			Color::Yellow => style.yellow(),
			Color::Blue => style.blue(),
			Color::Magenta => style.magenta(),
			Color::Cyan => style.cyan(),
			Color::White => style.white(),
			Color::DarkGray => style.black().bright(),
			Color::LightRed => style.red().bright(),
			Color::LightGreen => style.green().bright(),
			Color::LightYellow => style.yellow().bright(),
			Color::LightBlue => style.blue().bright(),
			Color::LightMagenta => style.magenta().bright(),
			Color::LightCyan => style.cyan().bright(),
			Color::LightWhite => style.white().bright(),
		}
	}
}

/// Unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
	type Err = UnknownColor;

	/// Case-insensitive; `_`, `-` and spaces are interchangeable, so
	/// `DarkGray`, `dark_gray` and `dark-gray` are the same color.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted: String = s
			.trim()
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.flat_map(char::to_lowercase)
			.collect();
		Self::NAMES
			.iter()
			.find(|(name, _)| name.replace('-', "") == wanted)
			.map(|(_, color)| *color)
			.ok_or_else(|| UnknownColor(s.to_string()))
	}
}

impl TryFrom<String> for Color {
	type Error = UnknownColor;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.name().to_string()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
