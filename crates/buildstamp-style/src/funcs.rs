// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Formatting helpers exposed to layout templates.
//!
//! Each helper is a plain function here; [`Render`](crate::Render) wires
//! them into the template environment under their template names
//! (`header`, `key`, `val`, `commit`, `fmtTime`, `fmtBool`, `repeatMax`),
//! plus one helper per named color (`red`, `darkGray`, ...) and `bold`.

use console::Style;
use minijinja::value::ValueKind;
use minijinja::Value;

use crate::config::{Color, ColorChoice, HeaderFormatting};

/// Column width used by [`val`].
pub const VALUE_WIDTH: usize = 37;

/// Number of characters kept by [`commit`].
pub const SHORT_COMMIT_LEN: usize = 7;

/// Applies styles according to the configured [`ColorChoice`].
#[derive(Debug, Clone, Copy)]
pub struct Painter {
	choice: ColorChoice,
}

impl Painter {
	pub fn new(choice: ColorChoice) -> Self {
		Self { choice }
	}

	pub fn paint(&self, style: Style, text: &str) -> String {
		self.choice.apply(style).apply_to(text).to_string()
	}
}

/// Prefix and program name in the header color.
pub fn header(painter: Painter, formatting: &HeaderFormatting, name: &str) -> String {
	let mut style = formatting.color.paint(Style::new());
	if formatting.bold {
		style = style.bold();
	}
	painter.paint(style, &format!("{}{}", formatting.prefix, name))
}

/// Bold dark-gray label.
pub fn key(painter: Painter, label: &str) -> String {
	painter.paint(Style::new().black().bright().bold(), label)
}

/// Left-justify in a [`VALUE_WIDTH`] column, in white. Longer values are
/// kept whole.
pub fn val(painter: Painter, input: &str) -> String {
	painter.paint(
		Style::new().white(),
		&format!("{input:<width$}", width = VALUE_WIDTH),
	)
}

/// Short commit hash: the first [`SHORT_COMMIT_LEN`] characters, trimmed.
pub fn commit(input: &str) -> String {
	input
		.chars()
		.take(SHORT_COMMIT_LEN)
		.collect::<String>()
		.trim()
		.to_string()
}

pub fn fmt_bool(input: bool) -> &'static str {
	if input {
		"yes"
	} else {
		"no"
	}
}

/// `input` followed by `filler` until the visible width reaches `max`.
///
/// Width is measured in terminal columns with ANSI escapes stripped.
pub fn repeat_max(painter: Painter, max: i64, filler: &str, input: &str) -> String {
	let width = console::measure_text_width(input);
	let count = usize::try_from(max).unwrap_or(0).saturating_sub(width);
	painter.paint(
		Style::new().white(),
		&format!("{input}{}", filler.repeat(count)),
	)
}

/// `input` in the given foreground color.
pub fn colorize(painter: Painter, color: Color, input: &str) -> String {
	painter.paint(color.paint(Style::new()), input)
}

pub fn bold(painter: Painter, input: &str) -> String {
	painter.paint(Style::new().bold(), input)
}

/// Template values as display text; undefined and none become empty.
///
/// Booleans are written `true`/`false`.
pub fn text(value: &Value) -> String {
	if let Some(s) = value.as_str() {
		return s.to_string();
	}
	match value.kind() {
		ValueKind::Undefined | ValueKind::None => String::new(),
		ValueKind::Bool => value.is_true().to_string(),
		_ => value.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn plain() -> Painter {
		Painter::new(ColorChoice::Never)
	}

	fn colored() -> Painter {
		Painter::new(ColorChoice::Always)
	}

	#[test]
	fn commit_takes_seven_characters() {
		assert_eq!(commit("324d022c190ce49e0440e6bdac6383e4874c7c70"), "324d022");
		assert_eq!(commit("abc"), "abc");
		assert_eq!(commit(""), "");
	}

	#[test]
	fn commit_trims_after_truncating() {
		assert_eq!(commit("  ab     cdef"), "ab");
		assert_eq!(commit("324d02 \n"), "324d02");
	}

	#[test]
	fn fmt_bool_maps_to_yes_no() {
		assert_eq!(fmt_bool(true), "yes");
		assert_eq!(fmt_bool(false), "no");
	}

	#[test]
	fn repeat_max_fills_to_width() {
		assert_eq!(repeat_max(plain(), 10, "-", "abc"), "abc-------");
	}

	#[test]
	fn repeat_max_ignores_color_codes() {
		let red = colored().paint(Style::new().red(), "abc");
		assert_ne!(red, "abc");

		let out = repeat_max(plain(), 10, "-", &red);
		assert_eq!(console::strip_ansi_codes(&out), "abc-------");
	}

	#[test]
	fn repeat_max_never_goes_negative() {
		assert_eq!(repeat_max(plain(), 2, "-", "abcdef"), "abcdef");
		assert_eq!(repeat_max(plain(), -5, "-", "abc"), "abc");
	}

	#[test]
	fn repeat_max_counts_wide_characters() {
		assert_eq!(repeat_max(plain(), 6, ".", "日本"), "日本..");
	}

	#[test]
	fn val_pads_to_column() {
		let out = val(plain(), "0.6.1");
		assert_eq!(out.len(), VALUE_WIDTH);
		assert!(out.starts_with("0.6.1 "));
	}

	#[test]
	fn val_keeps_long_values() {
		let long = "x".repeat(VALUE_WIDTH + 5);
		assert_eq!(val(plain(), &long), long);
	}

	#[test]
	fn header_joins_prefix_and_name() {
		let formatting = HeaderFormatting::default();
		assert_eq!(header(plain(), &formatting, "mycli"), "▓▓▓ mycli");

		let styled = header(colored(), &formatting, "mycli");
		assert!(styled.contains('\u{1b}'));
		assert_eq!(console::strip_ansi_codes(&styled), "▓▓▓ mycli");
	}

	#[test]
	fn key_is_styled_only_when_enabled() {
		assert_eq!(key(plain(), "Version"), "Version");
		let styled = key(colored(), "Version");
		assert_ne!(styled, "Version");
		assert_eq!(console::strip_ansi_codes(&styled), "Version");
	}

	#[test]
	fn colorize_applies_named_color() {
		assert_eq!(colorize(plain(), Color::Red, "abc"), "abc");
		let red = colorize(colored(), Color::Red, "abc");
		assert_eq!(red, colored().paint(Style::new().red(), "abc"));
		assert_eq!(colorize(colored(), Color::Default, "abc"), "abc");
	}

	#[test]
	fn bold_is_styled_only_when_enabled() {
		assert_eq!(bold(plain(), "abc"), "abc");
		assert_eq!(console::strip_ansi_codes(&bold(colored(), "abc")), "abc");
		assert_ne!(bold(colored(), "abc"), "abc");
	}

	#[test]
	fn text_renders_scalars() {
		assert_eq!(text(&Value::from("a")), "a");
		assert_eq!(text(&Value::from(42)), "42");
		assert_eq!(text(&Value::from(true)), "true");
		assert_eq!(text(&Value::from(false)), "false");
		assert_eq!(text(&Value::UNDEFINED), "");
		assert_eq!(text(&Value::from(())), "");
	}

	proptest! {
		/// The short commit never exceeds seven characters.
		#[test]
		fn commit_is_bounded(input in "\\PC{0,64}") {
			prop_assert!(commit(&input).chars().count() <= SHORT_COMMIT_LEN);
		}

		/// Filling always reaches max when the input is narrower.
		#[test]
		fn repeat_max_reaches_width(input in "[a-z]{0,20}", max in 0i64..40) {
			let out = repeat_max(plain(), max, "-", &input);
			let expected = (max as usize).max(input.len());
			prop_assert_eq!(console::measure_text_width(&out), expected);
			prop_assert!(out.starts_with(&input));
		}

		/// Short values always occupy exactly the column width.
		#[test]
		fn val_width_is_fixed(input in "[a-zA-Z0-9.]{0,37}") {
			prop_assert_eq!(val(plain(), &input).chars().count(), VALUE_WIDTH);
		}
	}
}
