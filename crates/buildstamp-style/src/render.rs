// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use chrono::Utc;
use minijinja::{Environment, Value};
use serde::Serialize;

use crate::config::{Color, Config};
use crate::funcs::{self, Painter};
use crate::time;
use crate::RenderError;

/// Template-driven renderer for colorized, column-aligned output.
///
/// Each call to [`Render::render`] builds a fresh template environment from
/// the held [`Config`], so a `Render` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Render {
	config: Config,
}

impl Render {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: Config) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Render `input` through the configured layout.
	///
	/// The input is exposed to the template as its serialized fields, so an
	/// [`Info`](https://docs.rs/buildstamp-info) is addressed as `version`,
	/// `gitCommit`, `extraFields` and so on.
	pub fn render<S: Serialize + ?Sized>(&self, input: &S) -> Result<String, RenderError> {
		let env = self.environment();
		let template = env
			.template_from_str(&self.config.layout.raw)
			.map_err(RenderError::Parse)?;
		let output = template.render(input).map_err(RenderError::Execute)?;

		tracing::trace!(bytes = output.len(), "rendered layout");
		Ok(output)
	}

	/// Name shown by the `header` function.
	pub fn header_name(&self) -> String {
		let configured = self.config.formatting.header.name.trim();
		if !configured.is_empty() {
			return configured.to_string();
		}
		program_name()
	}

	fn environment(&self) -> Environment<'_> {
		let mut env = Environment::new();
		let painter = Painter::new(self.config.formatting.color);
		let humanized = self.config.formatting.date.enable_humanized_suffix;

		let header = funcs::header(painter, &self.config.formatting.header, &self.header_name());
		env.add_function("header", move || header.clone());

		let key = move |label: Value| funcs::key(painter, &funcs::text(&label));
		env.add_function("key", key);
		env.add_filter("key", key);

		let val = move |input: Value| funcs::val(painter, &funcs::text(&input));
		env.add_function("val", val);
		env.add_filter("val", val);

		let commit = |input: Value| funcs::commit(&funcs::text(&input));
		env.add_function("commit", commit);
		env.add_filter("commit", commit);

		let fmt_time = move |input: Value| {
			time::format_time(&funcs::text(&input), humanized, Utc::now())
		};
		env.add_function("fmtTime", fmt_time);
		env.add_filter("fmtTime", fmt_time);

		let fmt_bool = |input: Value| funcs::fmt_bool(input.is_true()).to_string();
		env.add_function("fmtBool", fmt_bool);
		env.add_filter("fmtBool", fmt_bool);

		env.add_function("repeatMax", move |max: i64, filler: Value, input: Value| {
			funcs::repeat_max(painter, max, &funcs::text(&filler), &funcs::text(&input))
		});
		// Filters receive the piped value first: `header() | repeatMax(62, "─")`.
		env.add_filter("repeatMax", move |input: Value, max: i64, filler: Value| {
			funcs::repeat_max(painter, max, &funcs::text(&filler), &funcs::text(&input))
		});

		for color in Color::all().filter(|color| *color != Color::Default) {
			let paint = move |input: Value| funcs::colorize(painter, color, &funcs::text(&input));
			let name = color.template_name();
			env.add_function(name.clone(), paint);
			env.add_filter(name, paint);
		}
		let bold = move |input: Value| funcs::bold(painter, &funcs::text(&input));
		env.add_function("bold", bold);
		env.add_filter("bold", bold);

		env
	}
}

/// File name of the running executable, as invoked.
fn program_name() -> String {
	std::env::args_os()
		.next()
		.and_then(|arg0| {
			Path::new(&arg0)
				.file_name()
				.map(|name| name.to_string_lossy().into_owned())
		})
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{ColorChoice, Layout};

	fn plain_config(layout: &str) -> Config {
		let mut config = Config::default();
		config.formatting.color = ColorChoice::Never;
		config.formatting.header.name = "testing".to_string();
		config.layout = Layout {
			raw: layout.to_string(),
		};
		config
	}

	fn render(layout: &str, input: serde_json::Value) -> Result<String, RenderError> {
		Render::with_config(plain_config(layout)).render(&input)
	}

	#[test]
	fn header_uses_configured_name() {
		let out = render("{{ header() }}", serde_json::json!({})).unwrap();
		assert_eq!(out, "▓▓▓ testing");
	}

	#[test]
	fn header_name_falls_back_to_program() {
		let render = Render::new();
		assert_eq!(render.header_name(), program_name());
		assert!(!render.header_name().contains('/'));
	}

	#[test]
	fn functions_and_filters_agree() {
		let input = serde_json::json!({ "gitCommit": "324d022c190ce49e0440e6bdac6383e4874c7c70" });
		let as_function = render("{{ commit(gitCommit) }}", input.clone()).unwrap();
		let as_filter = render("{{ gitCommit | commit }}", input).unwrap();
		assert_eq!(as_function, "324d022");
		assert_eq!(as_filter, "324d022");
	}

	#[test]
	fn fmt_bool_reads_booleans() {
		let input = serde_json::json!({ "dirtyBuild": true, "clean": false });
		let out = render("{{ dirtyBuild | fmtBool }}/{{ fmtBool(clean) }}", input).unwrap();
		assert_eq!(out, "yes/no");
	}

	#[test]
	fn fmt_time_swallows_bad_dates() {
		let input = serde_json::json!({ "buildDate": "not-a-date" });
		let out = render("[{{ buildDate | fmtTime }}][{{ fmtTime(missing) }}]", input).unwrap();
		assert_eq!(out, "[][]");
	}

	#[test]
	fn repeat_max_as_function_and_filter() {
		let out = render(
			"{{ repeatMax(10, \"-\", \"abc\") }}|{{ \"abc\" | repeatMax(10, \"-\") }}",
			serde_json::json!({}),
		)
		.unwrap();
		assert_eq!(out, "abc-------|abc-------");
	}

	#[test]
	fn color_helpers_follow_color_choice() {
		let layout = "{{ red(version) }}|{{ version | darkGray }}|{{ bold(\"x\") }}";
		let input = serde_json::json!({ "version": "0.6.1" });
		assert_eq!(render(layout, input.clone()).unwrap(), "0.6.1|0.6.1|x");

		let mut config = plain_config(layout);
		config.formatting.color = ColorChoice::Always;
		let colored = Render::with_config(config).render(&input).unwrap();
		assert!(colored.starts_with("\u{1b}["));
		assert_eq!(console::strip_ansi_codes(&colored), "0.6.1|0.6.1|x");
	}

	#[test]
	fn builtin_filters_are_available() {
		let out = render(
			"{{ version | upper }} {{ \"a,b\" | replace(\",\", \"-\") }}",
			serde_json::json!({ "version": "v1" }),
		)
		.unwrap();
		assert_eq!(out, "V1 a-b");
	}

	#[test]
	fn val_pads_values() {
		let out = render("{{ version | val }}|", serde_json::json!({ "version": "0.6.1" })).unwrap();
		assert_eq!(out, format!("{:<37}|", "0.6.1"));
	}

	#[test]
	fn parse_failure_is_reported() {
		let err = render("{{ version ", serde_json::json!({})).unwrap_err();
		assert!(matches!(err, RenderError::Parse(_)));
	}

	#[test]
	fn execution_failure_is_reported() {
		let err = render("{{ noSuchFunction() }}", serde_json::json!({})).unwrap_err();
		assert!(matches!(err, RenderError::Execute(_)));
	}

	#[test]
	fn repeated_renders_are_identical() {
		let input = serde_json::json!({
			"version": "0.6.1",
			"gitCommit": "324d022c190ce49e0440e6bdac6383e4874c7c70",
			"dirtyBuild": false,
		});
		let render = Render::with_config(plain_config(crate::DEFAULT_LAYOUT));
		let first = render.render(&input).unwrap();
		let second = render.render(&input).unwrap();
		assert_eq!(first, second);
	}
}
