// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Styled rendering of build information.
//!
//! This crate provides:
//! - [`Render`]: executes a minijinja layout against any serializable input
//! - [`Config`]: header, date and color policy plus the layout text
//! - The template function table (`header`, `key`, `val`, `commit`,
//!   `fmtTime`, `fmtBool`, `repeatMax`) and the color helpers (`red`,
//!   `darkGray`, `bold`, ...), see [`funcs`]
//!
//! # Example
//!
//! ```
//! use buildstamp_style::{Config, ColorChoice, Layout, Render};
//!
//! let mut config = Config::default();
//! config.formatting.color = ColorChoice::Never;
//! config.layout = Layout { raw: "{{ key(\"Version\") }} {{ version }}".into() };
//!
//! let out = Render::with_config(config)
//! 	.render(&serde_json::json!({ "version": "1.2.3" }))
//! 	.unwrap();
//! assert_eq!(out, "Version 1.2.3");
//! ```

pub mod config;
pub mod error;
pub mod funcs;
mod render;
pub mod time;

pub use config::{
	Color, ColorChoice, Config, DateFormatting, Formatting, HeaderFormatting, Layout, UnknownColor,
	DEFAULT_LAYOUT, STYLE_ENV,
};
pub use error::{ConfigError, RenderError};
pub use render::Render;
