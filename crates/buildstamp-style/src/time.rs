// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Free-form date parsing and relative time for the `fmtTime` function.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Display format for parsed dates, RFC 822 with a numeric zone.
pub const DATE_FORMAT: &str = "%d %b %y %H:%M %z";

/// `%.f` also matches input without fractional seconds.
const OFFSET_FORMATS: &[&str] = &[
	"%Y-%m-%d %H:%M:%S%.f %:z",
	"%Y-%m-%d %H:%M:%S%.f %z",
	"%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Formats without an offset are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
	"%Y/%m/%d %H:%M:%S%.f",
	"%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Unit lengths in seconds, largest first.
const UNITS: &[(u64, &str)] = &[
	(31_536_000, "year"),
	(2_592_000, "month"),
	(604_800, "week"),
	(86_400, "day"),
	(3_600, "hour"),
	(60, "minute"),
	(1, "second"),
];

/// Parse a date in any of the layouts build tooling commonly emits.
///
/// Returns `None` for empty or unrecognized input.
pub fn parse_any(input: &str) -> Option<DateTime<FixedOffset>> {
	let input = input.trim();
	if input.is_empty() {
		return None;
	}

	if input.bytes().all(|b| b.is_ascii_digit()) {
		return parse_digits(input);
	}

	if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
		return Some(parsed);
	}
	if let Ok(parsed) = DateTime::parse_from_rfc2822(input) {
		return Some(parsed);
	}
	if let Some(parsed) = parse_with_offset(input) {
		return Some(parsed);
	}
	// `2022-04-01 12:22:14 +0000 UTC`: the numeric offset wins over the name.
	if let Some((rest, zone)) = input.rsplit_once(' ') {
		if zone.bytes().all(|b| b.is_ascii_alphabetic()) {
			if let Some(parsed) = parse_with_offset(rest) {
				return Some(parsed);
			}
		}
	}

	for format in NAIVE_FORMATS {
		if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
			return Some(parsed.and_utc().into());
		}
	}
	DATE_FORMATS
		.iter()
		.find_map(|format| NaiveDate::parse_from_str(input, format).ok())
		.and_then(utc_midnight)
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
	OFFSET_FORMATS
		.iter()
		.find_map(|format| DateTime::parse_from_str(input, format).ok())
}

/// `YYYYMMDD`, or a Unix timestamp whose precision follows from its length.
fn parse_digits(input: &str) -> Option<DateTime<FixedOffset>> {
	if input.len() == 8 {
		if let Ok(date) = NaiveDate::parse_from_str(input, "%Y%m%d") {
			return utc_midnight(date);
		}
	}

	let value: i64 = input.parse().ok()?;
	let parsed = match input.len() {
		0..=10 => DateTime::from_timestamp(value, 0),
		13 => DateTime::from_timestamp_millis(value),
		16 => DateTime::from_timestamp_micros(value),
		19 => Some(DateTime::from_timestamp_nanos(value)),
		_ => None,
	};
	parsed.map(Into::into)
}

fn utc_midnight(date: NaiveDate) -> Option<DateTime<FixedOffset>> {
	date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().into())
}

/// Relative distance between `at` and `now`, e.g. `3 days ago` or
/// `2 hours from now`.
///
/// The distance is rounded down to its largest unit.
pub fn humanize(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let delta = now.signed_duration_since(at);
	let (magnitude, direction) = if delta >= Duration::zero() {
		(delta, "ago")
	} else {
		(-delta, "from now")
	};

	let secs = magnitude.num_seconds().unsigned_abs();
	let Some((length, unit)) = UNITS.iter().copied().find(|(length, _)| secs >= *length) else {
		return "now".to_string();
	};

	let count = secs / length;
	let plural = if count == 1 { "" } else { "s" };
	format!("{count} {unit}{plural} {direction}")
}

/// Format a free-form date for display.
///
/// Unparsable input yields an empty string; the failure is only traced.
pub fn format_time(input: &str, humanized_suffix: bool, now: DateTime<Utc>) -> String {
	let Some(parsed) = parse_any(input) else {
		if !input.trim().is_empty() {
			tracing::trace!(input, "unrecognized date, rendering empty");
		}
		return String::new();
	};

	let formatted = parsed.with_timezone(&Local).format(DATE_FORMAT).to_string();
	if humanized_suffix {
		format!("{formatted} ({})", humanize(parsed.with_timezone(&Utc), now))
	} else {
		formatted
	}
}
