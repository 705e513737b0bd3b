// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! Diagnostics go to stderr with a fixed tag so stdout stays mypy's alone.

use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TAG: &str = "PCMW : ";

/// Formats events as `PCMW : [WARNING: |ERROR: ]message`.
pub struct Tagged;

impl<S, N> FormatEvent<S, N> for Tagged
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
{
	fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
		write!(writer, "{TAG}")?;
		match *event.metadata().level() {
			Level::ERROR => write!(writer, "ERROR: ")?,
			Level::WARN => write!(writer, "WARNING: ")?,
			_ => {}
		}
		ctx.field_format().format_fields(writer.by_ref(), event)?;
		writeln!(writer)
	}
}

/// Install the stderr subscriber. Does nothing if one is already installed.
pub fn init() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(Level::INFO)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.event_format(Tagged)
		.try_init();
}
