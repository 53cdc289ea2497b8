// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Minimal stderr backend for the `log` facade.
//!
//! Logging is off unless `PKGBUILD_MATRIX_LOG` names a level, so standard error only carries
//! the final diagnostic by default.

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "PKGBUILD_MATRIX_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name, case-insensitively. Unknown or empty values mean off.
#[must_use]
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Off)
}

/// Install the stderr logger with the level taken from [`LOG_ENV`].
///
/// Calling this more than once keeps the first logger.
pub fn init() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
