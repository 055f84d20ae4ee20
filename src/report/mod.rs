//! Human readable output of the two diagnostics.
//!
//! Everything is written to a caller supplied [`Write`](std::io::Write) so the
//! programs print to stdout and the tests render into a buffer.

pub mod config;
pub mod env_file;

pub use config::{debug_config, Sources};
pub use env_file::debug_env;

use std::io::Write;

/// Number of characters of a secret shown by [`preview`].
pub const PREVIEW_LEN: usize = 20;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    Ok,
    Warn,
    Fail,
}

impl Status {
    #[inline]
    pub fn marker(self) -> &'static str {
        match self {
            Status::Ok => "[ok]  ",
            Status::Warn => "[warn]",
            Status::Fail => "[fail]",
        }
    }
}

/// The first [`PREVIEW_LEN`] characters followed by `...`.
pub fn preview(value: &str) -> String {
    let mut preview: String = value.chars().take(PREVIEW_LEN).collect();
    preview.push_str("...");
    preview
}

pub(crate) fn title(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    writeln!(out, "{text}")?;
    writeln!(out, "{}", "=".repeat(text.chars().count()))?;
    writeln!(out)
}

pub(crate) fn line(out: &mut dyn Write, status: Status, text: impl std::fmt::Display) -> std::io::Result<()> {
    writeln!(out, "{} {text}", status.marker())
}
