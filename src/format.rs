//! Rendering of decoded lines into colored output

use core::fmt::{self, Write};

use chrono::{DateTime, Local};

use crate::syslog::DisplayLevel;

const GREY: &str = "\x1b[38;20m";
const YELLOW: &str = "\x1b[33;20m";
const RED: &str = "\x1b[31;20m";
const BOLD_RED: &str = "\x1b[31;1m";
const RESET: &str = "\x1b[0m";

///Wall-clock time of the moment a line is rendered, in the ambient local time zone
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    #[inline(always)]
    ///Captures current wall-clock time
    pub fn now() -> Self {
        Self(Local::now())
    }
}

impl fmt::Display for Timestamp {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.format("%Y-%m-%d %H:%M:%S%.3f"), fmt)
    }
}

///Renderer turning decoded lines into colored terminal output.
///
///The template is fixed for every level, only the color changes:
///`<color>[<timestamp>] <prefix><message><reset>`. Escape codes are written
///unconditionally, there is no terminal detection.
#[derive(Copy, Clone)]
pub struct ColorFormatter;

impl ColorFormatter {
    ///Returns color escape for the level.
    ///
    ///Lookup is total over `DisplayLevel`, every level has exactly one color.
    const fn color(level: DisplayLevel) -> &'static str {
        match level {
            DisplayLevel::Debug | DisplayLevel::Info => GREY,
            DisplayLevel::Warn => YELLOW,
            DisplayLevel::Error => RED,
            DisplayLevel::Critical => BOLD_RED,
        }
    }

    ///Appends one rendered line to `out`, without trailing newline
    pub fn render(&self, out: &mut String, level: DisplayLevel, prefix: &str, body: &str) {
        let color = Self::color(level);
        let timestamp = Timestamp::now();
        let _ = write!(out, "{color}[{timestamp}] {prefix}{body}{RESET}");
    }
}
