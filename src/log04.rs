//!Implementation for `log` crate interface

use log04::{max_level, Level, Log, Metadata, Record, STATIC_MAX_LEVEL};

use crate::format::ColorFormatter;
use crate::sink::Sink;
use crate::syslog::Severity;

impl From<Level> for Severity {
    #[inline(always)]
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::LOG_ERR,
            Level::Warn => Self::LOG_WARNING,
            Level::Info => Self::LOG_NOTICE,
            Level::Debug => Self::LOG_INFO,
            Level::Trace => Self::LOG_DEBUG,
        }
    }
}

///Logger rendering application records with the same color table as the line filter.
///
///Write errors are swallowed, logging is not allowed to take down its host.
pub struct ColorLogger<S> {
    sink: S,
    show_target: bool,
}

impl<S: Sink + Clone> ColorLogger<S> {
    ///Creates new logger writing onto `sink`
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            show_target: false,
        }
    }

    ///Shows record target as category prefix of every rendered line
    pub const fn with_target(mut self) -> Self {
        self.show_target = true;
        self
    }
}

impl<S: Sink + Clone + Send + Sync> Log for ColorLogger<S> {
    #[inline(always)]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level() && metadata.level() <= STATIC_MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let severity: Severity = record.level().into();
        let level = severity.display_level();

        let mut prefix = String::new();
        if self.show_target {
            prefix.push_str(record.target());
            prefix.push_str(": ");
        }

        let mut line = String::new();
        match record.args().as_str() {
            Some(text) => ColorFormatter.render(&mut line, level, &prefix, text),
            None => {
                let text = record.args().to_string();
                ColorFormatter.render(&mut line, level, &prefix, &text);
            }
        }

        let _ = self.sink.clone().write_line(severity, &line);
    }

    #[inline(always)]
    fn flush(&self) {
    }
}
