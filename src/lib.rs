//! Colorizing filter for syslog-style log streams

#![warn(missing_docs)]
#![allow(clippy::style)]

use std::collections::HashMap;

#[doc(hidden)]
#[cfg(not(debug_assertions))]
macro_rules! unreach {
    () => {{
        unsafe {
            core::hint::unreachable_unchecked();
        }
    }};
}

#[doc(hidden)]
#[cfg(debug_assertions)]
macro_rules! unreach {
    () => {{
        unreachable!();
    }};
}

pub mod syslog;
pub use syslog::{DisplayLevel, Priority, Severity};
pub mod parse;
pub mod format;
pub mod sink;
#[cfg(feature = "log04")]
pub mod log04;

///Logger name used when per-category routing is disabled
pub const DEFAULT_LOGGER: &str = "klog";

struct Logger {
    prefix: String,
}

impl Logger {
    fn new(name: &str, categories: bool) -> Self {
        let prefix = if categories {
            let mut prefix = String::with_capacity(name.len() + 2);
            prefix.push_str(name);
            prefix.push_str(": ");
            prefix
        } else {
            String::new()
        };

        Self { prefix }
    }
}

struct Registry {
    loggers: HashMap<String, Logger>,
}

impl Registry {
    fn new() -> Self {
        Self {
            loggers: HashMap::new(),
        }
    }

    fn resolve(&mut self, name: &str, categories: bool) -> &Logger {
        if !self.loggers.contains_key(name) {
            self.loggers.insert(name.to_owned(), Logger::new(name, categories));
        }

        match self.loggers.get(name) {
            Some(logger) => logger,
            None => unreach!(),
        }
    }

    fn len(&self) -> usize {
        self.loggers.len()
    }
}

///Line formatting pipeline.
///
///Splits every raw input line into priority, optional category and body,
///then renders the body with color picked by the decoded severity and
///writes the result onto the sink.
///
///Logger instances are created per category on first use and kept for the
///lifetime of the pipeline.
pub struct Pipeline<S: sink::Sink> {
    categories: bool,
    formatter: format::ColorFormatter,
    registry: Registry,
    buffer: String,
    sink: S,
}

impl<S: sink::Sink> Pipeline<S> {
    ///Creates new pipeline writing rendered lines onto `sink`
    pub fn new(sink: S) -> Self {
        Self {
            categories: false,
            formatter: format::ColorFormatter,
            registry: Registry::new(),
            buffer: String::new(),
            sink,
        }
    }

    ///Enables per-category logger routing and the `[ERROR]` tag override
    pub fn with_category_routing(mut self) -> Self {
        self.categories = true;
        self
    }

    ///Processes one raw input line.
    ///
    ///Lines containing only whitespace are skipped without output or logger lookup.
    pub fn feed(&mut self, raw: &str) -> Result<(), S::Error> {
        let record = match parse::parse(raw, self.categories) {
            Some(record) => record,
            None => return Ok(()),
        };

        let name = match record.category {
            Some(name) => name,
            None => DEFAULT_LOGGER,
        };
        let logger = self.registry.resolve(name, self.categories);

        self.buffer.clear();
        self.formatter.render(&mut self.buffer, record.severity.display_level(), &logger.prefix, record.body);
        self.sink.write_line(record.severity, &self.buffer)
    }

    #[inline(always)]
    ///Returns number of logger instances created so far
    pub fn logger_count(&self) -> usize {
        self.registry.len()
    }
}
