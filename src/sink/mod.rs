//!Rendered line sinks

use core::fmt;

use crate::syslog::Severity;

mod std;
pub use self::std::*;

///Rendered line writer
pub trait Sink {
    ///Write error type
    type Error: fmt::Debug;

    ///Writes one fully rendered line.
    ///
    ///Color and prefix are rendered into `line` already, severity is only for informational purpose
    fn write_line(&mut self, severity: Severity, line: &str) -> Result<(), Self::Error>;
}
