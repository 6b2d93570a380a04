use std::io::{self, Write};
use std::sync::mpsc;

use super::Sink;
use crate::syslog::Severity;

#[derive(Copy, Clone, Debug)]
///Sink writing every line, with trailing newline, onto standard output.
///
///Stdout is locked per line, writes are line-at-a-time without batching.
pub struct Stdout;

impl Sink for Stdout {
    type Error = io::Error;

    fn write_line(&mut self, _severity: Severity, line: &str) -> Result<(), Self::Error> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")
    }
}

#[repr(transparent)]
///Sink that uses channel to collect rendered lines.
///
///This is mostly useful for testing purposes.
pub struct InMemory<T>(mpsc::Sender<T>);

impl<T: for<'a> From<&'a str>> InMemory<T> {
    #[inline(always)]
    ///Creates new in memory sink using provided sender
    pub fn new(chan: mpsc::Sender<T>) -> Self {
        Self(chan)
    }

    #[inline(always)]
    ///Returns reference to underlying channel
    pub fn channel(&self) -> &mpsc::Sender<T> {
        &self.0
    }
}

impl<T: for<'a> From<&'a str>> Sink for InMemory<T> {
    type Error = mpsc::SendError<T>;

    #[inline(always)]
    fn write_line(&mut self, _severity: Severity, line: &str) -> Result<(), Self::Error> {
        self.0.send(line.into())
    }
}

impl<T> Clone for InMemory<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
