//!Colorizes a log stream, routing every line through the single `klog` logger

use std::io::{self, BufRead};

use klogfmt::sink::Stdout;
use klogfmt::Pipeline;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let mut pipeline = Pipeline::new(Stdout);

    for line in stdin.lines() {
        pipeline.feed(&line?)?;
    }

    Ok(())
}
