//!Colorizes a log stream, routing lines through per-category loggers.
//!A literal `[ERROR]` tag after the category forces error severity

use std::io::{self, BufRead};

use klogfmt::sink::Stdout;
use klogfmt::Pipeline;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let mut pipeline = Pipeline::new(Stdout).with_category_routing();

    for line in stdin.lines() {
        pipeline.feed(&line?)?;
    }

    Ok(())
}
