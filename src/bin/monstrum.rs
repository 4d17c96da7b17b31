//! Prints the Monster group demonstration report to stdout.
//!
//! Run with: cargo run

use std::io::{self, Write};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    monstrum::demo::write_demonstration(&mut out)?;
    out.flush()
}
