use std::io::{self, Write};

use fizzbuzz_core::Label;

/// Write labels one per line, followed by a single trailing newline.
///
/// An empty sequence still produces that newline, so the output is always
/// exactly what `println!` of the joined labels would print.
pub fn write_sequence<W: Write + ?Sized>(out: &mut W, labels: &[Label]) -> io::Result<()> {
    let mut first = true;
    for label in labels {
        if !first {
            out.write_all(b"\n")?;
        }
        write!(out, "{label}")?;
        first = false;
    }
    out.write_all(b"\n")?;
    out.flush()
}
