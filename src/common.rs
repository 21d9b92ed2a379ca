use std::fs::File;
use std::io;
use std::io::Write;

use crate::errors::*;

/// Opens the output file for writing; `-` writes to STDOUT.
pub fn open_file_or_stdout(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::BufWriter::new(io::stdout())))
    } else {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;

        Ok(Box::new(io::BufWriter::new(handle)))
    }
}

/// Formats a base count using the largest fitting unit (bp, Kbp, Mbp, Gbp).
pub fn format_bases(bases: usize) -> String {
    const UNITS: [&str; 4] = ["bp", "Kbp", "Mbp", "Gbp"];

    let mut value = bases as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bases, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
