// src/printer.rs

//! This module defines the `Printer`.
//!
//! The `Printer` writes a color map as line-oriented text: one rendered
//! `ColorPair` per line in input order, followed by a `Total pairs: <count>`
//! line. It is generic over `std::io::Write` so the same code serves the
//! process standard output and in-memory buffers.

use crate::generator;
use crate::pair::ColorPair;

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

/// Writes color maps to an output sink.
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<io::Stdout> {
    /// Creates a `Printer` that writes to the process standard output.
    pub fn stdout() -> Self {
        Printer::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Printer { out }
    }

    /// Writes every pair followed by the total count line.
    ///
    /// # Returns
    ///
    /// * `Result<usize>`: the number of pairs written, always `pairs.len()`,
    ///   or an error if the sink rejected a write.
    pub fn print(&mut self, pairs: &[ColorPair]) -> Result<usize> {
        let mut count = 0;
        for pair in pairs {
            writeln!(self.out, "{}", pair)
                .with_context(|| format!("Failed to write color pair {}", pair.index()))?;
            count += 1;
        }

        writeln!(self.out, "Total pairs: {}", count).context("Failed to write pair total")?;
        self.out.flush().context("Failed to flush color map output")?;

        debug!("Printer: wrote {} pairs", count);
        Ok(count)
    }

    /// Consumes the `Printer`, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Generates the built-in color map and prints it to `out`.
pub fn print_color_map<W: Write>(out: W) -> Result<usize> {
    let pairs = generator::generate();
    Printer::new(out).print(&pairs)
}
