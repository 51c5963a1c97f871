use crate::util::*;
use std::fmt::Display;
use std::io::prelude::*;

/// How aggregated values are written out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Lines,

    /// One line per row of the previous layer, comma separated.
    Grid,

    /// Brace enclosed initializer list, ready to paste into a fixture.
    Array,
}

fn write_separated<W: Write, T: Display>(
    output: &mut W,
    values: &[T],
) -> std::io::Result<()> {
    let mut iter = values.iter();
    if let Some(first) = iter.next() {
        write!(output, "{first}")?;
    }
    for v in iter {
        write!(output, ", {v}")?;
    }
    Ok(())
}

/// Write `values`, one per position of `bounds` in row major order.
pub fn write_values<W: Write, T: Display>(
    output: &mut W,
    values: &[T],
    format: OutputFormat,
    bounds: &AABB<2>,
) -> std::io::Result<()> {
    assert_eq!(values.len(), bounds.buffer_size());
    match format {
        OutputFormat::Lines => {
            for v in values {
                writeln!(output, "{v}")?;
            }
        }
        OutputFormat::Grid => {
            let row_len = bounds.exclusive_bounds()[1] as usize;
            for row in values.chunks(row_len) {
                write_separated(output, row)?;
                writeln!(output)?;
            }
        }
        OutputFormat::Array => {
            write!(output, "{{")?;
            write_separated(output, values)?;
            writeln!(output, "}};")?;
        }
    }
    Ok(())
}
