//! Verify values already pasted into a test fixture.

use float_cmp::approx_eq;
use std::io::prelude::*;
use std::io::{Error, ErrorKind};

/// One index where the expected and computed values disagree.
/// `None` marks an index missing from one side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: Option<f64>,
    pub actual: Option<f64>,
}

impl std::fmt::Display for Mismatch {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        let show = |v: Option<f64>| match v {
            Some(v) => v.to_string(),
            None => "missing".to_string(),
        };
        write!(
            f,
            "{}: expected {}, got {}",
            self.index,
            show(self.expected),
            show(self.actual)
        )
    }
}

/// Parse numbers separated by whitespace, commas, or semicolons.
/// Braces are ignored and a trailing `f` float suffix is accepted,
/// so a C initializer list can be read back directly.
pub fn parse_expected(text: &str) -> std::io::Result<Vec<f64>> {
    text.split(|c: char| {
        c.is_whitespace() || matches!(c, ',' | ';' | '{' | '}')
    })
    .filter(|token| !token.is_empty())
    .map(|token| {
        let number = token.strip_suffix(['f', 'F']).unwrap_or(token);
        number.parse::<f64>().map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("bad expected value {token:?}: {e}"),
            )
        })
    })
    .collect()
}

pub fn read_expected<P: AsRef<std::path::Path>>(
    path: &P,
) -> std::io::Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)?;
    parse_expected(&text)
}

/// Absolute tolerance comparison, index by index.
pub fn compare(expected: &[f64], actual: &[f64], epsilon: f64) -> Vec<Mismatch> {
    let len = expected.len().max(actual.len());
    (0..len)
        .filter_map(|index| {
            let e = expected.get(index).copied();
            let a = actual.get(index).copied();
            let matches = match (e, a) {
                (Some(e), Some(a)) => {
                    approx_eq!(f64, e, a, epsilon = epsilon, ulps = 0)
                }
                _ => false,
            };
            (!matches).then_some(Mismatch {
                index,
                expected: e,
                actual: a,
            })
        })
        .collect()
}

/// Print the outcome of a check over `total` values.
/// Returns whether every value matched.
pub fn report<W: Write>(
    output: &mut W,
    mismatches: &[Mismatch],
    total: usize,
) -> std::io::Result<bool> {
    if mismatches.is_empty() {
        writeln!(output, "{total} values match")?;
        return Ok(true);
    }
    for m in mismatches {
        writeln!(output, "\t~ {m}")?;
    }
    writeln!(output, "{} of {} values differ", mismatches.len(), total)?;
    Ok(false)
}
