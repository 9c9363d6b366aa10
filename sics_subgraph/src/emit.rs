//! Mapping output.
//!
//! Each discovered embedding is written the moment it is found, one line
//! per mapping, as an ordered pattern-index to target-index correspondence;
//! the final count goes on its own line. The line format is the one the
//! benchmark tooling scrapes: `{0: 4, 1: 2, 2: 0}`.

use std::fmt::Write as _;
use std::io::Write;

/// Render a complete mapping as its output line (without the newline).
#[must_use]
pub fn format_mapping(pairs: &[(usize, usize)]) -> String {
    let mut line = String::with_capacity(4 + pairs.len() * 8);
    line.push('{');
    for (i, (p, t)) in pairs.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{p}: {t}");
    }
    line.push('}');
    line
}

/// Immediate-mode mapping writer handed to the search driver.
pub(crate) struct MappingSink<'w> {
    out: &'w mut dyn Write,
    enabled: bool,
}

impl<'w> MappingSink<'w> {
    pub(crate) fn new(out: &'w mut dyn Write, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Emit one mapping line, if mapping output was requested.
    pub(crate) fn emit(&mut self, pairs: &[(usize, usize)]) -> std::io::Result<()> {
        if self.enabled {
            writeln!(self.out, "{}", format_mapping(pairs))?;
        }
        Ok(())
    }

    /// Emit the final count line (always produced).
    pub(crate) fn finish(&mut self, count: u64) -> std::io::Result<()> {
        writeln!(self.out, "{count}")
    }
}
