//! Column-aligned result table.
//!
//! Every cell is padded to a fixed width and styled on its own, then cells
//! are joined with a single space.

use std::io::{self, Write};

use nu_ansi_term::Style;

use crate::resolver::{FlipStep, Resolution};
use crate::theme::Theme;

pub const BANNER: &str = "Happy Pancakes";
pub const HEADERS: [&str; 4] = ["#", "Test Case", "Count", "Proof of Flipped"];

/// Pad the four cells of a row to their column widths.
pub fn pad_cells(index: &str, original: &str, count: &str, flipped: &str) -> [String; 4] {
    [
        format!("{index:<3}"),
        format!("{original:<20}"),
        // right-aligned in 3, then padded out to the column width
        format!("{:<20}", format!("{count:>3}")),
        format!("{flipped:<25}"),
    ]
}

/// Writes the banner, header and rows, styling cells when a theme is set.
pub struct TableWriter<W: Write> {
    out: W,
    theme: Option<Theme>,
}

impl<W: Write> TableWriter<W> {
    /// `theme: None` writes plain text.
    pub fn new(out: W, theme: Option<Theme>) -> Self {
        Self { out, theme }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, pick: fn(&Theme) -> Style, text: &str) -> String {
        match self.theme.as_ref() {
            Some(theme) => pick(theme).paint(text).to_string(),
            None => text.to_string(),
        }
    }

    fn write_cells(&mut self, cells: [String; 4], pick: fn(&Theme) -> Style) -> io::Result<()> {
        let line = cells
            .iter()
            .map(|cell| self.paint(pick, cell))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{line}")
    }

    /// Banner followed by a blank line.
    pub fn write_banner(&mut self) -> io::Result<()> {
        let banner = self.paint(|t| t.banner, BANNER);
        writeln!(self.out, "{banner}")?;
        writeln!(self.out)
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        let [a, b, c, d] = HEADERS;
        self.write_cells(pad_cells(a, b, c, d), |t| t.header)
    }

    pub fn write_result(&mut self, result: &Resolution) -> io::Result<()> {
        let cells = pad_cells(
            &result.case_number.to_string(),
            &result.original.to_string(),
            &result.flip_count.to_string(),
            &result.flipped.to_string(),
        );
        self.write_cells(cells, |t| t.row)
    }

    /// Per-flip trace lines for `--debug`, indented under the result row.
    pub fn write_steps(&mut self, steps: &[FlipStep]) -> io::Result<()> {
        for step in steps {
            let line = format!(
                "    flip {:>2} | through {:>2} | {} -> {}",
                step.step, step.index, step.before, step.after
            );
            let line = self.paint(|t| t.debug, &line);
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Trailing blank line and flush.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}
