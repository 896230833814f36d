//! CSV rendering for sweep rows.
//!
//! Two layouts:
//! - [`Layout::Trigger`]: single-cap sweeps, net gain and value per trigger.
//! - [`Layout::Capped`]: one `(net gain, rest rate)` pair per boost cap.

use std::io::{self, Write};

use crate::systems::sweep::{Axis, SweepRow};

/// Printed in place of a per-trigger value for a zero trigger rate.
pub const UNDEFINED: &str = "undefined";

#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    Trigger,
    /// Cap labels in percent, in grid order.
    Capped { cap_percents: Vec<u32> },
}

impl Layout {
    pub fn capped(caps: &Axis) -> Self {
        Layout::Capped { cap_percents: caps.values().map(|c| (c * 100.0).round() as u32).collect() }
    }

    pub fn header(&self) -> String {
        match self {
            Layout::Trigger => "Trigger/Day, Net_Gain(Week), Value_Per_Trigger(Coeff)".to_string(),
            Layout::Capped { cap_percents } => {
                let mut cols = vec!["Trigger/Day".to_string()];
                for p in cap_percents {
                    cols.push(format!("Net_Gain_{p}%(Week)"));
                    cols.push(format!("Rest_Rate_{p}%"));
                }
                cols.join(", ")
            }
        }
    }

    /// Cells a row must carry to fill this layout's columns.
    pub fn cells_per_row(&self) -> usize {
        match self {
            Layout::Trigger => 1,
            Layout::Capped { cap_percents } => cap_percents.len(),
        }
    }

    /// Render one row. The row must hold exactly [`cells_per_row`](Self::cells_per_row)
    /// cells; [`write_row`](Self::write_row) rejects any other shape.
    pub fn row(&self, row: &SweepRow) -> String {
        debug_assert_eq!(row.cells.len(), self.cells_per_row(), "row shape does not match layout");
        let mut cols = vec![format!("{:.1}", row.trigger_rate)];
        match self {
            Layout::Trigger => {
                if let Some(cell) = row.cells.first() {
                    cols.push(format!("{:.4}", cell.net_gain));
                    cols.push(match cell.value_per_trigger {
                        Some(v) => format!("{v:.5}"),
                        None => UNDEFINED.to_string(),
                    });
                }
            }
            Layout::Capped { .. } => {
                for cell in &row.cells {
                    cols.push(format!("{:.4}", cell.net_gain));
                    cols.push(format!("{:.4}", cell.rest_rate));
                }
            }
        }
        cols.join(", ")
    }

    pub fn write_header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.header())
    }

    /// Write one row and flush so long sweeps show progress.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the row's cell count differs from the layout's
    /// columns (e.g. a multi-cap sweep fed to [`Layout::Trigger`]); nothing is
    /// written in that case. Otherwise any error from `out`.
    pub fn write_row<W: Write + ?Sized>(&self, out: &mut W, row: &SweepRow) -> io::Result<()> {
        if row.cells.len() != self.cells_per_row() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "row at rate {:.1} has {} cells, layout expects {}",
                    row.trigger_rate,
                    row.cells.len(),
                    self.cells_per_row()
                ),
            ));
        }
        writeln!(out, "{}", self.row(row))?;
        out.flush()
    }
}
