use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::report::ColumnMissingness;
use crate::types::RowCount;

/// Outcome of one builder run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Rows read from the raw table.
    pub rows_before_filter: RowCount,
    /// Rows left after the positivity filter.
    pub rows_after_filter: RowCount,
    /// Rows written to the output table.
    pub rows_model_ready: RowCount,
    pub output_path: PathBuf,
    pub missingness: Vec<ColumnMissingness>
}

impl Display for Summary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Rows before filter: {}", self.rows_before_filter)?;
        writeln!(formatter, "Rows after  filter: {}", self.rows_after_filter)?;
        writeln!(formatter, "Rows model-ready : {}", self.rows_model_ready)?;
        writeln!(formatter, "Wrote: {}", self.output_path.display())?;
        writeln!(formatter, "Missingness (top {}):", self.missingness.len())?;

        for entry in &self.missingness {
            writeln!(formatter, "{:<24} {:.6}", entry.column, entry.fraction)?;
        }

        Ok(())
    }
}
