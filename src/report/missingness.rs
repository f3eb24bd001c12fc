use crate::models::{ModelRecord, MODEL_COLUMNS};

/// How many columns the data-quality report lists.
pub const MISSINGNESS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMissingness {
    pub column: &'static str,
    /// Share of rows with no value in this column, from 0.0 to 1.0.
    pub fraction: f64
}

/// Ranks output columns by their share of missing values, highest first.
///
/// Columns with equal shares keep their output order. An empty table reports 0.0 everywhere.
pub fn rank_missingness(records: &[ModelRecord], limit: usize) -> Vec<ColumnMissingness> {
    let mut counts = [0usize; MODEL_COLUMNS.len()];

    for record in records {
        for (count, missing) in counts.iter_mut().zip(record.missing_flags()) {
            if missing {
                *count += 1;
            }
        }
    }

    let mut ranking: Vec<ColumnMissingness> = MODEL_COLUMNS.into_iter()
        .zip(counts)
        .map(|(column, count)| ColumnMissingness {
            column,
            fraction: if records.is_empty() { 0.0 } else { count as f64 / records.len() as f64 }
        })
        .collect();

    ranking.sort_by(|left, right| right.fraction.total_cmp(&left.fraction));
    ranking.truncate(limit);
    ranking
}
