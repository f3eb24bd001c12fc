mod missingness;
mod summary;

pub use missingness::{rank_missingness, ColumnMissingness, MISSINGNESS_LIMIT};
pub use summary::Summary;
