mod errors;
mod missing;
mod numeric;

pub use errors::NumericError;
pub use missing::{is_missing_marker, normalize_label};
pub use numeric::coerce_number;

pub type CalendarYear = i32;
pub type RowCount = usize;
