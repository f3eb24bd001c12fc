use thiserror::Error;

/// Reasons a projected row is not model-ready.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Row is missing required column [{column}]")]
    MissingRequired {
        column: &'static str
    },
    #[error("Minifigures value [{value}] is negative")]
    NegativeMinifigures {
        value: String
    },
    #[error("Minifigures value [{value}] does not fit an integer")]
    MinifiguresOutOfRange {
        value: String
    }
}
