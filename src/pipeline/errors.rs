use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Raw LEGO dataset not found at: {}\nPlace Kaggle_LEGO_DATASET.csv in data/raw/ and rerun.", path.display())]
    InputNotFound {
        path: PathBuf
    },
    #[error("Raw LEGO dataset at {} has no [{column}] column", path.display())]
    MissingColumn {
        column: &'static str,
        path: PathBuf
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error)
}
