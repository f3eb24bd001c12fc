use crate::models::{DerivedFeatures, Listing, ModelCandidate, ModelRecord, RawListing, INPUT_COLUMNS, MODEL_COLUMNS};
use crate::pipeline::BuilderError;
use crate::report::{rank_missingness, Summary, MISSINGNESS_LIMIT};
use crate::types::CalendarYear;
use chrono::{Datelike, Local};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs;
use std::path::{absolute, Path, PathBuf};
use tracing::{debug, error, info, warn};

pub const RAW_PATH: &str = "data/raw/Kaggle_LEGO_DATASET.csv";
pub const OUT_PATH: &str = "data/processed/lego_model_ready.csv";

/// Turns the raw listing table into the model-ready table in one synchronous pass.
pub struct DatasetBuilder {
    raw_path: PathBuf,
    output_path: PathBuf,
    reference_year: CalendarYear
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder reading and writing the fixed dataset paths, aging listings
    /// against the current calendar year.
    pub fn new() -> Self {
        Self {
            raw_path: PathBuf::from(RAW_PATH),
            output_path: PathBuf::from(OUT_PATH),
            reference_year: Local::now().year()
        }
    }

    /// Runs every stage from the existence check to the write and returns the run summary.
    ///
    /// # Errors
    /// Returns `BuilderError` if:
    /// - The raw file does not exist.
    /// - The raw header lacks one of the input columns.
    /// - The raw file cannot be read or the output cannot be written.
    ///
    /// Nothing is written unless every earlier stage succeeded.
    pub fn run(&self) -> Result<Summary, BuilderError> {
        if !self.raw_path.is_file() {
            return Err(BuilderError::InputNotFound { path: resolve(&self.raw_path) });
        }

        let raw_listings = self.load()?;
        let rows_before_filter = raw_listings.len();
        info!("Loaded {rows_before_filter} rows from {}", self.raw_path.display());

        let listings = self.filter_positive(raw_listings);
        let rows_after_filter = listings.len();
        info!("{rows_after_filter} rows passed the positivity filter");

        let featured = self.derive_features(listings);
        info!("{} rows have a non-negative age against {}", featured.len(), self.reference_year);

        let records = self.finalize(featured);
        info!("{} rows are model-ready", records.len());

        self.write(&records)?;

        Ok(Summary {
            rows_before_filter,
            rows_after_filter,
            rows_model_ready: records.len(),
            output_path: resolve(&self.output_path),
            missingness: rank_missingness(&records, MISSINGNESS_LIMIT)
        })
    }

    fn load(&self) -> Result<Vec<RawListing>, BuilderError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&self.raw_path)?;

        let headers = reader.byte_headers()?.clone();

        if let Some(column) = INPUT_COLUMNS.into_iter().find(|column| !headers.iter().any(|header| header == column.as_bytes())) {
            return Err(BuilderError::MissingColumn { column, path: resolve(&self.raw_path) });
        }

        let mut raw_listings = Vec::new();

        //NOTE: Only the mapped cells are decoded, bytes in ignored columns never reject a row
        for result in reader.byte_records() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    error!("CSV read error: {error}");
                    continue;
                }
            };

            match record.deserialize::<RawListing>(Some(&headers)) {
                Ok(raw_listing) => raw_listings.push(raw_listing),
                Err(error) => {
                    warn!("Listing cells could not be decoded, treating them as missing | {error}");
                    raw_listings.push(RawListing::default());
                }
            }
        }

        Ok(raw_listings)
    }

    fn filter_positive(&self, raw_listings: Vec<RawListing>) -> Vec<Listing> {
        raw_listings.into_iter()
            .map(Listing::from)
            .filter_map(|mut listing| {
                listing.fill_missing_minifigures();

                if listing.is_positive() {
                    Some(listing)
                } else {
                    debug!("Dropped listing failing the positivity filter: {listing:?}");
                    None
                }
            })
            .collect()
    }

    fn derive_features(&self, listings: Vec<Listing>) -> Vec<(Listing, DerivedFeatures)> {
        listings.into_iter()
            .filter_map(|listing| {
                let features = listing.derive(self.reference_year);

                if features.has_valid_age() {
                    Some((listing, features))
                } else {
                    debug!("Dropped listing released after {}: {listing:?}", self.reference_year);
                    None
                }
            })
            .collect()
    }

    fn finalize(&self, featured: Vec<(Listing, DerivedFeatures)>) -> Vec<ModelRecord> {
        featured.into_iter()
            .map(|(listing, features)| ModelCandidate::project(listing, features))
            .filter_map(|candidate| match ModelRecord::try_from(candidate) {
                Ok(record) => Some(record),
                Err(error) => {
                    debug!("Dropped listing that is not model-ready: {error}");
                    None
                }
            })
            .collect()
    }

    fn write(&self, records: &[ModelRecord]) -> Result<(), BuilderError> {
        if let Some(parent) = self.output_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        //NOTE: The header is written by hand so that an empty table still carries it
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.output_path)?;

        writer.write_record(MODEL_COLUMNS)?;

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;

        Ok(())
    }
}

//NOTE: The binary always runs against the fixed paths and the wall-clock year
#[cfg(test)]
impl DatasetBuilder {
    pub fn with_raw_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Pins the year `age_years` is measured against, making reruns reproducible.
    pub fn with_reference_year(mut self, year: CalendarYear) -> Self {
        self.reference_year = year;
        self
    }
}

fn resolve(path: &Path) -> PathBuf {
    absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
