mod errors;
mod listing;
mod record;

pub use errors::RecordError;
pub use listing::{DerivedFeatures, Listing, RawListing};
pub use record::{ModelCandidate, ModelRecord};

pub const USD_MSRP: &str = "USD_MSRP";
pub const CURRENT_PRICE: &str = "Current_Price";
pub const PIECES: &str = "Pieces";
pub const MINIFIGURES: &str = "Minifigures";
pub const YEAR: &str = "Year";
pub const THEME_GROUP: &str = "Theme_Group";
pub const AVAILABILITY: &str = "Availability";
pub const AFTERMARKET_VALUE_RATIO: &str = "aftermarket_value_ratio";
pub const PRICE_PER_PIECE: &str = "price_per_piece";
pub const AGE_YEARS: &str = "age_years";

/// Columns the raw table must provide.
pub const INPUT_COLUMNS: [&str; 7] = [
    USD_MSRP,
    CURRENT_PRICE,
    PIECES,
    MINIFIGURES,
    YEAR,
    THEME_GROUP,
    AVAILABILITY
];

/// Output columns, in write order.
pub const MODEL_COLUMNS: [&str; 9] = [
    AFTERMARKET_VALUE_RATIO,
    CURRENT_PRICE,
    USD_MSRP,
    PRICE_PER_PIECE,
    PIECES,
    MINIFIGURES,
    AGE_YEARS,
    THEME_GROUP,
    AVAILABILITY
];
