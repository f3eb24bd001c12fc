use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::RecordError;
use crate::models::listing::{DerivedFeatures, Listing};
use crate::models::{
    AFTERMARKET_VALUE_RATIO, AGE_YEARS, CURRENT_PRICE, PIECES, PRICE_PER_PIECE, USD_MSRP
};

/// A listing reduced to the model columns, before completeness is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCandidate {
    pub aftermarket_value_ratio: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub usd_msrp: Option<Decimal>,
    pub price_per_piece: Option<Decimal>,
    pub pieces: Option<Decimal>,
    pub minifigures: Option<Decimal>,
    pub age_years: Option<Decimal>,
    pub theme_group: Option<String>,
    pub availability: Option<String>
}

impl ModelCandidate {
    /// Keeps the model columns of a listing and its derived features, dropping everything else.
    pub fn project(listing: Listing, features: DerivedFeatures) -> Self {
        Self {
            aftermarket_value_ratio: features.aftermarket_value_ratio,
            current_price: listing.current_price.map(|value| value.normalize()),
            usd_msrp: listing.usd_msrp.map(|value| value.normalize()),
            price_per_piece: features.price_per_piece,
            pieces: listing.pieces.map(|value| value.normalize()),
            minifigures: listing.minifigures,
            age_years: features.age_years,
            theme_group: listing.theme_group,
            availability: listing.availability
        }
    }
}

/// One row of the model-ready output table.
///
/// Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    #[serde(rename = "aftermarket_value_ratio")]
    pub aftermarket_value_ratio: Decimal,
    #[serde(rename = "Current_Price")]
    pub current_price: Decimal,
    #[serde(rename = "USD_MSRP")]
    pub usd_msrp: Decimal,
    #[serde(rename = "price_per_piece")]
    pub price_per_piece: Decimal,
    #[serde(rename = "Pieces")]
    pub pieces: Decimal,
    #[serde(rename = "Minifigures")]
    pub minifigures: i64,
    #[serde(rename = "age_years")]
    pub age_years: Decimal,
    #[serde(rename = "Theme_Group")]
    pub theme_group: Option<String>,
    #[serde(rename = "Availability")]
    pub availability: Option<String>
}

impl TryFrom<ModelCandidate> for ModelRecord {
    type Error = RecordError;

    fn try_from(candidate: ModelCandidate) -> Result<Self, Self::Error> {
        let required = |column: &'static str, value: Option<Decimal>| {
            value.ok_or(RecordError::MissingRequired { column })
        };

        let aftermarket_value_ratio = required(AFTERMARKET_VALUE_RATIO, candidate.aftermarket_value_ratio)?;
        let current_price = required(CURRENT_PRICE, candidate.current_price)?;
        let usd_msrp = required(USD_MSRP, candidate.usd_msrp)?;
        let price_per_piece = required(PRICE_PER_PIECE, candidate.price_per_piece)?;
        let pieces = required(PIECES, candidate.pieces)?;
        let age_years = required(AGE_YEARS, candidate.age_years)?;

        let minifigures = candidate.minifigures.unwrap_or(Decimal::ZERO);

        if minifigures < Decimal::ZERO {
            return Err(RecordError::NegativeMinifigures { value: minifigures.to_string() });
        }

        let minifigures = minifigures.trunc().to_i64()
            .ok_or_else(|| RecordError::MinifiguresOutOfRange { value: minifigures.to_string() })?;

        Ok(Self {
            aftermarket_value_ratio,
            current_price,
            usd_msrp,
            price_per_piece,
            pieces,
            minifigures,
            age_years,
            theme_group: candidate.theme_group,
            availability: candidate.availability
        })
    }
}

impl ModelRecord {
    /// Per output column, whether this row has no value. Ordered like `MODEL_COLUMNS`.
    pub fn missing_flags(&self) -> [bool; 9] {
        [
            false,
            false,
            false,
            false,
            false,
            false,
            false,
            self.theme_group.is_none(),
            self.availability.is_none()
        ]
    }
}
