use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{coerce_number, normalize_label, CalendarYear};

/// A single row of the raw table, exactly as text.
///
/// Columns outside of these seven are ignored by the reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(rename = "USD_MSRP")]
    pub usd_msrp: Option<String>,
    #[serde(rename = "Current_Price")]
    pub current_price: Option<String>,
    #[serde(rename = "Pieces")]
    pub pieces: Option<String>,
    #[serde(rename = "Minifigures")]
    pub minifigures: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Theme_Group")]
    pub theme_group: Option<String>,
    #[serde(rename = "Availability")]
    pub availability: Option<String>
}

/// A listing after best-effort numeric coercion.
///
/// Every numeric field is `None` when the raw text was absent or did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub usd_msrp: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub pieces: Option<Decimal>,
    pub minifigures: Option<Decimal>,
    pub year: Option<Decimal>,
    pub theme_group: Option<String>,
    pub availability: Option<String>
}

/// Features computed from a listing that passed the positivity filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFeatures {
    pub aftermarket_value_ratio: Option<Decimal>,
    pub price_per_piece: Option<Decimal>,
    pub age_years: Option<Decimal>
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        Self {
            usd_msrp: coerce_number(raw.usd_msrp.as_deref()),
            current_price: coerce_number(raw.current_price.as_deref()),
            pieces: coerce_number(raw.pieces.as_deref()),
            minifigures: coerce_number(raw.minifigures.as_deref()),
            year: coerce_number(raw.year.as_deref()),
            theme_group: normalize_label(raw.theme_group),
            availability: normalize_label(raw.availability)
        }
    }
}

impl Listing {
    /// A listing without minifigure data is taken to have none.
    pub fn fill_missing_minifigures(&mut self) {
        self.minifigures.get_or_insert(Decimal::ZERO);
    }

    /// Whether price, piece count and release year are all strictly positive.
    ///
    /// Missing values fail the check.
    pub fn is_positive(&self) -> bool {
        let positive = |value: Option<Decimal>| value.is_some_and(|value| value > Decimal::ZERO);

        positive(self.usd_msrp)
            && positive(self.current_price)
            && positive(self.pieces)
            && positive(self.year)
    }

    /// Computes the value ratio, unit price and age relative to `reference_year`.
    ///
    /// Division and subtraction are checked; an overflow yields a missing feature.
    pub fn derive(&self, reference_year: CalendarYear) -> DerivedFeatures {
        let divide = |numerator: Option<Decimal>, denominator: Option<Decimal>| {
            numerator?.checked_div(denominator?).map(|value| value.normalize())
        };

        DerivedFeatures {
            aftermarket_value_ratio: divide(self.current_price, self.usd_msrp),
            price_per_piece: divide(self.usd_msrp, self.pieces),
            age_years: self.year
                .and_then(|year| Decimal::from(reference_year).checked_sub(year))
                .map(|age| age.normalize())
        }
    }
}

impl DerivedFeatures {
    /// Releases dated after the reference year have a negative age and are excluded.
    pub fn has_valid_age(&self) -> bool {
        self.age_years.is_some_and(|age| age >= Decimal::ZERO)
    }
}
