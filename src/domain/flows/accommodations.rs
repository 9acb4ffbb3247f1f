//! Accommodation price comparison flow.

use serde::{Deserialize, Serialize};

use super::{ComparisonResults, Flow, FlowKind};
use crate::domain::foundation::{require_text, Price, StarRating, ValidationError, WebLink};

/// Hotel search: a city, area, or specific hotel name plus the stay window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationSearch {
    pub search_term: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

impl AccommodationSearch {
    pub fn new(
        search_term: impl Into<String>,
        check_in_date: impl Into<String>,
        check_out_date: impl Into<String>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            check_in_date: check_in_date.into(),
            check_out_date: check_out_date.into(),
        }
    }
}

/// A hotel with its nightly price on several booking sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationOption {
    pub name: String,
    pub rating: StarRating,
    pub image_url: WebLink,
    /// Two-word image hint, e.g. `luxury hotel`.
    pub image_hint: String,
    pub platforms: Vec<PlatformPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPrice {
    pub platform: String,
    /// Price per night.
    pub price: Price,
    pub url: WebLink,
}

pub type AccommodationResults = ComparisonResults<AccommodationOption>;

pub struct CompareAccommodations;

impl Flow for CompareAccommodations {
    const KIND: FlowKind = FlowKind::Accommodations;
    type Input = AccommodationSearch;
    type Output = AccommodationResults;

    fn validate_input(input: &AccommodationSearch) -> Result<(), ValidationError> {
        require_text("searchTerm", &input.search_term)?;
        require_text("checkInDate", &input.check_in_date)?;
        require_text("checkOutDate", &input.check_out_date)
    }
}
