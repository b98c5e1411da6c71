//! Property valuation: market and rental value, scores, and a recommendation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Amenity, Condition, PropertyType, Province, RiskLevel, SelectOption};
use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

/// Monthly rent as a share of market value.
pub const RENT_YIELD_PER_MONTH: f64 = 0.004;

/// Draft group holding the amenity checkboxes.
pub const AMENITY_GROUP: &str = "amenities";

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    pub property_type: PropertyType,
    pub province: Province,
    pub area_sqm: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub parking: Option<f64>,
    pub age_years: Option<f64>,
    pub floor: Option<f64>,
    pub condition: Condition,
    pub amenities: Vec<Amenity>,
}

impl TryFrom<&FormDraft> for ValuationRequest {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            property_type: draft.required_choice("property_type")?,
            province: draft.required_choice("location")?,
            area_sqm: draft.required_number("area")?,
            bedrooms: draft.required_number("bedrooms")?,
            bathrooms: draft.required_number("bathrooms")?,
            parking: draft.optional_number("parking")?,
            age_years: draft.optional_number("age")?,
            floor: draft.optional_number("floor")?,
            condition: draft.required_choice("condition")?,
            amenities: draft.checked_choices(AMENITY_GROUP),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Hold,
}

/// Colour band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub const fn css_modifier(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub market_value: f64,
    pub rent_value: f64,
    pub investment_score: f64,
    pub liquidity_score: f64,
    pub appreciation: f64,
    pub risk: RiskLevel,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy)]
pub struct Valuer {
    latency: Latency,
}

impl Valuer {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for Valuer {
    type Request = ValuationRequest;
    type Output = Valuation;
    const NAME: &'static str = "valuation";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &ValuationRequest, rng: &mut R) -> Valuation {
        let market_value = rng.gen_range(3_000_000.0..18_000_000.0);
        Valuation {
            market_value,
            rent_value: market_value * RENT_YIELD_PER_MONTH,
            investment_score: rng.gen_range(70.0..100.0),
            liquidity_score: rng.gen_range(60.0..100.0),
            appreciation: rng.gen_range(5.0..20.0),
            risk: RiskLevel::ALL
                .choose(rng)
                .copied()
                .unwrap_or(RiskLevel::Medium),
            recommendation: if rng.gen_bool(0.7) {
                Recommendation::Buy
            } else {
                Recommendation::Hold
            },
        }
    }
}
