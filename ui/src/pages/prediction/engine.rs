//! Price prediction: request parsing and the sampled estimate.

use rand::Rng;

use crate::catalog::{PropertyType, Province};
use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub property_type: PropertyType,
    pub province: Province,
    pub area_sqm: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub parking: Option<f64>,
    pub age_years: Option<f64>,
    pub floor: Option<f64>,
}

impl TryFrom<&FormDraft> for PredictionRequest {
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
        })
    }
}

/// Relative weight (percent) of each driver shown next to the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFactors {
    pub location: f64,
    pub size: f64,
    pub age: f64,
    pub amenities: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePrediction {
    pub estimated_price: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub confidence: f64,
    pub factors: PriceFactors,
}

#[derive(Debug, Clone, Copy)]
pub struct PricePredictor {
    latency: Latency,
}

impl PricePredictor {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for PricePredictor {
    type Request = PredictionRequest;
    type Output = PricePrediction;
    const NAME: &'static str = "prediction";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &PredictionRequest, rng: &mut R) -> PricePrediction {
        let estimated_price = rng.gen_range(2_000_000.0..12_000_000.0);
        PricePrediction {
            estimated_price,
            price_min: estimated_price * 0.9,
            price_max: estimated_price * 1.1,
            confidence: rng.gen_range(80.0..100.0),
            factors: PriceFactors {
                location: rng.gen_range(20.0..60.0),
                size: rng.gen_range(15.0..45.0),
                age: rng.gen_range(10.0..30.0),
                amenities: rng.gen_range(5.0..20.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_draft() -> FormDraft {
        FormDraft::with_values([
            ("property_type", "condo"),
            ("location", "bangkok"),
            ("area", "50"),
            ("bedrooms", "2"),
            ("bathrooms", "1"),
        ])
    }

    fn request() -> PredictionRequest {
        PredictionRequest::try_from(&filled_draft()).unwrap()
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let request = request();
        assert_eq!(request.property_type, PropertyType::Condo);
        assert_eq!(request.province, Province::Bangkok);
        assert_eq!(request.area_sqm, 50.0);
        assert_eq!(request.parking, None);
        assert_eq!(request.floor, None);
    }

    #[test]
    fn missing_required_field_blocks_submission() {
        let mut draft = filled_draft();
        draft.set("bathrooms", "");
        assert_eq!(
            PredictionRequest::try_from(&draft),
            Err(DraftError::Missing("bathrooms"))
        );
    }

    #[test]
    fn non_numeric_optional_field_blocks_submission() {
        let mut draft = filled_draft();
        draft.set("floor", "ten");
        assert!(matches!(
            PredictionRequest::try_from(&draft),
            Err(DraftError::NotANumber { field: "floor", .. })
        ));
    }

    #[test]
    fn estimates_stay_within_their_ranges() {
        let predictor = PricePredictor::new(Latency::fixed(0));
        let request = request();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = predictor.estimate(&request, &mut rng);
            assert!((2_000_000.0..12_000_000.0).contains(&p.estimated_price));
            assert!((p.price_min - 0.9 * p.estimated_price).abs() < 1e-6);
            assert!((p.price_max - 1.1 * p.estimated_price).abs() < 1e-6);
            assert!((80.0..=100.0).contains(&p.confidence));
            assert!((20.0..60.0).contains(&p.factors.location));
            assert!((15.0..45.0).contains(&p.factors.size));
            assert!((10.0..30.0).contains(&p.factors.age));
            assert!((5.0..20.0).contains(&p.factors.amenities));
        }
    }
}
