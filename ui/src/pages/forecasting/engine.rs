//! Price forecasting over five fixed horizons.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{
    ForecastPeriod, Horizon, MarketFactor, PropertyType, Province, SelectOption, Sentiment,
};
use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

/// Confidence never reported below this.
pub const CONFIDENCE_FLOOR: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub property_type: PropertyType,
    pub province: Province,
    pub area_sqm: f64,
    pub current_price: f64,
    pub period: ForecastPeriod,
}

impl TryFrom<&FormDraft> for ForecastRequest {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            property_type: draft.required_choice("property_type")?,
            province: draft.required_choice("location")?,
            area_sqm: draft.required_number("area")?,
            current_price: draft.required_number("current_price")?,
            period: draft.required_choice("forecast_period")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub const fn css_modifier(self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonForecast {
    pub horizon: Horizon,
    pub price: f64,
    /// Signed change in percent.
    pub change: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorImpact {
    pub factor: MarketFactor,
    pub impact: f64,
    pub trend: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConditions {
    pub sentiment: Sentiment,
    pub volatility: f64,
    pub liquidity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current_price: f64,
    pub predictions: Vec<HorizonForecast>,
    pub factors: Vec<FactorImpact>,
    pub conditions: MarketConditions,
}

/// `max(95 − 8·index − 20·volatility, 60)`.
pub fn horizon_confidence(index: usize, volatility: f64) -> f64 {
    (95.0 - 8.0 * index as f64 - 20.0 * volatility).max(CONFIDENCE_FLOOR)
}

#[derive(Debug, Clone, Copy)]
pub struct Forecaster {
    latency: Latency,
}

impl Forecaster {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    fn predict<R: Rng + ?Sized>(&self, current_price: f64, rng: &mut R) -> Vec<HorizonForecast> {
        Horizon::ALL
            .iter()
            .enumerate()
            .map(|(index, &horizon)| {
                let volatility = rng.gen_range(0.1..0.4);
                let sign = if rng.gen_bool(0.7) { 1.0 } else { -1.0 };
                let annual = rng.gen_range(0.02..0.17);
                let change = annual * sign * f64::from(horizon.months()) / 12.0;
                HorizonForecast {
                    horizon,
                    price: current_price * (1.0 + change),
                    change: change * 100.0,
                    confidence: horizon_confidence(index, volatility),
                }
            })
            .collect()
    }

    fn factors<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<FactorImpact> {
        let mut impact = |factor, low: f64, high: f64, trend| FactorImpact {
            factor,
            impact: rng.gen_range(low..high),
            trend,
        };
        let location = impact(MarketFactor::Location, 20.0, 60.0, Impact::Positive);
        let infrastructure = impact(MarketFactor::Infrastructure, 10.0, 40.0, Impact::Positive);
        let mut economy = impact(MarketFactor::Economy, 5.0, 30.0, Impact::Positive);
        let rates = impact(MarketFactor::InterestRates, 5.0, 25.0, Impact::Negative);
        let mut supply = impact(MarketFactor::SupplyDemand, 15.0, 50.0, Impact::Negative);
        let policy = impact(MarketFactor::GovernmentPolicy, 5.0, 20.0, Impact::Neutral);

        if rng.gen_bool(0.5) {
            economy.trend = Impact::Negative;
        }
        if rng.gen_bool(0.4) {
            supply.trend = Impact::Positive;
        }
        vec![location, infrastructure, economy, rates, supply, policy]
    }
}

impl MockEstimator for Forecaster {
    type Request = ForecastRequest;
    type Output = Forecast;
    const NAME: &'static str = "forecasting";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, request: &ForecastRequest, rng: &mut R) -> Forecast {
        let predictions = self.predict(request.current_price, rng);
        let factors = self.factors(rng);
        let conditions = MarketConditions {
            sentiment: Sentiment::ALL
                .choose(rng)
                .copied()
                .unwrap_or(Sentiment::Neutral),
            volatility: rng.gen_range(20.0..60.0),
            liquidity: rng.gen_range(60.0..90.0),
        };
        Forecast {
            current_price: request.current_price,
            predictions,
            factors,
            conditions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(price: &str) -> ForecastRequest {
        let draft = FormDraft::with_values([
            ("property_type", "condo"),
            ("location", "chiang_mai"),
            ("area", "80"),
            ("current_price", price),
            ("forecast_period", "medium"),
        ]);
        ForecastRequest::try_from(&draft).unwrap()
    }

    #[test]
    fn current_price_is_required() {
        let draft = FormDraft::with_values([
            ("property_type", "condo"),
            ("location", "chiang_mai"),
            ("area", "80"),
            ("forecast_period", "long"),
        ]);
        assert_eq!(
            ForecastRequest::try_from(&draft),
            Err(DraftError::Missing("current_price"))
        );
    }

    #[test]
    fn predicted_prices_stay_inside_the_horizon_envelope() {
        let forecaster = Forecaster::new(Latency::fixed(0));
        let request = request("5000000");
        let p = request.current_price;
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..300 {
            let forecast = forecaster.estimate(&request, &mut rng);
            assert_eq!(forecast.predictions.len(), 5);
            for prediction in &forecast.predictions {
                let m = f64::from(prediction.horizon.months());
                let low = p * (1.0 - 0.17 * m / 12.0);
                let high = p * (1.0 + 0.17 * m / 12.0);
                assert!(
                    (low..=high).contains(&prediction.price),
                    "{:?} outside [{low}, {high}]",
                    prediction
                );
                let min_move = 0.02 * m / 12.0 * 100.0;
                assert!(prediction.change.abs() >= min_move - 1e-9);
            }
        }
    }

    #[test]
    fn confidence_decreases_with_horizon_until_the_floor() {
        let forecaster = Forecaster::new(Latency::fixed(0));
        let request = request("3000000");
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..300 {
            let forecast = forecaster.estimate(&request, &mut rng);
            for pair in forecast.predictions.windows(2) {
                let (near, far) = (pair[0].confidence, pair[1].confidence);
                assert!(far >= CONFIDENCE_FLOOR);
                if far > CONFIDENCE_FLOOR {
                    assert!(far < near, "{near} then {far}");
                }
            }
        }
    }

    #[test]
    fn confidence_formula_matches_known_points() {
        assert_eq!(horizon_confidence(0, 0.1), 93.0);
        assert_eq!(horizon_confidence(2, 0.25), 74.0);
        assert_eq!(horizon_confidence(4, 0.39), CONFIDENCE_FLOOR);
    }

    #[test]
    fn factor_directions_follow_their_rules() {
        let forecaster = Forecaster::new(Latency::fixed(0));
        let request = request("4000000");
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let forecast = forecaster.estimate(&request, &mut rng);
            let factors: Vec<MarketFactor> = forecast.factors.iter().map(|f| f.factor).collect();
            assert_eq!(factors, MarketFactor::ALL.to_vec());
            let by = |factor| {
                forecast
                    .factors
                    .iter()
                    .find(|f| f.factor == factor)
                    .copied()
                    .unwrap()
            };
            assert_eq!(by(MarketFactor::Location).trend, Impact::Positive);
            assert!((20.0..60.0).contains(&by(MarketFactor::Location).impact));
            assert_eq!(by(MarketFactor::Infrastructure).trend, Impact::Positive);
            assert_ne!(by(MarketFactor::Economy).trend, Impact::Neutral);
            assert_eq!(by(MarketFactor::InterestRates).trend, Impact::Negative);
            assert_ne!(by(MarketFactor::SupplyDemand).trend, Impact::Neutral);
            assert_eq!(by(MarketFactor::GovernmentPolicy).trend, Impact::Neutral);
            assert!((5.0..20.0).contains(&by(MarketFactor::GovernmentPolicy).impact));

            let c = forecast.conditions;
            assert!((20.0..=60.0).contains(&c.volatility));
            assert!((60.0..=90.0).contains(&c.liquidity));
        }
    }
}
