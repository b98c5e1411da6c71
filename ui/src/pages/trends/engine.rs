//! Market trends: a fixed snapshot served after the usual delay.

use rand::Rng;

use crate::catalog::{MarketSegment, Month, Province, Timeframe};
use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendsRequest {
    pub province: Province,
    pub segment: MarketSegment,
    pub timeframe: Timeframe,
}

impl TryFrom<&FormDraft> for TrendsRequest {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            province: draft.required_choice("location")?,
            segment: draft.required_choice("property_type")?,
            timeframe: draft.required_choice("timeframe")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPoint {
    pub month: Month,
    pub average_price: f64,
    pub transactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaTrend {
    pub name: &'static str,
    pub average_price: f64,
    pub change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub price_index: f64,
    pub average_price: f64,
    pub transactions: u32,
    pub price_change: f64,
    pub monthly: [MonthlyPoint; 6],
    pub top_areas: [AreaTrend; 4],
}

impl MarketSnapshot {
    /// Growth of `point` relative to the first month, in percent.
    pub fn growth_since_start(&self, point: &MonthlyPoint) -> f64 {
        (point.average_price / self.monthly[0].average_price - 1.0) * 100.0
    }
}

const fn point(month: Month, average_price: f64, transactions: u32) -> MonthlyPoint {
    MonthlyPoint {
        month,
        average_price,
        transactions,
    }
}

pub const SNAPSHOT: MarketSnapshot = MarketSnapshot {
    price_index: 125.4,
    average_price: 4_500_000.0,
    transactions: 1_247,
    price_change: 8.5,
    monthly: [
        point(Month::Jan, 4_200_000.0, 98),
        point(Month::Feb, 4_250_000.0, 105),
        point(Month::Mar, 4_300_000.0, 112),
        point(Month::Apr, 4_350_000.0, 118),
        point(Month::May, 4_400_000.0, 125),
        point(Month::Jun, 4_500_000.0, 132),
    ],
    top_areas: [
        AreaTrend {
            name: "Sukhumvit",
            average_price: 6_800_000.0,
            change: 12.3,
        },
        AreaTrend {
            name: "Silom",
            average_price: 5_900_000.0,
            change: 9.8,
        },
        AreaTrend {
            name: "Sathorn",
            average_price: 7_200_000.0,
            change: 15.2,
        },
        AreaTrend {
            name: "Thonglor",
            average_price: 8_500_000.0,
            change: 18.7,
        },
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct TrendsFeed {
    latency: Latency,
}

impl TrendsFeed {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for TrendsFeed {
    type Request = TrendsRequest;
    type Output = MarketSnapshot;
    const NAME: &'static str = "trends";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &TrendsRequest, _rng: &mut R) -> MarketSnapshot {
        SNAPSHOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimation::run;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn request() -> TrendsRequest {
        let draft = FormDraft::with_values([
            ("location", "bangkok"),
            ("property_type", "all"),
            ("timeframe", "1y"),
        ]);
        TrendsRequest::try_from(&draft).unwrap()
    }

    #[test]
    fn segment_accepts_all_types() {
        assert_eq!(request().segment, MarketSegment::All);
    }

    #[test]
    fn snapshot_is_fixed() {
        let feed = TrendsFeed::new(Latency::fixed(0));
        let snapshot = feed.estimate(&request(), &mut StdRng::seed_from_u64(1));
        assert_eq!(snapshot, SNAPSHOT);
        assert_eq!(snapshot.price_index, 125.4);
        assert_eq!(snapshot.transactions, 1_247);
        assert_eq!(snapshot.monthly.len(), 6);
        assert_eq!(snapshot.top_areas[3].name, "Thonglor");
    }

    #[test]
    fn monthly_growth_is_relative_to_january() {
        let june = &SNAPSHOT.monthly[5];
        let growth = SNAPSHOT.growth_since_start(june);
        assert!((growth - 7.142857).abs() < 1e-4);
        assert_eq!(SNAPSHOT.growth_since_start(&SNAPSHOT.monthly[0]), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_arrives_after_two_seconds() {
        let feed = TrendsFeed::new(Latency::fixed(2000));
        let started = tokio::time::Instant::now();
        let snapshot = run(&feed, &request()).await;
        assert_eq!(snapshot, SNAPSHOT);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
