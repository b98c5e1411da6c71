//! Subscription activation: a fixed processing delay, then the plan from the
//! static product table.

use api::{products_by_mode, BillingMode, Product};
use rand::Rng;

use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

#[derive(Debug, Clone, Copy)]
pub struct Activation {
    latency: Latency,
}

impl Activation {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for Activation {
    type Request = ();
    type Output = Option<&'static Product>;
    const NAME: &'static str = "subscription";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &(), _rng: &mut R) -> Option<&'static Product> {
        products_by_mode(BillingMode::Subscription).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimation::run;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn activation_returns_the_subscription_plan() {
        let started = tokio::time::Instant::now();
        let plan = run(&Activation::new(Latency::fixed(3000)), &()).await;
        assert!(started.elapsed() >= Duration::from_millis(3000));
        let plan = plan.expect("catalog has a subscription product");
        assert_eq!(plan.name, "ThaiProperty");
        assert_eq!(plan.mode, BillingMode::Subscription);
    }
}
