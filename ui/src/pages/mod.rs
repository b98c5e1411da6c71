//! One module per page. `engine` holds the page's pure logic and estimator,
//! `view` renders it.

pub mod comparison;
pub mod consultant;
pub mod forecasting;
pub mod login;
pub mod map;
pub mod prediction;
pub mod register;
pub mod subscription;
pub mod trends;
pub mod valuation;

pub use comparison::ComparisonPage;
pub use consultant::ConsultantPage;
pub use forecasting::ForecastingPage;
pub use login::LoginPage;
pub use map::MapPage;
pub use prediction::PredictionPage;
pub use register::RegisterPage;
pub use subscription::SubscriptionPage;
pub use trends::TrendsPage;
pub use valuation::ValuationPage;
