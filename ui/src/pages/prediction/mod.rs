pub mod engine;
pub mod view;

pub use view::PredictionPage;
