//! Static reference data shared by the ThaiPropertyAI front-ends.
//!
//! Nothing in this crate talks to a network or a payment provider. The
//! subscription table is read-only display data consumed by the UI.

pub mod catalog;

pub use catalog::{product_by_price_id, products_by_mode, BillingMode, Product, PRODUCTS};
