//! Subscription product catalog.

use serde::Serialize;

/// How a product is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingMode {
    Payment,
    Subscription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub price_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mode: BillingMode,
    /// Display price; the catalog stores a label, not an amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'static str>,
}

pub const PRODUCTS: &[Product] = &[Product {
    price_id: "price_1RbzIbR9EITXQuWq5DD9w8PW",
    name: "ThaiProperty",
    description: "Access to premium Thai property AI features and analytics",
    mode: BillingMode::Subscription,
    price: Some("Free"),
    currency: Some("THB"),
}];

/// Look up a product by its price id.
pub fn product_by_price_id(price_id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.price_id == price_id)
}

/// All products billed with `mode`, in catalog order.
pub fn products_by_mode(mode: BillingMode) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|product| product.mode == mode).collect()
}
