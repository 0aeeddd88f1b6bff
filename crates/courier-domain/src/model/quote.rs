//! Validated request and priced quote types

use serde::{Deserialize, Serialize};

use courier_types::{ParcelCategory, ServiceTier};

/// A quote request that has passed policy validation: addresses are
/// non-empty, the weight parsed and is within the category ceiling.
/// Only the validator constructs one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub sending_address: String,
    pub destination_address: String,
    pub category: ParcelCategory,
    pub weight_lbs: f64,
    pub tier: ServiceTier,
    pub signature_add_on: bool,
}

/// Itemized priced result of a successful validation. Monetary fields
/// are kept at full precision; rounding to two decimals happens only
/// when a value is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Echo of the originating request for display
    pub request: QuoteRequest,
    pub base_rate: f64,
    pub add_on_cost: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}
