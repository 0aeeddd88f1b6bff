//! Pricing arithmetic for validated requests

use crate::model::{Quote, QuoteRequest};

/// Sales tax applied to every quote
pub const TAX_RATE: f64 = 0.13;

/// Flat surcharge for the signature-on-delivery option
pub const SIGNATURE_ADD_ON_COST: f64 = 2.0;

/// Price a validated request at the given base rate.
///
/// All components are computed at full precision; two-decimal rounding
/// is left to the rendering side so components are never truncated
/// before being combined.
pub fn price(request: QuoteRequest, base_rate: f64) -> Quote {
    let add_on_cost = if request.signature_add_on {
        SIGNATURE_ADD_ON_COST
    } else {
        0.0
    };
    let subtotal = base_rate + add_on_cost;
    let tax = subtotal * TAX_RATE;
    let total = subtotal + tax;

    Quote {
        request,
        base_rate,
        add_on_cost,
        subtotal,
        tax,
        total,
    }
}
