//! Policy validation for quote requests

use courier_types::{RejectionReason, Result};

use crate::model::{QuoteForm, QuoteRequest};

/// Validate a raw form against shipping policy.
///
/// Rules are applied in order and the first failing rule wins:
/// 1. All five required fields present (both addresses, category,
///    weight text, tier).
/// 2. Weight text parses as a finite positive decimal.
/// 3. Weight within the category ceiling, ceiling inclusive.
///
/// On success the request comes back fully typed, with the addresses
/// trimmed and the weight parsed.
pub fn validate(form: &QuoteForm) -> Result<QuoteRequest> {
    let sending_address = form.sending_address.trim();
    let destination_address = form.destination_address.trim();
    let weight_text = form.weight_text.trim();

    if sending_address.is_empty() || destination_address.is_empty() || weight_text.is_empty() {
        return Err(RejectionReason::MissingFields);
    }
    let (Some(category), Some(tier)) = (form.category, form.tier) else {
        return Err(RejectionReason::MissingFields);
    };

    let weight_lbs: f64 = weight_text
        .parse()
        .map_err(|_| RejectionReason::InvalidWeightFormat)?;
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
        return Err(RejectionReason::InvalidWeightFormat);
    }

    if weight_lbs > category.max_weight_lbs() {
        return Err(RejectionReason::WeightLimitExceeded { category });
    }

    Ok(QuoteRequest {
        sending_address: sending_address.to_string(),
        destination_address: destination_address.to_string(),
        category,
        weight_lbs,
        tier,
        signature_add_on: form.signature_add_on,
    })
}
