//! Domain services

pub mod pricing;
pub mod rate_table;
pub mod validator;

pub use pricing::{price, SIGNATURE_ADD_ON_COST, TAX_RATE};
pub use rate_table::base_rate;
pub use validator::validate;

use courier_types::Result;

use crate::model::{Quote, QuoteForm};

/// Run the whole engine for one form: validate, resolve the base rate,
/// price. The first failing validation rule wins and nothing after it
/// runs.
pub fn quote(form: &QuoteForm) -> Result<Quote> {
    let request = validator::validate(form)?;
    let base = rate_table::base_rate(request.category, request.tier);
    Ok(pricing::price(request, base))
}
