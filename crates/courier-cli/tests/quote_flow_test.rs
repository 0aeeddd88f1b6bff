//! End-to-end quote flow tests
//!
//! Drives the full engine (validate -> rate lookup -> pricing) through
//! the same library API the CLI handlers use.

use courier_domain::model::QuoteForm;
use courier_domain::service::quote;
use courier_types::{ParcelCategory, RejectionReason, ServiceTier};

fn form(
    category: ParcelCategory,
    tier: ServiceTier,
    weight: &str,
    signature: bool,
) -> QuoteForm {
    QuoteForm {
        sending_address: "12 Elm St, Toronto".to_string(),
        destination_address: "9 Oak Ave, Ottawa".to_string(),
        category: Some(category),
        weight_text: weight.to_string(),
        tier: Some(tier),
        signature_add_on: signature,
    }
}

/// Standard package, 10 lbs, no signature
#[test]
fn test_standard_package_quote() {
    let result = quote(&form(
        ParcelCategory::Package,
        ServiceTier::Standard,
        "10",
        false,
    ))
    .unwrap();

    assert_eq!(result.base_rate, 12.99);
    assert_eq!(result.add_on_cost, 0.0);
    assert_eq!(result.subtotal, 12.99);
    assert_eq!(format!("{:.2}", result.tax), "1.69");
    assert_eq!(format!("{:.2}", result.total), "14.68");
}

/// Priority letter at the exact weight ceiling, with signature
#[test]
fn test_priority_letter_at_limit() {
    let result = quote(&form(
        ParcelCategory::LetterOrDocument,
        ServiceTier::Priority,
        "1.1",
        true,
    ))
    .unwrap();

    assert_eq!(result.base_rate, 14.99);
    assert_eq!(result.add_on_cost, 2.0);
    assert!((result.subtotal - 16.99).abs() < 1e-9);
    assert_eq!(format!("{:.2}", result.tax), "2.21");
    assert_eq!(format!("{:.2}", result.total), "19.20");
}

/// Overweight package is rejected with the category and its limit
#[test]
fn test_overweight_package_rejected() {
    let reason = quote(&form(
        ParcelCategory::Package,
        ServiceTier::Standard,
        "50",
        false,
    ))
    .unwrap_err();

    assert_eq!(
        reason,
        RejectionReason::WeightLimitExceeded {
            category: ParcelCategory::Package
        }
    );
    assert_eq!(reason.exceeded_limit_lbs(), Some(44.0));
    assert_eq!(reason.to_string(), "Package: up to 44 lbs allowed.");
}

/// Missing destination address is rejected before anything is priced
#[test]
fn test_missing_destination_rejected() {
    let mut f = form(ParcelCategory::Package, ServiceTier::Standard, "10", false);
    f.destination_address = String::new();

    let reason = quote(&f).unwrap_err();
    assert_eq!(reason, RejectionReason::MissingFields);
    assert_eq!(reason.to_string(), "All fields are required.");
}

/// Non-numeric weight with every other field valid
#[test]
fn test_non_numeric_weight_rejected() {
    let reason = quote(&form(
        ParcelCategory::Package,
        ServiceTier::Standard,
        "heavy",
        false,
    ))
    .unwrap_err();

    assert_eq!(reason, RejectionReason::InvalidWeightFormat);
    assert_eq!(reason.to_string(), "Weight must be a valid number.");
}

/// Identical input quotes identically
#[test]
fn test_quote_idempotent() {
    let f = form(ParcelCategory::Package, ServiceTier::Xpress, "20.5", true);
    let first = quote(&f).unwrap();
    let second = quote(&f).unwrap();
    assert_eq!(first, second);

    let bad = form(ParcelCategory::LetterOrDocument, ServiceTier::Xpress, "2", false);
    assert_eq!(quote(&bad).unwrap_err(), quote(&bad).unwrap_err());
}

/// The quote serializes with the request echoed for display
#[test]
fn test_quote_json_shape() {
    let result = quote(&form(
        ParcelCategory::Package,
        ServiceTier::Priority,
        "3",
        true,
    ))
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["base_rate"], 24.99);
    assert_eq!(json["add_on_cost"], 2.0);
    assert_eq!(json["request"]["category"], "package");
    assert_eq!(json["request"]["tier"], "priority");
    assert_eq!(json["request"]["sending_address"], "12 Elm St, Toronto");
    assert_eq!(json["request"]["signature_add_on"], true);
}
