//! Fixed base-rate table

use courier_types::{ParcelCategory, ServiceTier};

/// Base rate in dollars for a category and service tier.
///
/// The table is total: every valid pair has a cell, so there is no
/// fallback branch and no way to get an undefined rate.
pub fn base_rate(category: ParcelCategory, tier: ServiceTier) -> f64 {
    match (category, tier) {
        (ParcelCategory::Package, ServiceTier::Standard) => 12.99,
        (ParcelCategory::Package, ServiceTier::Xpress) => 18.99,
        (ParcelCategory::Package, ServiceTier::Priority) => 24.99,
        (ParcelCategory::LetterOrDocument, ServiceTier::Standard) => 4.99,
        (ParcelCategory::LetterOrDocument, ServiceTier::Xpress) => 9.99,
        (ParcelCategory::LetterOrDocument, ServiceTier::Priority) => 14.99,
    }
}
