//! Rejection types for the quotation engine

use thiserror::Error;

use crate::ParcelCategory;

/// Why a quote attempt was turned down. Every variant is a user-input
/// problem the caller can surface and let the user correct; the engine
/// itself never aborts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RejectionReason {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Weight must be a valid number.")]
    InvalidWeightFormat,

    #[error("{}", .category.limit_message())]
    WeightLimitExceeded { category: ParcelCategory },
}

impl RejectionReason {
    /// The ceiling that was exceeded, if this is a weight-limit rejection
    pub fn exceeded_limit_lbs(&self) -> Option<f64> {
        match self {
            RejectionReason::WeightLimitExceeded { category } => Some(category.max_weight_lbs()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RejectionReason>;
