//! Core types for shipment rate quoting

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// What is being shipped. Determines the weight ceiling and the rate table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelCategory {
    Package,
    /// CLI value "letter"
    #[value(name = "letter")]
    LetterOrDocument,
}

impl ParcelCategory {
    /// Inclusive weight ceiling in pounds
    pub fn max_weight_lbs(&self) -> f64 {
        match self {
            ParcelCategory::Package => 44.0,
            ParcelCategory::LetterOrDocument => 1.1,
        }
    }

    /// User-facing message for a weight-limit rejection
    pub fn limit_message(&self) -> &'static str {
        match self {
            ParcelCategory::Package => "Package: up to 44 lbs allowed.",
            ParcelCategory::LetterOrDocument => "Letter or Document: up to 1.1 lb allowed.",
        }
    }
}

impl std::fmt::Display for ParcelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParcelCategory::Package => write!(f, "Package"),
            ParcelCategory::LetterOrDocument => write!(f, "Letter or Document"),
        }
    }
}

/// Delivery speed chosen by the user. Determines the rate table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Standard,
    Xpress,
    Priority,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] =
        [ServiceTier::Standard, ServiceTier::Xpress, ServiceTier::Priority];
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceTier::Standard => write!(f, "Standard"),
            ServiceTier::Xpress => write!(f, "Xpress"),
            ServiceTier::Priority => write!(f, "Priority"),
        }
    }
}
