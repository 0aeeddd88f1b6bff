//! Raw quote candidate as supplied by the presentation layer

use serde::{Deserialize, Serialize};

use courier_types::{ParcelCategory, ServiceTier};

/// Field values exactly as the UI collected them: free text for the
/// addresses and the weight, selections that may still be unset.
/// Built fresh per quote attempt, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteForm {
    pub sending_address: String,
    pub destination_address: String,
    pub category: Option<ParcelCategory>,
    /// Weight as typed. Parsing is deferred to validation so that a
    /// non-numeric entry is reported as its own rejection, not as a
    /// missing field.
    pub weight_text: String,
    pub tier: Option<ServiceTier>,
    pub signature_add_on: bool,
}
