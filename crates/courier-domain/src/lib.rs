//! Rate quotation engine - models and services
//!
//! Control flow: normalize -> validate -> resolve base rate -> price.
//! A validation failure short-circuits with a [`courier_types::RejectionReason`];
//! no later stage runs. Every call is a pure function of its inputs and
//! the fixed rate table.

pub mod model;
pub mod service;

pub use model::{Quote, QuoteForm, QuoteRequest};
pub use service::quote;
