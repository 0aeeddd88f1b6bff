//! Domain model types

pub mod quote;
pub mod quote_form;

pub use quote::{Quote, QuoteRequest};
pub use quote_form::QuoteForm;
