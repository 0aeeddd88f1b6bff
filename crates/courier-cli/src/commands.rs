//! Command handlers

use thiserror::Error;

use courier_domain::model::QuoteForm;
use courier_domain::service;
use courier_types::RejectionReason;

use crate::cli::{Cli, Commands};
use crate::output::{output_quote, output_rate_table};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Rejected(#[from] RejectionReason),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn execute(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Quote {
            from,
            to,
            category,
            weight,
            tier,
            signature,
        } => {
            let form = QuoteForm {
                sending_address: from.unwrap_or_default(),
                destination_address: to.unwrap_or_default(),
                category,
                weight_text: weight.unwrap_or_default(),
                tier,
                signature_add_on: signature,
            };
            let quote = service::quote(&form)?;
            output_quote(cli.format, &quote)?;
            Ok(())
        }
        Commands::Rates => {
            output_rate_table(cli.format)?;
            Ok(())
        }
    }
}
