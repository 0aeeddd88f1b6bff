//! CLI definition using clap

use clap::{Parser, Subcommand};

use courier_types::{OutputFormat, ParcelCategory, ServiceTier};

#[derive(Parser)]
#[command(name = "courier-rate")]
#[command(version)]
#[command(about = "Parcel rate calculator - quote a shipment or list base rates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a shipment
    Quote {
        /// Sending address
        #[arg(long)]
        from: Option<String>,

        /// Destination address
        #[arg(long)]
        to: Option<String>,

        /// Parcel category (package, letter)
        #[arg(long, short = 'c')]
        category: Option<ParcelCategory>,

        /// Parcel weight in lbs, as entered. Validation reports a
        /// non-numeric value rather than the parser choking on it.
        #[arg(long, short = 'w')]
        weight: Option<String>,

        /// Service tier (standard, xpress, priority)
        #[arg(long, short = 't')]
        tier: Option<ServiceTier>,

        /// Add signature on delivery (+$2)
        #[arg(long)]
        signature: bool,
    },

    /// Show the base rate table
    Rates,
}
