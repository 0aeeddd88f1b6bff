//! Output formatting module

use courier_domain::model::Quote;
use courier_domain::service::base_rate;
use courier_types::{OutputFormat, ParcelCategory, ServiceTier};

pub fn output_quote(format: OutputFormat, quote: &Quote) -> Result<(), serde_json::Error> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
    } else {
        let request = &quote.request;

        println!("\nOrder Summary");
        println!("=============");
        println!("From:      {}", request.sending_address);
        println!("To:        {}", request.destination_address);
        println!("Type:      {}", request.category);
        println!("Weight:    {} lbs", request.weight_lbs);
        println!("Rate:      {}: ${:.2}", request.tier, quote.base_rate);

        if request.signature_add_on {
            println!("Signature Add-On: ${:.2}", quote.add_on_cost);
        }

        println!("Sub Total: ${:.2}", quote.subtotal);
        println!("Tax (13%): ${:.2}", quote.tax);
        println!("Total:     ${:.2}", quote.total);
    }

    Ok(())
}

pub fn output_rate_table(format: OutputFormat) -> Result<(), serde_json::Error> {
    let categories = [ParcelCategory::Package, ParcelCategory::LetterOrDocument];

    if format == OutputFormat::Json {
        let mut rows = serde_json::Map::new();
        for category in categories {
            let mut row = serde_json::Map::new();
            for tier in ServiceTier::ALL {
                row.insert(tier.to_string(), base_rate(category, tier).into());
            }
            rows.insert(category.to_string(), row.into());
        }
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
    } else {
        println!("\nBase Rates ($)");
        println!("==============");
        println!(
            "{:<20} {:>8} {:>8} {:>8}",
            "Category", "Standard", "Xpress", "Priority"
        );
        for category in categories {
            println!(
                "{:<20} {:>8.2} {:>8.2} {:>8.2}",
                category.to_string(),
                base_rate(category, ServiceTier::Standard),
                base_rate(category, ServiceTier::Xpress),
                base_rate(category, ServiceTier::Priority),
            );
        }
    }

    Ok(())
}
