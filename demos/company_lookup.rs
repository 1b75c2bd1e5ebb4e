//! Queries the live ANAF registry. Run with:
//! `cargo run --example company_lookup --features anaf -- RO18547290 [more CUIs...]`

use cuival::anaf::{AnafClient, index_by_cui};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cuis: Vec<String> = std::env::args().skip(1).collect();
    if cuis.is_empty() {
        eprintln!("usage: company_lookup <CUI> [<CUI>...]");
        std::process::exit(2);
    }

    let client = AnafClient::new()?;
    let results = client.lookup_batch(&cuis).await?;

    // Results are found-then-notfound, not input order
    let by_cui = index_by_cui(&results);
    for (cui, info) in &by_cui {
        if info.found_in_registry {
            println!(
                "{cui}: {} (vat_payer={}, inactive={})",
                info.company_name.as_deref().unwrap_or("<unnamed>"),
                info.is_vat_payer,
                info.is_inactive
            );
        } else {
            println!("{cui}: not found in registry");
        }
    }

    Ok(())
}
