use polishdb_client::{CatalogClient, IngestOutcome};
use polishdb_core::AppConfig;

use super::RunTotals;

/// Submit each normalized row's brand to `/brands/new`, in dataset order.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the client cannot
/// be built. Per-brand failures are logged and skipped, not propagated.
pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let rows = super::load_rows(config)?;
    let names: Vec<String> = rows.into_iter().map(|r| r.brand).collect();

    if dry_run {
        for name in &names {
            println!("dry-run: would submit brand {name}");
        }
        return Ok(());
    }

    let client = super::build_client(config)?;
    let totals = submit_all(&client, &names).await;
    totals.print_summary("brands");
    Ok(())
}

/// One request per brand, strictly sequential: no submission begins before
/// the previous response arrives.
pub(crate) async fn submit_all(client: &CatalogClient, names: &[String]) -> RunTotals {
    let mut totals = RunTotals::default();
    for name in names {
        match client.create_brand(name).await {
            Ok(IngestOutcome::Created) => {
                println!("Inserted brand: {name}");
                totals.created += 1;
            }
            Ok(IngestOutcome::Rejected { status, .. }) => {
                // The API answers duplicates with a non-200; the status is
                // included because the same shape covers real failures too.
                println!("Brand {name} already exists in the DB (HTTP {status})");
                totals.rejected += 1;
            }
            Err(e) => {
                tracing::warn!(brand = %name, error = %e, "brand request failed; continuing");
                totals.failed += 1;
            }
        }
    }
    totals
}
