use polishdb_client::{CatalogClient, IngestOutcome};
use polishdb_core::{split_multi_value, AppConfig, Row};

use super::RunTotals;

/// Submit each row's formula values to `/formulas/new`, in dataset order.
/// This endpoint is called without an Authorization header (preserved
/// upstream quirk, see `Resource::requires_auth`).
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the client cannot
/// be built. Per-formula failures are logged and skipped, not propagated.
pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let rows = super::load_rows(config)?;

    if dry_run {
        for row in &rows {
            for formula in split_multi_value(&row.formula) {
                println!("dry-run: would submit formula {formula}");
            }
        }
        return Ok(());
    }

    let client = super::build_client(config)?;
    let totals = submit_all(&client, &rows).await;
    totals.print_summary("formulas");
    Ok(())
}

/// One request per split formula value, strictly sequential.
pub(crate) async fn submit_all(client: &CatalogClient, rows: &[Row]) -> RunTotals {
    let mut totals = RunTotals::default();
    for row in rows {
        for formula in split_multi_value(&row.formula) {
            match client.create_formula(&formula).await {
                Ok(IngestOutcome::Created) => {
                    println!("Inserted formula: {formula}");
                    totals.created += 1;
                }
                Ok(IngestOutcome::Rejected { status, .. }) => {
                    println!("Formula {formula} already exists in the DB (HTTP {status})");
                    totals.rejected += 1;
                }
                Err(e) => {
                    tracing::warn!(formula = %formula, error = %e, "formula request failed; continuing");
                    totals.failed += 1;
                }
            }
        }
    }
    totals
}
