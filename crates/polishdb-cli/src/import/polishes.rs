use futures::stream::{self, StreamExt};
use polishdb_client::{CatalogClient, IngestError, IngestOutcome};
use polishdb_core::{AppConfig, PolishPayload};

use super::RunTotals;

/// Submit one composite polish record per normalized row to `/polish/new`.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the client cannot
/// be built. Per-polish failures are logged and skipped, not propagated.
pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let rows = super::load_rows(config)?;
    let payloads: Vec<PolishPayload> = rows.iter().map(PolishPayload::from_row).collect();

    if dry_run {
        for payload in &payloads {
            println!(
                "dry-run: would submit polish {} ({})",
                payload.name, payload.brand_name
            );
        }
        return Ok(());
    }

    let client = super::build_client(config)?;
    let totals = submit_all(&client, &payloads, config.max_concurrent_rows).await;
    totals.print_summary("polishes");
    Ok(())
}

/// Submit polish payloads with bounded concurrency.
///
/// The default of 1 keeps the strict row-order sequencing of the original
/// import. Higher values overlap requests but keep per-row independence:
/// one row's failure never aborts or corrupts another row's submission.
pub(crate) async fn submit_all(
    client: &CatalogClient,
    payloads: &[PolishPayload],
    max_concurrent: usize,
) -> RunTotals {
    let outcomes: Vec<(&PolishPayload, Result<IngestOutcome, IngestError>)> =
        stream::iter(payloads)
            .map(|payload| async move { (payload, client.create_polish(payload).await) })
            .buffer_unordered(max_concurrent.max(1))
            .collect()
            .await;

    let mut totals = RunTotals::default();
    for (payload, result) in outcomes {
        match result {
            Ok(IngestOutcome::Created) => {
                println!("Inserted polish: {}", payload.name);
                totals.created += 1;
            }
            Ok(IngestOutcome::Rejected { status, body }) => {
                // The polish route returns its diagnostics in the response
                // body; surface it raw instead of a friendly message.
                println!(
                    "Failed to insert polish {} (HTTP {status}): {body}",
                    payload.name
                );
                totals.rejected += 1;
            }
            Err(e) => {
                tracing::warn!(polish = %payload.name, error = %e, "polish request failed; continuing");
                totals.failed += 1;
            }
        }
    }
    totals
}
