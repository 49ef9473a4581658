use polishdb_client::{CatalogClient, IngestOutcome};
use polishdb_core::{split_multi_value, AppConfig, Row};

use super::RunTotals;

/// Submit colors to `/colors/new`: every row's primary color first, then
/// every row's effect colors, matching the original import order.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the client cannot
/// be built. Per-color failures are logged and skipped, not propagated.
pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let rows = super::load_rows(config)?;

    if dry_run {
        for row in &rows {
            println!("dry-run: would submit color {}", row.primary_color);
        }
        for row in &rows {
            for effect in split_multi_value(&row.effects_colors) {
                println!("dry-run: would submit effect color {effect}");
            }
        }
        return Ok(());
    }

    let client = super::build_client(config)?;
    let totals = submit_all(&client, &rows).await;
    totals.print_summary("colors");
    Ok(())
}

/// Two sequential passes: primaries, then split effect colors. Duplicate
/// names are submitted as-is; the remote API rejects them.
pub(crate) async fn submit_all(client: &CatalogClient, rows: &[Row]) -> RunTotals {
    let mut totals = RunTotals::default();
    for row in rows {
        submit_color(client, &row.primary_color, "color", &mut totals).await;
    }
    for row in rows {
        for effect in split_multi_value(&row.effects_colors) {
            submit_color(client, &effect, "effect color", &mut totals).await;
        }
    }
    totals
}

async fn submit_color(client: &CatalogClient, name: &str, label: &str, totals: &mut RunTotals) {
    match client.create_color(name).await {
        Ok(IngestOutcome::Created) => {
            println!("Inserted {label}: {name}");
            totals.created += 1;
        }
        Ok(IngestOutcome::Rejected { status, .. }) => {
            println!("{label} {name} already exists in the DB (HTTP {status})");
            totals.rejected += 1;
        }
        Err(e) => {
            tracing::warn!(color = %name, error = %e, "color request failed; continuing");
            totals.failed += 1;
        }
    }
}
