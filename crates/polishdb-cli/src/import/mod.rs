//! Import subcommand handlers for the CLI.
//!
//! Each handler loads the CSV, normalizes it, prints the surviving table,
//! and submits records in dataset order. Per-record failures are logged and
//! skipped rather than propagated so one bad record does not abort the run;
//! only configuration and dataset failures are fatal.

pub(crate) mod brands;
pub(crate) mod colors;
pub(crate) mod formulas;
pub(crate) mod polishes;


use polishdb_client::CatalogClient;
use polishdb_core::{load_dataset, normalize, AppConfig, Row};

/// Counters for the end-of-run summary line.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunTotals {
    pub created: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl RunTotals {
    fn print_summary(&self, what: &str) {
        println!(
            "{what}: {} created, {} rejected, {} request failures",
            self.created, self.rejected, self.failed
        );
    }
}

/// Load the CSV and normalize it, printing the resulting table to stdout
/// for manual verification before any requests go out.
pub(crate) fn load_rows(config: &AppConfig) -> anyhow::Result<Vec<Row>> {
    let records = load_dataset(&config.csv_path)?;
    let normalized = normalize(records);
    if normalized.dropped > 0 {
        tracing::warn!(
            dropped = normalized.dropped,
            "dropped incomplete rows during normalization"
        );
    }
    print_rows(&normalized.rows);
    Ok(normalized.rows)
}

fn print_rows(rows: &[Row]) {
    println!("{} rows after cleanup:", rows.len());
    for row in rows {
        println!(
            "  {} | {} | {} | {} | {}",
            row.brand, row.primary_color, row.effects_colors, row.formula, row.name
        );
    }
}

pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    CatalogClient::new(
        &config.server_url,
        config.auth_token.as_deref(),
        config.request_timeout_secs,
    )
    .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))
}
