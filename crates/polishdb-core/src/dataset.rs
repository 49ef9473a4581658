//! Source reader: loads the Notion CSV dump into an in-memory table.
//!
//! The dataset is loaded once, in file order, and is read-only afterwards.
//! Any failure here (missing file, malformed CSV, missing header) is fatal
//! to the whole run.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::DatasetError;

/// Column headers the source CSV must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Brand", "Primary Color", "Effects Colors", "Formula", "Name"];

/// One record as it appears in the source file. Empty cells deserialize to
/// `None`; the normalizer is responsible for dropping incomplete records.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Primary Color")]
    pub primary_color: Option<String>,
    #[serde(rename = "Effects Colors")]
    pub effects_colors: Option<String>,
    #[serde(rename = "Formula")]
    pub formula: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
}

/// Parse the CSV at `path` into records, preserving file order.
///
/// # Errors
///
/// - [`DatasetError::Io`] if the file cannot be opened.
/// - [`DatasetError::MissingColumn`] if a required header is absent.
/// - [`DatasetError::Csv`] if the file is not well-formed CSV.
pub fn load_dataset(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: display.clone(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| DatasetError::Csv {
        path: display.clone(),
        source: e,
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                path: display.clone(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        let record = result.map_err(|e| DatasetError::Csv {
            path: display.clone(),
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn load_dataset_reads_rows_in_file_order() {
        let records = load_dataset(&fixture("kat_sample.csv")).expect("fixture should load");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].brand.as_deref(), Some("OPI (Discontinued)"));
        assert_eq!(records[1].brand.as_deref(), Some("Essie"));
        assert_eq!(records[2].name.as_deref(), Some("Bubble Bath"));
    }

    #[test]
    fn load_dataset_maps_empty_cells_to_none() {
        let records = load_dataset(&fixture("kat_sample.csv")).expect("fixture should load");
        // Second row has an empty Primary Color cell.
        assert!(records[1].primary_color.is_none());
    }

    #[test]
    fn load_dataset_rejects_missing_column() {
        let result = load_dataset(&fixture("missing_formula_column.csv"));
        assert!(
            matches!(result, Err(DatasetError::MissingColumn { ref column, .. }) if column == "Formula"),
            "expected MissingColumn(Formula), got: {result:?}"
        );
    }

    #[test]
    fn load_dataset_missing_file_is_io_error() {
        let result = load_dataset(&fixture("does_not_exist.csv"));
        assert!(
            matches!(result, Err(DatasetError::Io { .. })),
            "expected Io error, got: {result:?}"
        );
    }
}
