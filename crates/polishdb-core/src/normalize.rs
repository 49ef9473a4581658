//! Row normalizer: brand cleanup plus the completeness filter.
//!
//! Notion exports decorate brand cells with parenthetical metadata like
//! `"OPI (Discontinued)"`; that is stripped here. Records with any missing
//! field are dropped, so downstream code works with fully-populated rows
//! and never re-checks for absent values.

use regex::Regex;

use crate::dataset::RawRecord;

/// A fully-populated source record. Every field is guaranteed non-missing
/// by [`normalize`]; `effects_colors` and `formula` are still raw
/// comma-separated text (see `payload::split_multi_value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub brand: String,
    pub primary_color: String,
    pub effects_colors: String,
    pub formula: String,
    pub name: String,
}

/// Result of normalizing a dataset: the surviving rows in file order, plus
/// how many records were dropped for missing fields.
#[derive(Debug)]
pub struct Normalized {
    pub rows: Vec<Row>,
    pub dropped: usize,
}

/// Remove parenthesized annotations (and any whitespace run preceding them)
/// from a brand cell, then trim. Idempotent: a stripped value passes through
/// unchanged.
#[must_use]
pub fn strip_brand_metadata(brand: &str) -> String {
    let paren = Regex::new(r"\s*\(.*?\)").expect("valid paren metadata regex");
    paren.replace_all(brand, "").trim().to_string()
}

/// Apply brand cleanup and drop every record with a missing field.
///
/// Order is preserved; the output never contains a `None`-derived field.
#[must_use]
pub fn normalize(records: Vec<RawRecord>) -> Normalized {
    let total = records.len();
    let rows: Vec<Row> = records.into_iter().filter_map(complete_row).collect();
    let dropped = total - rows.len();
    Normalized { rows, dropped }
}

fn complete_row(record: RawRecord) -> Option<Row> {
    Some(Row {
        brand: strip_brand_metadata(&record.brand?),
        primary_color: record.primary_color?,
        effects_colors: record.effects_colors?,
        formula: record.formula?,
        name: record.name?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        brand: Option<&str>,
        primary_color: Option<&str>,
        effects_colors: Option<&str>,
        formula: Option<&str>,
        name: Option<&str>,
    ) -> RawRecord {
        RawRecord {
            brand: brand.map(str::to_string),
            primary_color: primary_color.map(str::to_string),
            effects_colors: effects_colors.map(str::to_string),
            formula: formula.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn strip_brand_metadata_removes_trailing_annotation() {
        assert_eq!(strip_brand_metadata("OPI (Discontinued)"), "OPI");
    }

    #[test]
    fn strip_brand_metadata_removes_multiple_annotations() {
        assert_eq!(
            strip_brand_metadata("Holo Taco (LE) (2021)"),
            "Holo Taco"
        );
    }

    #[test]
    fn strip_brand_metadata_trims_whitespace() {
        assert_eq!(strip_brand_metadata("  Essie  "), "Essie");
    }

    #[test]
    fn strip_brand_metadata_leaves_plain_names_alone() {
        assert_eq!(strip_brand_metadata("China Glaze"), "China Glaze");
    }

    #[test]
    fn strip_brand_metadata_is_idempotent() {
        let once = strip_brand_metadata("OPI (Discontinued)");
        let twice = strip_brand_metadata(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_drops_records_with_missing_fields() {
        let records = vec![
            raw(Some("OPI"), Some("Red"), Some("Gold"), Some("Lacquer"), Some("A")),
            raw(Some("Essie"), None, Some("Shimmer"), Some("Cream"), Some("B")),
            raw(None, Some("Pink"), Some("Pearl"), Some("Gel"), Some("C")),
            raw(Some("ILNP"), Some("Blue"), Some("Holo"), Some("Lacquer"), Some("D")),
        ];
        let normalized = normalize(records);
        assert_eq!(normalized.rows.len(), 2);
        assert_eq!(normalized.dropped, 2);
        assert_eq!(normalized.rows[0].name, "A");
        assert_eq!(normalized.rows[1].name, "D");
    }

    #[test]
    fn normalize_applies_brand_cleanup() {
        let records = vec![raw(
            Some("OPI (Discontinued)"),
            Some("Red"),
            Some("Gold, Shimmer"),
            Some("Lacquer, Gel"),
            Some("Big Apple Red"),
        )];
        let normalized = normalize(records);
        assert_eq!(normalized.rows[0].brand, "OPI");
        assert_eq!(normalized.dropped, 0);
    }

    #[test]
    fn normalize_preserves_order() {
        let records = vec![
            raw(Some("B1"), Some("Red"), Some("x"), Some("y"), Some("first")),
            raw(Some("B2"), Some("Blue"), Some("x"), Some("y"), Some("second")),
        ];
        let normalized = normalize(records);
        let names: Vec<&str> = normalized.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
