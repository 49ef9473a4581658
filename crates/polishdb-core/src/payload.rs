//! Record builder: turns a normalized row into the composite payload the
//! polish endpoint expects. Pure transformation, no side effects.

use crate::normalize::Row;

/// Every imported polish is created with this fixed type; the source export
/// does not carry a type column.
pub const POLISH_TYPE: &str = "Lacquer";

/// Split a comma-separated cell into trimmed, non-empty items.
///
/// Order is preserved and duplicates are kept. Trimming after the split
/// makes `"a, b"` and `"a,b"` equivalent.
#[must_use]
pub fn split_multi_value(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Composite record submitted to `/polish/new`. Built per row, sent once,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishPayload {
    pub brand_name: String,
    pub polish_type: &'static str,
    pub primary_color: String,
    pub formulas: Vec<String>,
    pub name: String,
    /// Always empty at creation; descriptions are written later through the
    /// catalog itself.
    pub description: String,
    pub effect_colors: Vec<String>,
}

impl PolishPayload {
    /// Assemble the payload for one normalized row.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            brand_name: row.brand.clone(),
            polish_type: POLISH_TYPE,
            primary_color: row.primary_color.clone(),
            formulas: split_multi_value(&row.formula),
            name: row.name.clone(),
            description: String::new(),
            effect_colors: split_multi_value(&row.effects_colors),
        }
    }

    /// Ordered form pairs for the wire body. List fields repeat their key
    /// once per item, matching how the remote API parses arrays out of a
    /// form-encoded body.
    #[must_use]
    pub fn to_form_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs: Vec<(&'static str, &str)> = vec![
            ("brandName", self.brand_name.as_str()),
            ("type", self.polish_type),
            ("primaryColor", self.primary_color.as_str()),
        ];
        for formula in &self.formulas {
            pairs.push(("formulas", formula));
        }
        pairs.push(("name", self.name.as_str()));
        pairs.push(("description", self.description.as_str()));
        for color in &self.effect_colors {
            pairs.push(("effectColors", color));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row {
            brand: "OPI".to_string(),
            primary_color: "Red".to_string(),
            effects_colors: "Gold, Shimmer".to_string(),
            formula: "Lacquer, Gel".to_string(),
            name: "Big Apple Red".to_string(),
        }
    }

    #[test]
    fn split_multi_value_trims_and_preserves_order() {
        assert_eq!(
            split_multi_value("Red, Blue , Green"),
            vec!["Red", "Blue", "Green"]
        );
    }

    #[test]
    fn split_multi_value_drops_empty_items() {
        assert_eq!(split_multi_value("Red,, Blue,"), vec!["Red", "Blue"]);
        assert!(split_multi_value("").is_empty());
        assert!(split_multi_value(" , ").is_empty());
    }

    #[test]
    fn split_multi_value_keeps_duplicates() {
        assert_eq!(split_multi_value("Gold, Gold"), vec!["Gold", "Gold"]);
    }

    #[test]
    fn from_row_assembles_composite_payload() {
        let payload = PolishPayload::from_row(&sample_row());
        assert_eq!(payload.brand_name, "OPI");
        assert_eq!(payload.polish_type, "Lacquer");
        assert_eq!(payload.primary_color, "Red");
        assert_eq!(payload.formulas, vec!["Lacquer", "Gel"]);
        assert_eq!(payload.name, "Big Apple Red");
        assert_eq!(payload.description, "");
        assert_eq!(payload.effect_colors, vec!["Gold", "Shimmer"]);
    }

    #[test]
    fn from_row_is_deterministic() {
        let row = sample_row();
        let first = PolishPayload::from_row(&row);
        let second = PolishPayload::from_row(&row);
        assert_eq!(first, second);
        assert_eq!(first.to_form_pairs(), second.to_form_pairs());
    }

    #[test]
    fn to_form_pairs_repeats_list_keys_in_order() {
        let payload = PolishPayload::from_row(&sample_row());
        let pairs = payload.to_form_pairs();
        assert_eq!(
            pairs,
            vec![
                ("brandName", "OPI"),
                ("type", "Lacquer"),
                ("primaryColor", "Red"),
                ("formulas", "Lacquer"),
                ("formulas", "Gel"),
                ("name", "Big Apple Red"),
                ("description", ""),
                ("effectColors", "Gold"),
                ("effectColors", "Shimmer"),
            ]
        );
    }
}
