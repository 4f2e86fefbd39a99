use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::model::Dataset;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// A full comparison run: the two sources and the column mapping.
///
/// The engine never touches the file paths — they are resolved and decoded
/// by the caller before [`crate::engine::run`] is invoked.
#[derive(Debug, Deserialize)]
pub struct MatchConfig {
    pub name: String,
    pub left: SourceConfig,
    pub right: SourceConfig,
    #[serde(default)]
    pub pairs: Vec<ColumnPairSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub file: String,
    #[serde(default)]
    pub sheet: Option<String>,
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// One configured comparison rule linking a left column to a right column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnPairSpec {
    pub left: String,
    pub right: String,
    pub compare: CompareType,
    #[serde(default)]
    pub fuzzy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareType {
    Text,
    Number,
    Date,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl MatchConfig {
    pub fn from_toml(input: &str) -> Result<Self, MatchError> {
        let config: MatchConfig =
            toml::from_str(input).map_err(|e| MatchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Intrinsic validation: everything checkable without the datasets.
    /// An empty pair list is legal (vacuously true for every right row).
    pub fn validate(&self) -> Result<(), MatchError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for pair in &self.pairs {
            if !seen.insert(pair.left.as_str()) {
                return Err(MatchError::ConfigValidation(format!(
                    "left column '{}' is mapped more than once",
                    pair.left
                )));
            }
            if pair.fuzzy && pair.compare != CompareType::Text {
                return Err(MatchError::ConfigValidation(format!(
                    "pair '{}': fuzzy is only valid for text comparison",
                    pair.left
                )));
            }
        }
        Ok(())
    }

    /// Fail-fast column check against the loaded datasets. Runs before the
    /// scan starts so a bad mapping never fails mid-run.
    pub fn validate_columns(&self, left: &Dataset, right: &Dataset) -> Result<(), MatchError> {
        for pair in &self.pairs {
            if !left.has_column(&pair.left) {
                return Err(MatchError::UnknownColumn {
                    side: "left",
                    column: pair.left.clone(),
                });
            }
            if !right.has_column(&pair.right) {
                return Err(MatchError::UnknownColumn {
                    side: "right",
                    column: pair.right.clone(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
name = "Invoices vs Ledger"

[left]
file = "invoices.xlsx"

[right]
file = "ledger.xlsx"
sheet = "Export"

[[pairs]]
left = "vendor"
right = "payee"
compare = "text"
fuzzy = true

[[pairs]]
left = "amount"
right = "total"
compare = "number"

[[pairs]]
left = "invoice_date"
right = "posted"
compare = "date"
"#;

    #[test]
    fn parse_valid_config() {
        let config = MatchConfig::from_toml(VALID).unwrap();
        assert_eq!(config.name, "Invoices vs Ledger");
        assert_eq!(config.left.file, "invoices.xlsx");
        assert_eq!(config.right.sheet.as_deref(), Some("Export"));
        assert_eq!(config.pairs.len(), 3);
        assert_eq!(config.pairs[0].compare, CompareType::Text);
        assert!(config.pairs[0].fuzzy);
        assert!(!config.pairs[1].fuzzy, "fuzzy defaults to false");
    }

    #[test]
    fn empty_mapping_is_legal() {
        let input = r#"
name = "Bare"
[left]
file = "a.csv"
[right]
file = "b.csv"
"#;
        let config = MatchConfig::from_toml(input).unwrap();
        assert!(config.pairs.is_empty());
    }

    #[test]
    fn reject_duplicate_left_column() {
        let input = r#"
name = "Dup"
[left]
file = "a.csv"
[right]
file = "b.csv"

[[pairs]]
left = "id"
right = "id"
compare = "text"

[[pairs]]
left = "id"
right = "ref"
compare = "text"
"#;
        let err = MatchConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("mapped more than once"));
    }

    #[test]
    fn reject_fuzzy_on_non_text() {
        let input = r#"
name = "Bad"
[left]
file = "a.csv"
[right]
file = "b.csv"

[[pairs]]
left = "amount"
right = "total"
compare = "number"
fuzzy = true
"#;
        let err = MatchConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("fuzzy"));
    }

    #[test]
    fn reject_unknown_compare_type() {
        let input = r#"
name = "Bad"
[left]
file = "a.csv"
[right]
file = "b.csv"

[[pairs]]
left = "id"
right = "id"
compare = "regex"
"#;
        assert!(MatchConfig::from_toml(input).is_err());
    }

    #[test]
    fn validate_columns_against_datasets() {
        let config = MatchConfig::from_toml(VALID).unwrap();
        let left = Dataset::new(vec![
            "vendor".into(),
            "amount".into(),
            "invoice_date".into(),
        ]);
        let mut right = Dataset::new(vec!["payee".into(), "total".into(), "posted".into()]);
        config.validate_columns(&left, &right).unwrap();

        right.columns.retain(|c| c != "posted");
        let err = config.validate_columns(&left, &right).unwrap_err();
        assert!(err.to_string().contains("right dataset has no column 'posted'"));
    }
}
