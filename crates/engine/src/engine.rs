//! The row-matching scan: for each left row, the first right row on which
//! every configured column pair agrees.

use crate::compare::values_match;
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::model::{Dataset, MatchMeta, MatchRecord, MatchResult, MatchSummary};

/// Run the comparison. Returns one record per left row, in left order.
///
/// All-pairs scan, O(n×m×k) comparator evaluations worst case: no indexing,
/// no scoring — the first right row where every pair matches wins, and the
/// per-row AND short-circuits. A single blocking pass over fully-loaded
/// datasets; deterministic over immutable inputs.
pub fn run(
    config: &MatchConfig,
    left: &Dataset,
    right: &Dataset,
) -> Result<MatchResult, MatchError> {
    config.validate()?;
    config.validate_columns(left, right)?;

    let mut records = Vec::with_capacity(left.len());

    for (i, left_row) in left.rows.iter().enumerate() {
        let hit = (0..right.len()).find(|&j| {
            config.pairs.iter().all(|pair| {
                values_match(
                    left.cell(i, &pair.left),
                    right.cell(j, &pair.right),
                    pair.compare,
                    pair.fuzzy,
                )
            })
        });

        records.push(match hit {
            Some(j) => MatchRecord {
                left_index: i,
                left_row: left_row.clone(),
                matched: true,
                right_index: Some(j),
                right_row: Some(right.rows[j].clone()),
            },
            None => MatchRecord {
                left_index: i,
                left_row: left_row.clone(),
                matched: false,
                right_index: None,
                right_row: None,
            },
        });
    }

    let summary = summarize(&records);

    Ok(MatchResult {
        meta: MatchMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        left_columns: left.columns.clone(),
        right_columns: right.columns.clone(),
        records,
    })
}

fn summarize(records: &[MatchRecord]) -> MatchSummary {
    let matched = records.iter().filter(|r| r.matched).count();
    MatchSummary {
        total: records.len(),
        matched,
        unmatched: records.len() - matched,
    }
}
