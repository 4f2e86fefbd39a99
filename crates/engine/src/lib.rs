//! `sheetmatch-engine` — row-matching engine for two tabular datasets.
//!
//! Pure engine crate: receives pre-loaded datasets and a column mapping,
//! returns per-row match records. No CLI or IO dependencies.

pub mod assemble;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;

pub use assemble::{flatten, FlatTable};
pub use config::{ColumnPairSpec, CompareType, MatchConfig, SourceConfig};
pub use engine::run;
pub use error::MatchError;
pub use model::{Dataset, MatchRecord, MatchResult, MatchSummary, Row};
