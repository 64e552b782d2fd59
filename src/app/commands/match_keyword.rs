//! Keyword lookup over the recommendation tables.
//!
//! Separate from the wizard: nothing in the lesson flow calls this.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AppError, RecommendationData, RecommendationRow, TableKind, find_match};
use crate::ports::RecommendationSource;

/// Result of a keyword lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched { columns: Vec<String>, row: RecommendationRow },
    NoMatch,
    /// A data file was absent; nothing can match.
    DataUnavailable { missing: PathBuf },
}

/// Find the first row of `table` whose keyword appears in `text`.
pub fn execute<S: RecommendationSource + ?Sized>(
    source: &S,
    text: &str,
    table: TableKind,
) -> Result<MatchOutcome, AppError> {
    let data = source.load()?;
    if let RecommendationData::Unavailable { missing } = data {
        return Ok(MatchOutcome::DataUnavailable { missing: missing.clone() });
    }

    let Some(table) = data.table(table) else {
        return Ok(MatchOutcome::NoMatch);
    };

    match find_match(Some(text), table) {
        Some(row) => {
            info!(keyword = row.problem_keyword().unwrap_or_default(), "keyword matched");
            Ok(MatchOutcome::Matched { columns: table.columns.clone(), row: row.clone() })
        }
        None => Ok(MatchOutcome::NoMatch),
    }
}
