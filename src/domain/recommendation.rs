//! Recommendation tables and the keyword matcher.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Column scanned by the keyword matcher.
pub const PROBLEM_KEYWORD_COLUMN: &str = "problem_keyword";

/// One row of a recommendation table, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRow {
    fields: BTreeMap<String, String>,
}

impl RecommendationRow {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn problem_keyword(&self) -> Option<&str> {
        self.get(PROBLEM_KEYWORD_COLUMN)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RecommendationRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Rows in storage order, plus the header order they were read with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    pub columns: Vec<String>,
    pub rows: Vec<RecommendationRow>,
}

impl RecommendationTable {
    pub fn new(columns: Vec<String>, rows: Vec<RecommendationRow>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which of the two loaded tables to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableKind {
    #[default]
    Recommendations,
    ProblemRecommendations,
}

/// Result of the one-time data load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationData {
    Loaded { recommendations: RecommendationTable, problem_recommendations: RecommendationTable },
    /// Sentinel returned when an input file is absent.
    Unavailable { missing: PathBuf },
}

impl RecommendationData {
    pub fn table(&self, kind: TableKind) -> Option<&RecommendationTable> {
        match (self, kind) {
            (RecommendationData::Loaded { recommendations, .. }, TableKind::Recommendations) => {
                Some(recommendations)
            }
            (
                RecommendationData::Loaded { problem_recommendations, .. },
                TableKind::ProblemRecommendations,
            ) => Some(problem_recommendations),
            (RecommendationData::Unavailable { .. }, _) => None,
        }
    }
}

/// Return the first row whose `problem_keyword` occurs in `text`, ignoring case.
///
/// Absent or empty text never matches. Rows without a keyword are skipped.
pub fn find_match<'a>(
    text: Option<&str>,
    table: &'a RecommendationTable,
) -> Option<&'a RecommendationRow> {
    let text = text.filter(|t| !t.is_empty())?.to_lowercase();

    table.rows.iter().find(|row| {
        row.problem_keyword()
            .filter(|keyword| !keyword.is_empty())
            .is_some_and(|keyword| text.contains(&keyword.to_lowercase()))
    })
}
