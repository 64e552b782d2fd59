//! CSV-backed recommendation tables, read once per process.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::domain::{
    AppError, DataConfig, RecommendationData, RecommendationRow, RecommendationTable,
};
use crate::ports::RecommendationSource;

/// Reads the two recommendation CSV files on first use and caches the result.
#[derive(Debug)]
pub struct CsvRecommendationStore {
    recommendations: PathBuf,
    problem_recommendations: PathBuf,
    cache: OnceLock<RecommendationData>,
}

impl CsvRecommendationStore {
    pub fn new(recommendations: impl Into<PathBuf>, problem_recommendations: impl Into<PathBuf>) -> Self {
        Self {
            recommendations: recommendations.into(),
            problem_recommendations: problem_recommendations.into(),
            cache: OnceLock::new(),
        }
    }

    /// Resolve configured paths against `root`.
    pub fn from_config(root: &Path, config: &DataConfig) -> Self {
        Self::new(root.join(&config.recommendations), root.join(&config.problem_recommendations))
    }

    fn read_all(&self) -> Result<RecommendationData, AppError> {
        let recommendations = match read_table(&self.recommendations)? {
            Some(table) => table,
            None => return Ok(unavailable(&self.recommendations)),
        };
        let problem_recommendations = match read_table(&self.problem_recommendations)? {
            Some(table) => table,
            None => return Ok(unavailable(&self.problem_recommendations)),
        };

        info!(
            recommendations = recommendations.len(),
            problem_recommendations = problem_recommendations.len(),
            "loaded recommendation data"
        );
        Ok(RecommendationData::Loaded { recommendations, problem_recommendations })
    }
}

impl RecommendationSource for CsvRecommendationStore {
    fn load(&self) -> Result<&RecommendationData, AppError> {
        if let Some(data) = self.cache.get() {
            return Ok(data);
        }
        let data = self.read_all()?;
        Ok(self.cache.get_or_init(|| data))
    }
}

fn unavailable(path: &Path) -> RecommendationData {
    warn!(path = %path.display(), "recommendation data file not found");
    RecommendationData::Unavailable { missing: path.to_path_buf() }
}

/// Read one CSV file. `Ok(None)` when the file does not exist.
fn read_table(path: &Path) -> Result<Option<RecommendationTable>, AppError> {
    let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(reader) => reader,
        Err(err) if is_not_found(&err) => return Ok(None),
        Err(err) => return Err(data_error(path, err)),
    };

    let columns: Vec<String> =
        reader.headers().map_err(|e| data_error(path, e))?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| data_error(path, e))?;
        rows.push(
            columns.iter().cloned().zip(record.iter().map(str::to_string)).collect::<RecommendationRow>(),
        );
    }

    Ok(Some(RecommendationTable::new(columns, rows)))
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn data_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::DataFile { path: path.to_path_buf(), details: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableKind;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_both_tables_in_file_order() {
        let dir = TempDir::new().unwrap();
        let rec = write(&dir, "rec.csv", "problem_keyword,audience\nacne,Teens\nwrinkles,Adults\n");
        let prob = write(&dir, "prob.csv", "problem_keyword,program\npuffy,Guasha\n");

        let store = CsvRecommendationStore::new(rec, prob);
        let data = store.load().unwrap();

        let table = data.table(TableKind::Recommendations).unwrap();
        assert_eq!(table.columns, vec!["problem_keyword", "audience"]);
        assert_eq!(table.rows[0].problem_keyword(), Some("acne"));
        assert_eq!(table.rows[1].get("audience"), Some("Adults"));
        assert_eq!(data.table(TableKind::ProblemRecommendations).unwrap().len(), 1);
    }

    #[test]
    fn second_load_uses_cache() {
        let dir = TempDir::new().unwrap();
        let rec = write(&dir, "rec.csv", "problem_keyword\nacne\n");
        let prob = write(&dir, "prob.csv", "problem_keyword\npuffy\n");

        let store = CsvRecommendationStore::new(&rec, &prob);
        let first = store.load().unwrap().clone();

        fs::remove_file(&rec).unwrap();
        fs::remove_file(&prob).unwrap();

        let second = store.load().unwrap();
        assert_eq!(&first, second);
        assert!(matches!(second, RecommendationData::Loaded { .. }));
    }

    #[test]
    fn missing_file_yields_sentinel() {
        let dir = TempDir::new().unwrap();
        let rec = write(&dir, "rec.csv", "problem_keyword\nacne\n");
        let missing = dir.path().join("absent.csv");

        let store = CsvRecommendationStore::new(rec, &missing);
        assert_eq!(store.load().unwrap(), &RecommendationData::Unavailable { missing });
    }

    #[test]
    fn schema_is_not_validated() {
        let dir = TempDir::new().unwrap();
        let rec = write(&dir, "rec.csv", "keyword,audience\nacne,Teens,extra\n");
        let prob = write(&dir, "prob.csv", "problem_keyword\n");

        let store = CsvRecommendationStore::new(rec, prob);
        let data = store.load().unwrap();
        let table = data.table(TableKind::Recommendations).unwrap();
        assert_eq!(table.rows[0].problem_keyword(), None);
        assert!(data.table(TableKind::ProblemRecommendations).unwrap().is_empty());
    }

    #[test]
    fn resolves_paths_against_root() {
        let dir = TempDir::new().unwrap();
        write(&dir, "recommendations_final.csv", "problem_keyword\nacne\n");
        write(&dir, "problem_recommendations_final.csv", "problem_keyword\npuffy\n");

        let store = CsvRecommendationStore::from_config(dir.path(), &DataConfig::default());
        assert!(matches!(store.load().unwrap(), RecommendationData::Loaded { .. }));
    }
}
