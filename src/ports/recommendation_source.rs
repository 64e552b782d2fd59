use crate::domain::{AppError, RecommendationData};

/// Port for the read-only recommendation tables.
pub trait RecommendationSource {
    /// Load both tables. Implementations read storage at most once per process;
    /// later calls return the cached result. An absent file yields
    /// [`RecommendationData::Unavailable`], not an error.
    fn load(&self) -> Result<&RecommendationData, AppError>;
}
