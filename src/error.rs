use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommenderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommenderError {
    #[error("invalid metric {name:?}, expected one of Manhattan, Euclidean, Pearson")]
    InvalidMetric { name: String },

    #[error("unknown user {user:?}")]
    UnknownUser { user: String },

    /// Two dataset keys that only differ in case.
    #[error("user {user:?} appears more than once after case normalization")]
    DuplicateUser { user: String },

    #[error("no eligible neighbor found for user {user:?}")]
    NoNeighborFound { user: String },

    #[error("metric {metric} has no minkowski order")]
    NotAMinkowskiMetric { metric: String },
}
