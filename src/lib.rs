//! Single nearest-neighbor collaborative filtering over in-memory user ratings.

use std::collections::BTreeMap;

use indexmap::IndexMap;

pub mod error;
pub mod neighbor_recommender;
pub mod similar_user;
pub mod similarity;

#[cfg(test)]
mod test_fixtures;

/// Scores a single user assigned to items, keyed by item.
pub type Ratings = BTreeMap<String, f64>;

/// Ratings of all users, keyed by user.
pub type Dataset = BTreeMap<String, Ratings>;

/// Recommended items with the neighbor's score, best first.
pub type Recommendations = IndexMap<String, f64>;

pub use error::{RecommenderError, Result};
pub use neighbor_recommender::NeighborRecommender;
pub use similar_user::SimilarUser;
pub use similarity::Metric;
