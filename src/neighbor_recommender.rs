use crate::error::{RecommenderError, Result};
use crate::similar_user::SimilarUser;
use crate::similarity::{self, Metric};
use crate::{Dataset, Ratings, Recommendations};

use std::cmp::Ordering;
use std::collections::btree_map::Entry;

use num_cpus::get_physical;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Recommends items to a single target user from the ratings of their nearest neighbor.
///
/// User identifiers are case-insensitive, both the target and every key of the dataset are
/// lowercased at construction. The target must be part of the dataset, which is checked
/// once in the constructor, so the operations never fail with [`RecommenderError::UnknownUser`].
///
/// The recommender never mutates its dataset and can be shared between threads.
#[derive(Debug, Clone)]
pub struct NeighborRecommender {
    username: String,
    users: Dataset,
    metric: Metric,
}

impl NeighborRecommender {

    /// Creates a recommender for `username`, with the metric given by its exact name
    /// (`Manhattan`, `Euclidean` or `Pearson`).
    pub fn new(username: &str, users: Dataset, metric: &str) -> Result<Self> {
        let metric: Metric = metric.parse()?;
        Self::with_metric(username, users, metric)
    }

    pub fn with_metric(username: &str, users: Dataset, metric: Metric) -> Result<Self> {
        let users = normalize_users(users)?;
        let username = normalize_user(username);

        if !users.contains_key(&username) {
            return Err(RecommenderError::UnknownUser { user: username });
        }

        Ok(Self { username, users, metric })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn users(&self) -> &Dataset {
        &self.users
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Items the nearest neighbor rated but the target user did not, highest score first.
    /// Items with equal scores keep their item order.
    pub fn recommend(&self) -> Result<Recommendations> {
        let nearest = self.compute_nearest_neighbor()?;

        let neighbor_ratings = self.ratings_of(&nearest.user)?;
        let user_ratings = self.ratings_of(&self.username)?;

        let mut unseen: Vec<(&String, &f64)> = neighbor_ratings.iter()
            .filter(|(item, _)| !user_ratings.contains_key(*item))
            .collect();

        unseen.sort_by(|(_, score_a), (_, score_b)| {
            score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal)
        });

        let recommendations: Recommendations = unseen.into_iter()
            .map(|(item, score)| (item.clone(), *score))
            .collect();

        info!(
            user = %self.username,
            neighbor = %nearest.user,
            recommendations = recommendations.len(),
            "Recommendations derived from nearest neighbor"
        );

        Ok(recommendations)
    }

    /// The single best match for the target user under the configured metric.
    pub fn compute_nearest_neighbor(&self) -> Result<SimilarUser> {
        let scored = self.scored_neighbors()?;

        match scored.into_iter().next() {
            Some(nearest) => {
                info!(
                    user = %self.username,
                    metric = %self.metric,
                    neighbor = %nearest.user,
                    score = nearest.score,
                    "Nearest neighbor found"
                );
                Ok(nearest)
            }
            None => {
                warn!(user = %self.username, metric = %self.metric, "No eligible neighbor");
                Err(RecommenderError::NoNeighborFound { user: self.username.clone() })
            }
        }
    }

    /// All eligible neighbors of the target user, best match first.
    ///
    /// For Pearson every other user is eligible and higher correlations come first, ties go
    /// to the greater identifier. For the minkowski metrics users without a common rating are
    /// left out and smaller distances come first, ties go to the smaller identifier.
    pub fn scored_neighbors(&self) -> Result<Vec<SimilarUser>> {
        let user_ratings = self.ratings_of(&self.username)?;

        let candidates: Vec<(&String, &Ratings)> = self.users.iter()
            .filter(|(user, _)| **user != self.username)
            .collect();

        let num_cores = get_physical();

        let scored_partitioned: Vec<Vec<SimilarUser>> = candidates.par_chunks(num_cores)
            .map(|chunk| {
                let mut scored = Vec::with_capacity(chunk.len());
                for (other_user, other_ratings) in chunk {
                    let score = self.score(other_ratings, user_ratings);
                    debug!(user = %self.username, other_user = %other_user, score, "Scored candidate");
                    scored.push(SimilarUser::new(other_user.as_str(), score));
                }
                scored
            })
            .collect();

        let mut scored: Vec<SimilarUser> = scored_partitioned.into_iter().flatten().collect();

        // NaN sorts above every score, it can never be the best match
        scored.retain(|similar_user| !similar_user.score.is_nan());

        match self.metric {
            Metric::Pearson => {
                scored.sort();
                scored.reverse();
            }
            Metric::Manhattan | Metric::Euclidean => {
                scored.retain(|similar_user| similar_user.score >= 0.0);
                scored.sort();
            }
        }

        Ok(scored)
    }

    /// Minkowski distance of order `p`, see [`similarity::minkowski_distance`].
    pub fn minkowski_distance(&self, ratings_a: &Ratings, ratings_b: &Ratings, p: f64) -> f64 {
        similarity::minkowski_distance(ratings_a, ratings_b, p)
    }

    /// Minkowski distance with the order of the configured metric. Fails for Pearson,
    /// which has no such order.
    pub fn default_minkowski_distance(&self, ratings_a: &Ratings, ratings_b: &Ratings) -> Result<f64> {
        match self.metric.minkowski_order() {
            Some(p) => Ok(similarity::minkowski_distance(ratings_a, ratings_b, p)),
            None => Err(RecommenderError::NotAMinkowskiMetric { metric: self.metric.to_string() }),
        }
    }

    pub fn pearson(&self, ratings_a: &Ratings, ratings_b: &Ratings) -> f64 {
        similarity::pearson(ratings_a, ratings_b)
    }

    fn score(&self, other_ratings: &Ratings, user_ratings: &Ratings) -> f64 {
        match self.metric {
            Metric::Pearson => similarity::pearson(other_ratings, user_ratings),
            Metric::Manhattan => similarity::minkowski_distance(other_ratings, user_ratings, 1.0),
            Metric::Euclidean => similarity::minkowski_distance(other_ratings, user_ratings, 2.0),
        }
    }

    fn ratings_of(&self, user: &str) -> Result<&Ratings> {
        self.users.get(user)
            .ok_or_else(|| RecommenderError::UnknownUser { user: user.to_string() })
    }
}

fn normalize_user(user: &str) -> String {
    user.to_lowercase()
}

fn normalize_users(users: Dataset) -> Result<Dataset> {
    let mut normalized = Dataset::new();
    for (user, ratings) in users {
        match normalized.entry(normalize_user(&user)) {
            Entry::Vacant(entry) => {
                entry.insert(ratings);
            }
            Entry::Occupied(entry) => {
                return Err(RecommenderError::DuplicateUser { user: entry.key().clone() });
            }
        }
    }
    Ok(normalized)
}
