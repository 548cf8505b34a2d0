use std::fmt;
use std::str::FromStr;

use crate::error::RecommenderError;
use crate::Ratings;

/// Returned by [`minkowski_distance`] when two users have no rated item in common.
pub const NO_COMMON_RATINGS: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Manhattan,
    Euclidean,
    Pearson,
}

impl Metric {

    /// Numeric code of the metric: 1 for Manhattan, 2 for Euclidean, 3 for Pearson.
    pub fn code(&self) -> u8 {
        match self {
            Metric::Manhattan => 1,
            Metric::Euclidean => 2,
            Metric::Pearson => 3,
        }
    }

    /// Order of the minkowski distance behind this metric, if any.
    pub fn minkowski_order(&self) -> Option<f64> {
        match self {
            Metric::Manhattan => Some(1.0),
            Metric::Euclidean => Some(2.0),
            Metric::Pearson => None,
        }
    }
}

impl FromStr for Metric {
    type Err = RecommenderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Manhattan" => Ok(Metric::Manhattan),
            "Euclidean" => Ok(Metric::Euclidean),
            "Pearson" => Ok(Metric::Pearson),
            _ => Err(RecommenderError::InvalidMetric { name: name.to_string() }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Manhattan => "Manhattan",
            Metric::Euclidean => "Euclidean",
            Metric::Pearson => "Pearson",
        };
        f.write_str(name)
    }
}

/// Minkowski distance of order `p` over the items rated by both users, rounded to three
/// decimal places. Returns [`NO_COMMON_RATINGS`] if the users share no item.
pub fn minkowski_distance(ratings_a: &Ratings, ratings_b: &Ratings, p: f64) -> f64 {
    let mut common_ratings = false;
    let mut distance = 0.0_f64;

    for (item, rating_a) in ratings_a {
        if let Some(rating_b) = ratings_b.get(item) {
            distance += (rating_a - rating_b).abs().powf(p);
            common_ratings = true;
        }
    }

    if common_ratings {
        round_to_thousandths(distance.powf(1.0 / p))
    } else {
        NO_COMMON_RATINGS
    }
}

/// Pearson correlation coefficient over the items rated by both users. Zero if there is no
/// common item or one of the two series has no variance.
pub fn pearson(ratings_a: &Ratings, ratings_b: &Ratings) -> f64 {
    let mut sum_xy = 0.0_f64;
    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut sum_x2 = 0.0_f64;
    let mut sum_y2 = 0.0_f64;
    let mut n = 0_usize;

    for (item, x) in ratings_a {
        if let Some(y) = ratings_b.get(item) {
            n += 1;
            sum_xy += x * y;
            sum_x += x;
            sum_y += y;
            sum_x2 += x.powi(2);
            sum_y2 += y.powi(2);
        }
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let denominator = spread(sum_x2, sum_x, n) * spread(sum_y2, sum_y, n);

    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        (sum_xy - (sum_x * sum_y) / n) / denominator
    }
}

/// Square root of `n` times the variance. Cancellation leaves a tiny residue, possibly
/// negative, for constant series, which counts as no variance.
fn spread(sum_squares: f64, sum: f64, n: f64) -> f64 {
    let residue = sum_squares - sum.powi(2) / n;
    if residue <= sum_squares.abs() * VARIANCE_TOLERANCE {
        0.0
    } else {
        residue.sqrt()
    }
}

const VARIANCE_TOLERANCE: f64 = 1e-12;

fn round_to_thousandths(value: f64) -> f64 {
    let scaled = value * 1000.0;
    if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        value
    }
}
