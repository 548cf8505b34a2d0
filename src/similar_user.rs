use std::cmp::Ordering;

/// A candidate neighbor together with its distance or similarity to the target user.
#[derive(PartialEq, Debug, Clone)]
pub struct SimilarUser {
    pub user: String,
    pub score: f64,
}

impl SimilarUser {
    pub fn new(user: impl Into<String>, score: f64) -> Self {
        SimilarUser { user: user.into(), score }
    }
}

/// Orders by score first and breaks ties by user identifier. Note that we must use a special
/// implementation here as there is no total order on floating point numbers: equal scores
/// (including both zeros) tie, everything else follows `f64::total_cmp`, which puts NaN
/// above every number.
fn cmp_score_then_user(sim_user_a: &SimilarUser, sim_user_b: &SimilarUser) -> Ordering {
    let by_score = if sim_user_a.score == sim_user_b.score {
        Ordering::Equal
    } else {
        sim_user_a.score.total_cmp(&sim_user_b.score)
    };
    by_score.then_with(|| sim_user_a.user.cmp(&sim_user_b.user))
}

impl Eq for SimilarUser {}

impl Ord for SimilarUser {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_score_then_user(self, other)
    }
}

impl PartialOrd for SimilarUser {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_score_then_user(self, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_score_then_user() {
        let mut entries = vec![
            SimilarUser::new("dan", 4.5),
            SimilarUser::new("sam", 4.0),
            SimilarUser::new("veronica", 2.0),
            SimilarUser::new("chan", 4.0),
        ];

        entries.sort();

        let users: Vec<_> = entries.iter().map(|entry| entry.user.as_str()).collect();
        assert_eq!(users, vec!["veronica", "chan", "sam", "dan"]);
    }

    #[test]
    fn test_negative_scores_sort_first() {
        let mut entries = vec![
            SimilarUser::new("bill", -0.9),
            SimilarUser::new("angelica", 0.4),
            SimilarUser::new("tommy", -1.0),
        ];

        entries.sort();

        assert_eq!(entries[0].user, "tommy");
        assert_eq!(entries[2].user, "angelica");
    }

    #[test]
    fn test_nan_scores_have_a_fixed_place() {
        let mut entries = vec![
            SimilarUser::new("zed", f64::NAN),
            SimilarUser::new("mia", 0.99),
            SimilarUser::new("abe", f64::NAN),
            SimilarUser::new("bo", -0.5),
        ];

        entries.sort();

        let users: Vec<_> = entries.iter().map(|entry| entry.user.as_str()).collect();
        assert_eq!(users, vec!["bo", "mia", "abe", "zed"]);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let mut entries = vec![
            SimilarUser::new("bill", 0.0),
            SimilarUser::new("angelica", -0.0),
        ];

        entries.sort();

        assert_eq!(entries[0].user, "angelica");
        assert_eq!(entries[1].user, "bill");

        entries.reverse();
        entries.sort();
        assert_eq!(entries[0].user, "angelica");
    }
}
