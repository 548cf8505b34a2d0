use crate::{Dataset, Ratings};

pub(crate) fn ratings_of(entries: &[(&str, f64)]) -> Ratings {
    entries.iter()
        .map(|(item, score)| (item.to_string(), *score))
        .collect()
}

/// Music ratings of nine users, tommy shares no artist with anyone else.
pub(crate) fn music_ratings() -> Dataset {
    let users: Vec<(&str, Ratings)> = vec![
        ("angelica", ratings_of(&[
            ("blues_traveler", 3.5), ("broken_bells", 2.0), ("norah_jones", 4.5),
            ("phoenix", 5.0), ("slightly_stoopid", 1.5), ("the_strokes", 2.5),
            ("vampire_weekend", 2.0),
        ])),
        ("bill", ratings_of(&[
            ("blues_traveler", 2.0), ("broken_bells", 3.5), ("deadmau5", 4.0),
            ("phoenix", 2.0), ("slightly_stoopid", 3.5), ("vampire_weekend", 3.0),
        ])),
        ("chan", ratings_of(&[
            ("blues_traveler", 5.0), ("broken_bells", 1.0), ("deadmau5", 1.0),
            ("norah_jones", 3.0), ("phoenix", 5.0), ("slightly_stoopid", 1.0),
        ])),
        ("dan", ratings_of(&[
            ("blues_traveler", 3.0), ("broken_bells", 4.0), ("deadmau5", 4.5),
            ("phoenix", 3.0), ("slightly_stoopid", 4.5), ("the_strokes", 4.0),
            ("vampire_weekend", 2.0),
        ])),
        ("hailey", ratings_of(&[
            ("broken_bells", 4.0), ("deadmau5", 1.0), ("norah_jones", 4.0),
            ("the_strokes", 4.0), ("vampire_weekend", 1.0),
        ])),
        ("jordyn", ratings_of(&[
            ("broken_bells", 4.5), ("deadmau5", 4.0), ("norah_jones", 5.0),
            ("phoenix", 5.0), ("slightly_stoopid", 4.5), ("the_strokes", 4.0),
            ("vampire_weekend", 4.0),
        ])),
        ("sam", ratings_of(&[
            ("blues_traveler", 5.0), ("broken_bells", 2.0), ("norah_jones", 3.0),
            ("phoenix", 5.0), ("slightly_stoopid", 4.0), ("the_strokes", 5.0),
        ])),
        ("veronica", ratings_of(&[
            ("blues_traveler", 3.0), ("norah_jones", 5.0), ("phoenix", 4.0),
            ("slightly_stoopid", 2.5), ("the_strokes", 3.0),
        ])),
        ("tommy", ratings_of(&[
            ("tears_for_fears", 4.0), ("eric_clapton", 4.0), ("run_d_mc", 2.0),
            ("foo_fighters", 5.0), ("marky_mark", 2.0),
        ])),
    ];

    users.into_iter()
        .map(|(user, ratings)| (user.to_string(), ratings))
        .collect()
}
