//! Static TMDB genre table.

/// The 19 TMDB movie genres. The list is stable enough to ship as a
/// constant instead of paying a network call per page render.
const GENRES: [(i64, &str); 19] = [
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Sci-Fi"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Name for a genre ID; unmapped IDs resolve to `"Unknown"`.
#[must_use]
pub fn genre_name(id: i64) -> &'static str {
    GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map_or("Unknown", |(_, name)| name)
}

/// Names for a list of genre IDs, in input order.
#[must_use]
pub fn genre_names(ids: &[i64]) -> Vec<&'static str> {
    ids.iter().map(|&id| genre_name(id)).collect()
}

#[cfg(test)]
#[path = "genres_test.rs"]
mod tests;
