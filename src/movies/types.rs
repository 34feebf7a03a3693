use serde::{Deserialize, Serialize};

use crate::tmdb::TmdbMovie;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: String,
}

impl From<TmdbMovie> for Movie {
    fn from(m: TmdbMovie) -> Self {
        let year = release_year(&m.release_date).to_string();
        Movie {
            id: m.id,
            title: m.title,
            year,
        }
    }
}

/// First four characters of a release date, or "" when it is shorter.
pub fn release_year(release_date: &str) -> &str {
    match release_date.char_indices().nth(3) {
        Some((i, c)) => &release_date[..i + c.len_utf8()],
        None => "",
    }
}

pub fn to_movies(results: Vec<TmdbMovie>) -> Vec<Movie> {
    results.into_iter().map(Movie::from).collect()
}
