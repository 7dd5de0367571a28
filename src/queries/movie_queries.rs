use std::collections::{btree_map::Entry, BTreeMap};

use crate::model::{collection::MovieCollection, movie::Movie};

/// Read-only lookups over a loaded collection. Each one is a single pass and
/// returns results in collection order.
pub struct MovieQueries {}

impl MovieQueries {
    pub fn by_year(movies: &MovieCollection, year: u32) -> Vec<&str> {
        movies
            .iter()
            .filter(|movie| movie.year == year)
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// Highest rated movie for every year present. On equal ratings the movie
    /// that appears first in the collection is kept.
    pub fn top_rated_by_year(movies: &MovieCollection) -> BTreeMap<u32, &Movie> {
        let mut best: BTreeMap<u32, &Movie> = BTreeMap::new();

        for movie in movies {
            match best.entry(movie.year) {
                Entry::Vacant(entry) => {
                    entry.insert(movie);
                }
                Entry::Occupied(mut entry) => {
                    if movie.rating > entry.get().rating {
                        entry.insert(movie);
                    }
                }
            }
        }

        best
    }

    /// Case sensitive, exact match on the language field.
    pub fn by_language<'a>(movies: &'a MovieCollection, language: &str) -> Vec<(&'a str, u32)> {
        movies
            .iter()
            .filter(|movie| movie.language == language)
            .map(|movie| (movie.title.as_str(), movie.year))
            .collect()
    }
}
