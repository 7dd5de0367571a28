use std::slice::Iter;

use crate::model::movie::Movie;

/// Movies in the order they were read from the file. Read-only once built.
#[derive(Debug, Default, PartialEq)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn iter(&self) -> Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }
}

impl FromIterator<Movie> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        MovieCollection {
            movies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
