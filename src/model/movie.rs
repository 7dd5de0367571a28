use std::fmt;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ParseError;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: u32,
    pub language: String,
    pub rating: f32,
}

impl Movie {
    /// Parses a single `title,year,language,rating` line.
    ///
    /// Everything after the third comma is taken as the rating, and a trailing
    /// line terminator is ignored.
    pub fn from_line(line: &str) -> Result<Movie, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(ParseError::MissingField { found: 0 });
        }

        let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
        match fields[..] {
            [title, year, language, rating] => Movie::from_fields(title, year, language, rating),
            _ => Err(ParseError::MissingField {
                found: fields.len(),
            }),
        }
    }

    /// Reader settings for the movie file format: plain comma splitting, no
    /// quote handling, and rows of any width so short rows reach the parser.
    pub fn reader_builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(false).flexible(true).quoting(false);
        builder
    }

    fn from_fields(
        title: &str,
        year: &str,
        language: &str,
        rating: &str,
    ) -> Result<Movie, ParseError> {
        Ok(Movie {
            title: Movie::parse_text(title, "title")?,
            year: Movie::parse_year(year)?,
            language: Movie::parse_text(language, "language")?,
            rating: Movie::parse_rating(rating)?,
        })
    }

    fn parse_text(field: &str, name: &'static str) -> Result<String, ParseError> {
        let text = field.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyField(name));
        }
        Ok(text.to_string())
    }

    fn parse_year(field: &str) -> Result<u32, ParseError> {
        field
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidYear(field.to_string()))
    }

    fn parse_rating(field: &str) -> Result<f32, ParseError> {
        match field.trim().parse::<f32>() {
            Ok(rating) if rating.is_finite() => Ok(rating),
            _ => Err(ParseError::InvalidRating(field.to_string())),
        }
    }
}

impl TryFrom<&StringRecord> for Movie {
    type Error = ParseError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() < FIELD_COUNT {
            return Err(ParseError::MissingField {
                found: record.len(),
            });
        }

        // The rating runs to the end of the line, commas included.
        let rating = record
            .iter()
            .skip(FIELD_COUNT - 1)
            .collect::<Vec<_>>()
            .join(",");

        Movie::from_fields(&record[0], &record[1], &record[2], &rating)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.title, self.language, self.year, self.rating
        )
    }
}
