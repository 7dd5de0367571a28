use std::{fs::File, io::Read};

use csv::StringRecord;

use crate::{
    error::AppError,
    model::{collection::MovieCollection, movie::Movie},
};

#[derive(Debug)]
pub struct LoadReport {
    pub movies: MovieCollection,
    pub skipped: usize,
}

pub struct MovieLoader {}

impl MovieLoader {
    pub fn load_from_path(path: &str) -> Result<LoadReport, AppError> {
        let file = File::open(path).map_err(|source| AppError::FileAccess {
            path: path.to_string(),
            source,
        })?;
        log::debug!("Opened movie file {}", path);

        MovieLoader::load_from_reader(file)
    }

    /// Reads every movie after the header line. Malformed or non UTF-8 lines
    /// are logged and skipped; empty lines are ignored. Only I/O failures stop
    /// the load.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<LoadReport, AppError> {
        let mut csv_reader = Movie::reader_builder()
            .has_headers(true)
            .from_reader(reader);

        let mut movies = vec![];
        let mut skipped = 0;

        for result in csv_reader.byte_records() {
            let bytes = result?;
            let line = bytes.position().map(|p| p.line()).unwrap_or_default();

            let record = match StringRecord::from_byte_record(bytes) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Skipping unreadable line {}: {}", line, e.utf8_error());
                    skipped += 1;
                    continue;
                }
            };

            match Movie::try_from(&record) {
                Ok(movie) => {
                    log::debug!("Parsed movie {}", movie);
                    movies.push(movie);
                }
                Err(e) => {
                    log::warn!("Skipping malformed line {}: {}", line, e);
                    skipped += 1;
                }
            }
        }

        Ok(LoadReport {
            movies: movies.into_iter().collect(),
            skipped,
        })
    }
}
