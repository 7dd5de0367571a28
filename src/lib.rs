use std::io;

pub mod error;
use error::AppError;

pub mod loaders;
use loaders::movie_loader::MovieLoader;

pub mod menu;
use menu::controller::Menu;

pub mod model;
pub mod queries;

/// Loads the movie file at `path` and runs the interactive menu on the
/// terminal until the user exits.
pub fn run(path: &str) -> Result<(), AppError> {
    let report = MovieLoader::load_from_path(path)?;

    println!(
        "Processed file {} and parsed data for {} movies",
        path,
        report.movies.len()
    );
    if report.skipped > 0 {
        log::warn!(
            "Skipped {} malformed line(s) in {}",
            report.skipped,
            path
        );
    }
    log::info!("Loaded {} movies from {}", report.movies.len(), path);

    let mut menu = Menu::new(&report.movies, io::stdin().lock(), io::stdout().lock());
    menu.run()
}
