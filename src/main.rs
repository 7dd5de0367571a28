use std::{env, process::ExitCode};

use moviequery::error::AppError;

mod logging;

fn get_file_path() -> Result<String, AppError> {
    env::args().nth(1).ok_or(AppError::Usage)
}

fn print_usage() {
    println!("You must provide the name of the file to process");
    println!("Example usage: movies movie_info1.csv");
}

fn main() -> ExitCode {
    logging::setup_logging();

    match get_file_path().and_then(|path| moviequery::run(&path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage) => {
            print_usage();
            ExitCode::FAILURE
        }
        Err(e @ AppError::FileAccess { .. }) => {
            log::error!("{}", e);
            print_usage();
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
