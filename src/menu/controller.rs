use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    error::{AppError, MenuInputError},
    model::collection::MovieCollection,
    queries::movie_queries::MovieQueries,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    MoviesByYear,
    TopRatedByYear,
    MoviesByLanguage,
    Exit,
}

impl FromStr for Choice {
    type Err = MenuInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(Choice::MoviesByYear),
            Ok(2) => Ok(Choice::TopRatedByYear),
            Ok(3) => Ok(Choice::MoviesByLanguage),
            Ok(4) => Ok(Choice::Exit),
            _ => Err(MenuInputError::InvalidChoice(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Prompting,
    Dispatching(Choice),
    Exited,
}

/// Interactive query menu over a loaded collection.
///
/// Input and output are generic so the same loop drives a terminal or an
/// in-memory buffer.
pub struct Menu<'a, R, W> {
    movies: &'a MovieCollection,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(movies: &'a MovieCollection, input: R, output: W) -> Self {
        Menu {
            movies,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let mut state = MenuState::Prompting;
        while state != MenuState::Exited {
            state = self.step(state)?;
        }
        log::debug!("Leaving menu");
        Ok(())
    }

    pub fn step(&mut self, state: MenuState) -> Result<MenuState, AppError> {
        match state {
            MenuState::Prompting => self.prompt(),
            MenuState::Dispatching(choice) => self.dispatch(choice),
            MenuState::Exited => Ok(MenuState::Exited),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> Result<MenuState, AppError> {
        self.print_choices()?;
        write!(self.output, "Enter a choice from 1 to 4: ")?;
        self.output.flush()?;

        // Closed input can never produce a choice, so treat it as exit.
        let Some(line) = self.read_line()? else {
            return Ok(MenuState::Exited);
        };

        match line.parse::<Choice>() {
            Ok(choice) => Ok(MenuState::Dispatching(choice)),
            Err(e) => {
                log::debug!("Rejected menu input {:?}", line);
                writeln!(self.output, "{}", e)?;
                Ok(MenuState::Prompting)
            }
        }
    }

    fn dispatch(&mut self, choice: Choice) -> Result<MenuState, AppError> {
        match choice {
            Choice::MoviesByYear => self.show_movies_by_year()?,
            Choice::TopRatedByYear => self.show_top_rated_by_year()?,
            Choice::MoviesByLanguage => self.show_movies_by_language()?,
            Choice::Exit => return Ok(MenuState::Exited),
        }
        Ok(MenuState::Prompting)
    }

    fn print_choices(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Show movies released in the specified year")?;
        writeln!(self.output, "2. Show highest rated movie for each year")?;
        writeln!(
            self.output,
            "3. Show the title and year of release of all movies in a specific language"
        )?;
        writeln!(self.output, "4. Exit from the program")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn show_movies_by_year(&mut self) -> Result<(), AppError> {
        write!(
            self.output,
            "Enter the year for which you want to see movies: "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        let year = match parse_year(&line) {
            Ok(year) => year,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let titles = MovieQueries::by_year(self.movies, year);
        if titles.is_empty() {
            writeln!(
                self.output,
                "No data about movies released in the year {}",
                year
            )?;
        }
        for title in titles {
            writeln!(self.output, "{}", title)?;
        }
        Ok(())
    }

    fn show_top_rated_by_year(&mut self) -> Result<(), AppError> {
        let best = MovieQueries::top_rated_by_year(self.movies);
        if best.is_empty() {
            writeln!(self.output, "No movies were loaded")?;
        }
        for (year, movie) in best {
            writeln!(self.output, "{} {} {}", year, movie.rating, movie.title)?;
        }
        Ok(())
    }

    fn show_movies_by_language(&mut self) -> Result<(), AppError> {
        write!(
            self.output,
            "Enter the language for which you want to see movies: "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let language = line.trim();

        let matches = MovieQueries::by_language(self.movies, language);
        if matches.is_empty() {
            writeln!(
                self.output,
                "No data about movies released in {}",
                language
            )?;
        }
        for (title, year) in matches {
            writeln!(self.output, "{} {}", year, title)?;
        }
        Ok(())
    }

    /// One line of input without its terminator, or `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_year(input: &str) -> Result<u32, MenuInputError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| MenuInputError::InvalidYear(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::movie::Movie;

    fn sample() -> MovieCollection {
        ["A,2000,English,7.1", "B,2000,French,9.0", "C,2001,English,5.0"]
            .iter()
            .map(|line| Movie::from_line(line).unwrap())
            .collect()
    }

    fn run_menu(movies: &MovieCollection, input: &str) -> String {
        let mut menu = Menu::new(movies, input.as_bytes(), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!("1".parse::<Choice>(), Ok(Choice::MoviesByYear));
        assert_eq!(" 4 ".parse::<Choice>(), Ok(Choice::Exit));
        assert!("0".parse::<Choice>().is_err());
        assert!("5".parse::<Choice>().is_err());
        assert!("one".parse::<Choice>().is_err());
    }

    #[test]
    fn exit_choice_ends_the_menu() {
        let movies = sample();
        let mut menu = Menu::new(&movies, "4\n".as_bytes(), Vec::new());

        let state = menu.step(MenuState::Prompting).unwrap();
        assert_eq!(state, MenuState::Dispatching(Choice::Exit));
        assert_eq!(menu.step(state).unwrap(), MenuState::Exited);
    }

    #[test]
    fn invalid_choice_prompts_again() {
        let movies = sample();
        let mut menu = Menu::new(&movies, "9\nabc\n4\n".as_bytes(), Vec::new());

        assert_eq!(menu.step(MenuState::Prompting).unwrap(), MenuState::Prompting);
        assert_eq!(menu.step(MenuState::Prompting).unwrap(), MenuState::Prompting);

        let output = String::from_utf8(menu.into_output()).unwrap();
        assert_eq!(
            output
                .matches("You entered an incorrect choice. Try again")
                .count(),
            2
        );
    }

    #[test]
    fn lists_movies_for_a_year() {
        let output = run_menu(&sample(), "1\n2000\n1\n1999\n4\n");

        assert!(output.contains("movies: A\nB\n"));
        assert!(output.contains("No data about movies released in the year 1999"));
    }

    #[test]
    fn invalid_year_is_reported_not_defaulted() {
        let movies: MovieCollection = vec![Movie::from_line("Zero,0,English,1.0").unwrap()]
            .into_iter()
            .collect();

        let output = run_menu(&movies, "1\nnineteen\n4\n");

        assert!(output.contains("You entered an invalid year"));
        assert!(!output.contains("Zero"));
    }

    #[test]
    fn shows_top_rated_movie_per_year() {
        let output = run_menu(&sample(), "2\n4\n");

        assert!(output.contains("2000 9 B\n2001 5 C\n"));
    }

    #[test]
    fn top_rated_prints_rating_as_loaded() {
        let movies: MovieCollection = vec![Movie::from_line("Precise,2010,English,7.25").unwrap()]
            .into_iter()
            .collect();

        let output = run_menu(&movies, "2\n4\n");

        assert!(output.contains("2010 7.25 Precise\n"));
    }

    #[test]
    fn padded_language_field_matches_typed_language() {
        let movies: MovieCollection = vec![Movie::from_line("A, 2000, English, 7.1").unwrap()]
            .into_iter()
            .collect();

        let output = run_menu(&movies, "3\nEnglish\n4\n");

        assert!(output.contains("movies: 2000 A\n"));
    }

    #[test]
    fn lists_movies_for_a_language() {
        let output = run_menu(&sample(), "3\nEnglish\n3\nKlingon\n4\n");

        assert!(output.contains("movies: 2000 A\n2001 C\n"));
        assert!(output.contains("No data about movies released in Klingon"));
    }

    #[test]
    fn closed_input_exits_cleanly() {
        let output = run_menu(&sample(), "");

        assert!(output.contains("Enter a choice from 1 to 4: "));
    }
}
