pub mod movie_loader;
