pub mod movie_queries;
