pub mod generate_movie;
pub mod movie_params;
