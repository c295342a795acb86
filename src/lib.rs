pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::cli::{RunError, run};
pub use crate::controllers::movie::{MovieController, WriteMovieError};
pub use crate::core::actions::generate_movie::generate_movie::{
    GenerateMovieError, generate, generate_movie,
};
pub use crate::core::actions::generate_movie::movie_params::MovieParams;
pub use crate::core::actions::render_frame::render_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_table::ColourTable;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_spec::FrameSpec;
pub use crate::core::data::iteration_grid::IterationGrid;
pub use crate::core::data::movie::Movie;
pub use crate::input::cli::args::MovieArgs;
pub use crate::presenters::file::ppm::PpmFilePresenter;
