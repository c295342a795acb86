use thiserror::Error;
use tracing::info;

use crate::controllers::movie::{MovieController, WriteMovieError};
use crate::core::actions::generate_movie::generate_movie::GenerateMovieError;
use crate::core::data::params_error::ParamsError;
use crate::input::cli::args::MovieArgs;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::storage::read_colour_table::{ReadColourTableError, read_colour_table};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid parameter: {0}")]
    Params(#[from] ParamsError),
    #[error(transparent)]
    ColourTable(#[from] ReadColourTableError),
    #[error(transparent)]
    Generate(#[from] GenerateMovieError),
    #[error(transparent)]
    Write(#[from] WriteMovieError),
}

/// Validates the arguments, loads the colour table, renders the movie and writes one
/// PPM per frame. Parameters are checked before the colour file is touched.
pub fn run(args: &MovieArgs) -> Result<usize, RunError> {
    let params = args.movie_params()?;
    let colours = read_colour_table(&args.colour_file)?;

    info!(
        centre_real = params.centre().real,
        centre_imag = params.centre().imag,
        initial_scale = params.initial_scale(),
        final_scale = params.final_scale(),
        colours = colours.len(),
        "starting zoom"
    );

    let mut controller = MovieController::new(PpmFilePresenter::new(), params, colours);
    controller.generate()?;

    Ok(controller.write(&args.output_folder)?)
}
