use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_movie::generate_movie::{
    GenerateMovieError, generate_movie_cancelable,
};
use crate::core::actions::generate_movie::movie_params::MovieParams;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer_cancelable,
};
use crate::core::data::colour_table::ColourTable;
use crate::core::data::movie::Movie;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::storage::frame_path::frame_path;

#[derive(Debug, Error)]
pub enum WriteMovieError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode frame {frame}: {source}")]
    Encode {
        frame: usize,
        #[source]
        source: PixelBufferError,
    },
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("no movie to write, generate one first")]
    NotGenerated,
}

/// Renders a zoom movie and hands each encoded frame to a file presenter.
pub struct MovieController<P: FilePresenterPort> {
    presenter: P,
    params: MovieParams,
    colours: ColourTable,
    movie: Option<Movie>,
}

impl<P: FilePresenterPort> MovieController<P> {
    pub fn new(presenter: P, params: MovieParams, colours: ColourTable) -> Self {
        Self {
            presenter,
            params,
            colours,
            movie: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), GenerateMovieError> {
        self.generate_cancelable(&NeverCancel)
    }

    /// Replaces any previous movie. On failure no movie is held.
    pub fn generate_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<(), GenerateMovieError> {
        self.movie = None;

        match generate_movie_cancelable(&self.params, cancel) {
            Ok(movie) => {
                self.movie = Some(movie);
                Ok(())
            }
            Err(GenerateMovieError::Cancelled(c)) => {
                warn!("movie generation cancelled");
                Err(GenerateMovieError::Cancelled(c))
            }
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// Writes every frame as `frameNNNNN.ppm` under `output_dir` and returns how many
    /// frames were written. Fails with [`WriteMovieError::NotGenerated`] when no movie
    /// is held.
    pub fn write(&self, output_dir: &Path) -> Result<usize, WriteMovieError> {
        self.write_cancelable(output_dir, &NeverCancel)
    }

    /// Frames are encoded and written concurrently, each to its own file, so the
    /// frame index to file name mapping holds regardless of completion order. The
    /// first failure stops frames that have not started yet.
    pub fn write_cancelable<C: CancelToken>(
        &self,
        output_dir: &Path,
        cancel: &C,
    ) -> Result<usize, WriteMovieError> {
        let Some(movie) = &self.movie else {
            return Err(WriteMovieError::NotGenerated);
        };

        let start = Instant::now();

        movie
            .frames()
            .par_iter()
            .enumerate()
            .try_for_each(|(frame, grid)| -> Result<(), WriteMovieError> {
                cancel.check()?;

                let buffer = generate_pixel_buffer_cancelable(grid, &self.colours, cancel)
                    .map_err(|err| match err {
                        GeneratePixelBufferCancelableError::Cancelled(c) => {
                            WriteMovieError::Cancelled(c)
                        }
                        GeneratePixelBufferCancelableError::PixelBuffer(source) => {
                            WriteMovieError::Encode { frame, source }
                        }
                    })?;

                let path = frame_path(output_dir, frame);
                self.presenter
                    .present(&buffer, &path)
                    .map_err(|source| WriteMovieError::Io {
                        path: path.clone(),
                        source,
                    })?;

                debug!(frame, path = %path.display(), "wrote frame");
                Ok(())
            })?;

        info!(
            frames = movie.frame_count(),
            output = %output_dir.display(),
            duration = ?start.elapsed(),
            "movie written"
        );

        Ok(movie.frame_count())
    }
}
