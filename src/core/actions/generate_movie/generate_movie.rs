use std::fmt;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_movie::movie_params::MovieParams;
use crate::core::actions::render_frame::{RenderFrameError, render_frame_cancelable};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::movie::Movie;
use crate::core::data::params_error::ParamsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustedResource {
    FrameList { frame_count: u32 },
    Frame { index: u32, resolution: u64 },
}

impl fmt::Display for ExhaustedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameList { frame_count } => {
                write!(f, "list of {} frames", frame_count)
            }
            Self::Frame { index, resolution } => {
                write!(f, "frame {} at resolution {}", index, resolution)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateMovieError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamsError),
    #[error("could not allocate {0}")]
    ResourceExhausted(ExhaustedResource),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("frame {frame} failed: {source}")]
    Render {
        frame: u32,
        #[source]
        source: RenderFrameError,
    },
}

impl GenerateMovieError {
    fn from_render(frame: u32, resolution: u64, err: RenderFrameError) -> Self {
        match err {
            RenderFrameError::Cancelled(c) => Self::Cancelled(c),
            RenderFrameError::ResourceExhausted { .. } => {
                Self::ResourceExhausted(ExhaustedResource::Frame {
                    index: frame,
                    resolution,
                })
            }
            source => Self::Render { frame, source },
        }
    }
}

/// Validates raw movie parameters and renders every frame of the zoom.
///
/// Nothing is allocated when a parameter is invalid.
pub fn generate(
    threshold: f64,
    max_iterations: u64,
    centre: Complex,
    initial_scale: f64,
    final_scale: f64,
    frame_count: u32,
    resolution: u64,
) -> Result<Movie, GenerateMovieError> {
    let params = MovieParams::new(
        threshold,
        max_iterations,
        centre,
        initial_scale,
        final_scale,
        frame_count,
        resolution,
    )?;

    generate_movie(&params)
}

/// Renders frames `0..frame_count` in temporal order.
///
/// Either every frame renders and a complete [`Movie`] is returned, or the frames
/// rendered so far are dropped and the first failure is returned.
pub fn generate_movie(params: &MovieParams) -> Result<Movie, GenerateMovieError> {
    generate_movie_cancelable(params, &NeverCancel)
}

/// Like [`generate_movie`], polling `cancel` between frames and between rows.
pub fn generate_movie_cancelable<C: CancelToken>(
    params: &MovieParams,
    cancel: &C,
) -> Result<Movie, GenerateMovieError> {
    let frame_count = params.frame_count();
    let mut frames: Vec<IterationGrid> = Vec::new();

    frames.try_reserve_exact(frame_count as usize).map_err(|_| {
        GenerateMovieError::ResourceExhausted(ExhaustedResource::FrameList { frame_count })
    })?;

    info!(
        frame_count,
        resolution = params.resolution(),
        max_iterations = params.max_iterations(),
        "rendering movie"
    );
    let start = Instant::now();

    for index in 0..frame_count {
        cancel.check()?;

        let spec = params.frame_spec(index)?;
        let frame_start = Instant::now();

        let grid = render_frame_cancelable(&spec, cancel)
            .map_err(|err| GenerateMovieError::from_render(index, params.resolution(), err))?;

        debug!(
            frame = index,
            scale = spec.scale(),
            duration = ?frame_start.elapsed(),
            "rendered frame"
        );
        frames.push(grid);
    }

    info!(duration = ?start.elapsed(), "movie rendered");

    Ok(Movie::from_frames(frames))
}
