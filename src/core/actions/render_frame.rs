use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_spec::FrameSpec;
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::grid_to_complex_coords::GridToComplexCoordsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("a frame at resolution {resolution} could not be allocated")]
    ResourceExhausted { resolution: u64 },
    #[error("sampling failed: {0}")]
    Sampling(#[source] GridToComplexCoordsError),
    #[error(transparent)]
    Grid(IterationGridError),
}

impl From<IterationGridError> for RenderFrameError {
    fn from(err: IterationGridError) -> Self {
        match err {
            IterationGridError::ResolutionTooLarge { resolution } => {
                Self::ResourceExhausted { resolution }
            }
            other => Self::Grid(other),
        }
    }
}

/// Renders the escape-time grid of one frame on the rayon pool.
pub fn render_frame(spec: &FrameSpec) -> Result<IterationGrid, RenderFrameError> {
    render_frame_cancelable(spec, &NeverCancel)
}

/// Like [`render_frame`], but gives up between rows once `cancel` fires.
pub fn render_frame_cancelable<C: CancelToken>(
    spec: &FrameSpec,
    cancel: &C,
) -> Result<IterationGrid, RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*spec)?;
    let side = algorithm.side();

    let cells = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel).map_err(|e| {
        match e {
            GenerateFractalError::Cancelled(c) => RenderFrameError::Cancelled(c),
            GenerateFractalError::Algorithm(err) => RenderFrameError::Sampling(err),
            GenerateFractalError::ResourceExhausted { .. } => RenderFrameError::ResourceExhausted {
                resolution: spec.resolution(),
            },
        }
    })?;

    Ok(IterationGrid::from_cells(side, cells)?)
}
