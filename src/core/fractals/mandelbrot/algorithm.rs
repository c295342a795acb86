use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_spec::FrameSpec;
use crate::core::data::iteration_grid::{IterationGridError, side_for_resolution};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape::escape_iterations;
use crate::core::util::grid_to_complex_coords::{GridToComplexCoordsError, grid_to_complex_coords};

/// Escape-time sampling of one frame of the Mandelbrot set.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    frame: FrameSpec,
    side: usize,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u64;
    type Failure = GridToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = grid_to_complex_coords(pixel, self.side, &self.frame)?;

        Ok(escape_iterations(
            c,
            self.frame.max_iterations(),
            self.frame.threshold(),
        ))
    }

    fn side(&self) -> usize {
        self.side
    }
}

impl MandelbrotAlgorithm {
    pub fn new(frame: FrameSpec) -> Result<Self, IterationGridError> {
        let side = side_for_resolution(frame.resolution())?;

        Ok(Self { frame, side })
    }
}
