use crate::core::data::complex::Complex;
use crate::core::data::frame_spec::FrameSpec;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridToComplexCoordsError {
    #[error("point (x: {}, y: {}) is outside the {side}x{side} grid", point.x, point.y)]
    PointOutsideGrid { point: Point, side: usize },
}

/// Maps a grid position of the frame to the complex coordinate it samples.
///
/// Each coordinate is computed from its own row and column offset to the centre, so
/// no error accumulates along a row and the centre cell samples `centre` exactly.
/// Columns run left to right with increasing real part; rows run top to bottom with
/// decreasing imaginary part.
pub fn grid_to_complex_coords(
    point: Point,
    side: usize,
    frame: &FrameSpec,
) -> Result<Complex, GridToComplexCoordsError> {
    if point.x >= side || point.y >= side {
        return Err(GridToComplexCoordsError::PointOutsideGrid { point, side });
    }

    let middle = (side / 2) as f64;
    let delta = frame.delta();
    let centre = frame.centre();

    let real = centre.real + (point.x as f64 - middle) * delta;
    let imag = centre.imag - (point.y as f64 - middle) * delta;

    Ok(Complex { real, imag })
}
