use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Samples every grid position on the calling thread, row-major from the top-left.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let side = algorithm.side();

    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
