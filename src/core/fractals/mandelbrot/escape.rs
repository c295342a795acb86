use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Escape time of `point` under `z -> z² + point`, starting from `z = 0`.
///
/// Returns the 1-based iteration at which `|z|` first reaches `threshold`, or `0` when
/// the orbit stays below the threshold for all `max_iterations` updates. The result is
/// always in `0..=max_iterations`.
pub fn escape_iterations(point: Complex, max_iterations: u64, threshold: f64) -> u64 {
    let orbit = (1..=max_iterations).try_fold(Complex::ZERO, |z, iteration| {
        let next = z * z + point;

        if next.magnitude() >= threshold {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match orbit {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => 0,
    }
}
