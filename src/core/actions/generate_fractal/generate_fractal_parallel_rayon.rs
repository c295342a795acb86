use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Error type for cancelable fractal generation.
///
/// Distinguishes between algorithm failures and cancellation, allowing callers
/// to handle each case appropriately (e.g., not reporting cancellation as a failure).
#[derive(Debug, Error)]
pub enum GenerateFractalError<E: std::error::Error + 'static> {
    /// The operation was cancelled before completion.
    #[error(transparent)]
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
    /// The output grid could not be allocated.
    #[error("could not allocate a grid of {cells} cells")]
    ResourceExhausted { cells: usize },
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// The output buffer is reserved up front so an oversized grid is reported as
/// [`GenerateFractalError::ResourceExhausted`] instead of aborting the process.
/// Rows are the unit of parallel work: each row checks the token at its start and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels, and rayon stops handing out rows
/// once any row fails or is cancelled.
///
/// Returns row-major ordered results, matching [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Default + Clone,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let side = algorithm.side();
    let cells = side
        .checked_mul(side)
        .ok_or(GenerateFractalError::ResourceExhausted { cells: usize::MAX })?;

    let mut results: Vec<Alg::Success> = Vec::new();
    results
        .try_reserve_exact(cells)
        .map_err(|_| GenerateFractalError::ResourceExhausted { cells })?;

    if cells == 0 {
        return Ok(results);
    }

    results.resize(cells, Alg::Success::default());

    results
        .par_chunks_mut(side)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<(), GenerateFractalError<Alg::Failure>> {
            for (x, slot) in row.iter_mut().enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                *slot = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
            }

            Ok(())
        })?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        side: usize,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.y * self.side + pixel.x) as u64)
        }

        fn side(&self) -> usize {
            self.side
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn side(&self) -> usize {
            5
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm { side: 9 };

        let serial_results = generate_fractal_serial(&algorithm).unwrap();
        let rayon_results =
            generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_results_are_row_major() {
        let algorithm = StubSuccessAlgorithm { side: 101 };

        let results = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(results, (0..101 * 101).collect::<Vec<u64>>());
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm { side: 1 };

        let results = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_rayon_with_empty_grid() {
        let algorithm = StubSuccessAlgorithm { side: 0 };

        let results = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel).unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_unaddressable_grid_is_resource_exhausted() {
        let algorithm = StubSuccessAlgorithm { side: usize::MAX };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel);

        assert!(matches!(
            result,
            Err(GenerateFractalError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_unallocatable_grid_is_resource_exhausted() {
        // 2^31 squared u64 cells is far beyond any allocator
        let algorithm = StubSuccessAlgorithm { side: 1 << 31 };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &NeverCancel);

        assert!(matches!(
            result,
            Err(GenerateFractalError::ResourceExhausted { .. })
        ));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubSuccessAlgorithm { side: 9 };
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_propagates_algorithm_failure() {
        let result =
            generate_fractal_parallel_rayon_cancelable(&StubFailureAlgorithm {}, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let algorithm = StubSuccessAlgorithm { side: 5 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "Expected at least 5 polls for 5 rows, got {}", polls);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        // 2049 wide: polls at 0, 1024 and 2048 on each of the 2049 rows
        let algorithm = StubSuccessAlgorithm { side: 2049 };
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 2049 * 3);
    }

    #[test]
    fn test_cancels_after_k_polls() {
        let algorithm = StubSuccessAlgorithm { side: 6 };
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = generate_fractal_parallel_rayon_cancelable(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_generate_fractal_error_displays() {
        let cancelled: GenerateFractalError<StubError> = GenerateFractalError::Cancelled(Cancelled);
        let failed: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
