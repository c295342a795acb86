use crate::core::data::complex::Complex;
use crate::core::data::params_error::{ParamsError, check_finite, check_scale, check_threshold};

/// Everything needed to render one frame: a square of half-width `scale` around
/// `centre`, sampled on a `(2 * resolution + 1)²` grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSpec {
    centre: Complex,
    scale: f64,
    resolution: u64,
    max_iterations: u64,
    threshold: f64,
}

impl FrameSpec {
    pub fn new(
        centre: Complex,
        scale: f64,
        resolution: u64,
        max_iterations: u64,
        threshold: f64,
    ) -> Result<Self, ParamsError> {
        check_finite("centre real", centre.real)?;
        check_finite("centre imaginary", centre.imag)?;
        check_scale("scale", scale)?;
        check_threshold(threshold)?;

        if max_iterations == 0 {
            return Err(ParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            centre,
            scale,
            resolution,
            max_iterations,
            threshold,
        })
    }

    pub fn centre(&self) -> Complex {
        self.centre
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn resolution(&self) -> u64 {
        self.resolution
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Distance between neighbouring samples. A single-pixel frame has no spacing.
    pub fn delta(&self) -> f64 {
        if self.resolution == 0 {
            0.0
        } else {
            self.scale / self.resolution as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_frame_spec() {
        let spec = FrameSpec::new(Complex::new(-0.5, 0.0), 2.0, 4, 100, 2.0).unwrap();

        assert_eq!(spec.centre(), Complex::new(-0.5, 0.0));
        assert_eq!(spec.scale(), 2.0);
        assert_eq!(spec.resolution(), 4);
        assert_eq!(spec.max_iterations(), 100);
        assert_eq!(spec.threshold(), 2.0);
        assert_eq!(spec.delta(), 0.5);
    }

    #[test]
    fn test_zero_resolution_has_no_delta() {
        let spec = FrameSpec::new(Complex::ZERO, 1.0, 0, 10, 2.0).unwrap();

        assert_eq!(spec.delta(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            FrameSpec::new(Complex::ZERO, 1.0, 1, 0, 2.0),
            Err(ParamsError::ZeroMaxIterations)
        );
        assert_eq!(
            FrameSpec::new(Complex::ZERO, 1.0, 1, 10, -2.0),
            Err(ParamsError::NonPositiveThreshold(-2.0))
        );
        assert_eq!(
            FrameSpec::new(Complex::ZERO, 0.0, 1, 10, 2.0),
            Err(ParamsError::NonPositiveScale {
                name: "scale",
                value: 0.0
            })
        );
        assert_eq!(
            FrameSpec::new(Complex::new(f64::NAN, 0.0), 1.0, 1, 10, 2.0),
            Err(ParamsError::NonFiniteValue {
                name: "centre real"
            })
        );
    }
}
