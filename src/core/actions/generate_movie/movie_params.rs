use crate::core::data::complex::Complex;
use crate::core::data::frame_spec::FrameSpec;
use crate::core::data::params_error::{
    MAX_FRAME_COUNT, ParamsError, check_finite, check_scale, check_threshold,
};
use crate::core::util::scale_for_frame::scale_for_frame;

/// Validated parameters of a zoom movie.
///
/// Construction is the only place parameters are checked; once a `MovieParams`
/// exists every frame spec derived from it is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MovieParams {
    threshold: f64,
    max_iterations: u64,
    centre: Complex,
    initial_scale: f64,
    final_scale: f64,
    frame_count: u32,
    resolution: u64,
}

impl MovieParams {
    pub fn new(
        threshold: f64,
        max_iterations: u64,
        centre: Complex,
        initial_scale: f64,
        final_scale: f64,
        frame_count: u32,
        resolution: u64,
    ) -> Result<Self, ParamsError> {
        check_threshold(threshold)?;

        if max_iterations == 0 {
            return Err(ParamsError::ZeroMaxIterations);
        }

        check_finite("centre real", centre.real)?;
        check_finite("centre imaginary", centre.imag)?;
        check_scale("initial scale", initial_scale)?;
        check_scale("final scale", final_scale)?;

        if !(1..=MAX_FRAME_COUNT).contains(&frame_count) {
            return Err(ParamsError::FrameCountOutOfRange(frame_count));
        }

        if frame_count == 1 && initial_scale != final_scale {
            return Err(ParamsError::SingleFrameScaleMismatch {
                initial: initial_scale,
                final_: final_scale,
            });
        }

        Ok(Self {
            threshold,
            max_iterations,
            centre,
            initial_scale,
            final_scale,
            frame_count,
            resolution,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn centre(&self) -> Complex {
        self.centre
    }

    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    pub fn final_scale(&self) -> f64 {
        self.final_scale
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn resolution(&self) -> u64 {
        self.resolution
    }

    pub fn scale_for_frame(&self, index: u32) -> f64 {
        scale_for_frame(index, self.frame_count, self.initial_scale, self.final_scale)
    }

    /// Spec of frame `index`. The interpolated scale always lies between the two
    /// validated endpoint scales.
    pub fn frame_spec(&self, index: u32) -> Result<FrameSpec, ParamsError> {
        FrameSpec::new(
            self.centre,
            self.scale_for_frame(index),
            self.resolution,
            self.max_iterations,
            self.threshold,
        )
    }
}
