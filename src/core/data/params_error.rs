use thiserror::Error;

pub const MAX_FRAME_COUNT: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    #[error("threshold must be greater than zero, got {0}")]
    NonPositiveThreshold(f64),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("{name} must be greater than zero, got {value}")]
    NonPositiveScale { name: &'static str, value: f64 },
    #[error("frame count must be between 1 and 10000, got {0}")]
    FrameCountOutOfRange(u32),
    #[error("a single frame needs equal initial and final scales, got {initial} and {final_}")]
    SingleFrameScaleMismatch { initial: f64, final_: f64 },
    #[error("{name} must be a finite number")]
    NonFiniteValue { name: &'static str },
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFiniteValue { name })
    }
}

pub(crate) fn check_threshold(threshold: f64) -> Result<(), ParamsError> {
    check_finite("threshold", threshold)?;

    if threshold <= 0.0 {
        return Err(ParamsError::NonPositiveThreshold(threshold));
    }

    Ok(())
}

pub(crate) fn check_scale(name: &'static str, scale: f64) -> Result<(), ParamsError> {
    check_finite(name, scale)?;

    if scale <= 0.0 {
        return Err(ParamsError::NonPositiveScale { name, value: scale });
    }

    Ok(())
}
