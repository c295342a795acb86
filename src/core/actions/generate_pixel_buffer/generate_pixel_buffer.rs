use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use thiserror::Error;

/// Error type for cancelable pixel buffer generation.
///
/// Distinguishes between buffer construction errors and cancellation, allowing
/// callers to handle each case appropriately.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratePixelBufferCancelableError {
    /// The operation was cancelled before completion.
    #[error(transparent)]
    Cancelled(Cancelled),
    /// A pixel buffer construction error occurred.
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

/// Paints every cell of `grid` with `mapper`, producing a raster of the same side.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<CMap: ColourMap<u64>>(
    grid: &IterationGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(grid, mapper, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::PixelBuffer(err) => err,
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates a pixel buffer with cancellation support.
///
/// Streams RGB bytes into a buffer reserved for `side * side * 3` bytes, checking
/// `cancel.is_cancelled()` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels. A buffer
/// that cannot be reserved is reported as [`PixelBufferError::TooLarge`].
pub fn generate_pixel_buffer_cancelable<CMap, C>(
    grid: &IterationGrid,
    mapper: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<u64>,
    C: CancelToken,
{
    let side = grid.side();
    let mut buffer = reserve_rgb_buffer(side)
        .map_err(GeneratePixelBufferCancelableError::PixelBuffer)?;

    for (i, &iterations) in grid.cells().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(iterations);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(side, side, buffer)
        .map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

fn reserve_rgb_buffer(side: usize) -> Result<PixelBufferData, PixelBufferError> {
    let too_large = PixelBufferError::TooLarge {
        width: side,
        height: side,
    };
    let bytes = side
        .checked_mul(side)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(too_large.clone())?;

    let mut buffer = PixelBufferData::new();
    buffer.try_reserve_exact(bytes).map_err(|_| too_large)?;

    Ok(buffer)
}
