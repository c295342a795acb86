use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

fn dimensions_to_buffer_size(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(3)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("{width}x{height} image needs {expected} bytes, buffer holds {buffer_size}")]
    BoundsMismatch {
        width: usize,
        height: usize,
        expected: usize,
        buffer_size: usize,
    },
    #[error("{width}x{height} image is too large to address")]
    TooLarge { width: usize, height: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB raster, three bytes per pixel and no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        width: usize,
        height: usize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = dimensions_to_buffer_size(width, height)
            .ok_or(PixelBufferError::TooLarge { width, height })?;

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                width,
                height,
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        let index = (pixel.y * self.width + pixel.x) * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.buffer_size(), 12);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                width: 2,
                height: 2,
                expected: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                width: 2,
                height: 2,
                expected: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_from_data_overflowing_dimensions() {
        let result = PixelBuffer::from_data(usize::MAX, 2, vec![]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = PixelBuffer::from_data(2, 2, data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour::new(4, 5, 6)));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour::new(7, 8, 9)));
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 2 }), None);
    }
}
