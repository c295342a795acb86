use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort: Sync {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
