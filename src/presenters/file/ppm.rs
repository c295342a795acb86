use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as binary PPM: a `P6 <width> <height> 255\n` header followed by
/// the raw row-major RGB bytes.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P6 {} {} 255", buffer.width(), buffer.height())?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let file = File::create(filepath)?;

        write_ppm(buffer, BufWriter::new(file))
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
