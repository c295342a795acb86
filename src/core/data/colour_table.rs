use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourTableError {
    #[error("colour table must contain at least one colour")]
    Empty,
}

/// Ordered, non-empty list of colours used cyclically to paint escape times.
///
/// An escape time of `0` (never escaped) is always painted black, independent of the
/// table contents. An escape time `n >= 1` is painted `colours[(n - 1) % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourTable {
    colours: Vec<Colour>,
}

impl ColourTable {
    pub fn new(colours: Vec<Colour>) -> Result<Self, ColourTableError> {
        if colours.is_empty() {
            return Err(ColourTableError::Empty);
        }

        Ok(Self { colours })
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

impl ColourMap<u64> for ColourTable {
    fn map(&self, iterations: u64) -> Colour {
        if iterations == 0 {
            return Colour::BLACK;
        }

        // usize -> u64 never truncates on supported targets, and the remainder fits back
        let index = ((iterations - 1) % self.colours.len() as u64) as usize;
        self.colours[index]
    }
}
