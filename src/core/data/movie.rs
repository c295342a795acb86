use crate::core::data::iteration_grid::IterationGrid;

/// The rendered frames of a zoom, in temporal order. Every frame has the same side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    frames: Vec<IterationGrid>,
}

impl Movie {
    /// Only the movie generator builds movies, after every frame rendered successfully.
    pub(crate) fn from_frames(frames: Vec<IterationGrid>) -> Self {
        debug_assert!(
            frames.windows(2).all(|pair| pair[0].side() == pair[1].side()),
            "all frames of a movie share one side length"
        );

        Self { frames }
    }

    pub fn frames(&self) -> &[IterationGrid] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&IterationGrid> {
        self.frames.get(index)
    }

    pub fn side(&self) -> Option<usize> {
        self.frames.first().map(IterationGrid::side)
    }

    pub fn into_frames(self) -> Vec<IterationGrid> {
        self.frames
    }
}
