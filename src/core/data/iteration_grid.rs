use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterationGridError {
    #[error("resolution {resolution} produces a grid too large to address")]
    ResolutionTooLarge { resolution: u64 },
    #[error("grid side {side} expects {expected} cells, got {actual}")]
    CellCountMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },
}

/// Side length of the square grid rendered at `resolution`: `2 * resolution + 1`.
pub fn side_for_resolution(resolution: u64) -> Result<usize, IterationGridError> {
    resolution
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_add(1))
        .and_then(|side| usize::try_from(side).ok())
        .ok_or(IterationGridError::ResolutionTooLarge { resolution })
}

/// Number of cells in the grid rendered at `resolution`: `(2 * resolution + 1)²`.
pub fn cells_for_resolution(resolution: u64) -> Result<usize, IterationGridError> {
    let side = side_for_resolution(resolution)?;

    side.checked_mul(side)
        .ok_or(IterationGridError::ResolutionTooLarge { resolution })
}

/// Square, row-major grid of escape times for one frame.
///
/// `0` marks a point that never escaped; any other value is the 1-based iteration at
/// which the orbit reached the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    side: usize,
    cells: Vec<u64>,
}

impl IterationGrid {
    pub fn from_cells(side: usize, cells: Vec<u64>) -> Result<Self, IterationGridError> {
        let expected = side.saturating_mul(side);

        if side == 0 || cells.len() != expected {
            return Err(IterationGridError::CellCountMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, point: Point) -> Option<u64> {
        if point.x >= self.side || point.y >= self.side {
            return None;
        }

        self.cells.get(point.y * self.side + point.x).copied()
    }

    /// The cell sampled exactly at the frame centre.
    pub fn centre(&self) -> u64 {
        let middle = self.side / 2;
        self.cells[middle * self.side + middle]
    }
}
