/// A grid position: `x` is the column, `y` the row, both counted from the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}
