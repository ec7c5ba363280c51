use crate::types::CellValue;

/// Row-major grid of growth intensities (`index = x + y * width`).
///
/// Cells start empty (`0`). Writes go through [`IntensityGrid::place_cell`],
/// which only ever fills empty cells, so the first value written to a cell is
/// the one that stays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    cells: Vec<CellValue>,
}

impl IntensityGrid {
    /// Creates an empty grid of `width * height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// Returns the value at `(x, y)`.
    ///
    /// ### Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> CellValue {
        self.cells[self.index(x, y)]
    }

    /// Writes `value` at `(x, y)` if the cell is empty and the write is allowed.
    ///
    /// A write is allowed only for `0 < x < width`, `0 < y < height` and
    /// `value > 0`. The first row and column are never written. Anything
    /// else is silently ignored.
    ///
    /// ### Returns
    /// `true` if the cell was written.
    pub fn place_cell(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        if x <= 0 || y <= 0 || value <= 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }

        let idx = self.index(x, y);
        if self.cells[idx] != 0 {
            return false;
        }
        self.cells[idx] = value;
        true
    }

    /// Overwrites every cell with the contents of `other`.
    ///
    /// ### Panics
    /// Panics if the grids have different sizes.
    pub fn copy_from(&mut self, other: &IntensityGrid) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "grid size mismatch"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Number of nonzero cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = IntensityGrid::new(5, 3);
        assert_eq!(grid.cells().len(), 15);
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn place_cell_writes_interior_cell() {
        let mut grid = IntensityGrid::new(4, 4);
        assert!(grid.place_cell(2, 1, 7));
        assert_eq!(grid.get(2, 1), 7);
        assert_eq!(grid.cells()[2 + 4], 7);
    }

    #[test]
    fn place_cell_never_overwrites() {
        let mut grid = IntensityGrid::new(4, 4);
        assert!(grid.place_cell(1, 1, 10));
        assert!(!grid.place_cell(1, 1, 20));
        assert_eq!(grid.get(1, 1), 10);
    }

    #[test]
    fn place_cell_ignores_edges_and_outside() {
        let mut grid = IntensityGrid::new(4, 3);

        for (x, y) in [(0, 1), (1, 0), (4, 1), (1, 3), (-1, 1), (1, -1), (100, 100)] {
            assert!(!grid.place_cell(x, y, 5), "({x}, {y}) should be rejected");
        }
        assert_eq!(grid.active_count(), 0);

        // The last column and row are inside the exclusive upper bound.
        assert!(grid.place_cell(3, 2, 5));
    }

    #[test]
    fn place_cell_ignores_non_positive_values() {
        let mut grid = IntensityGrid::new(4, 4);
        assert!(!grid.place_cell(1, 1, 0));
        assert!(!grid.place_cell(1, 1, -3));
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn copy_from_replaces_contents() {
        let mut a = IntensityGrid::new(3, 3);
        let mut b = IntensityGrid::new(3, 3);
        a.place_cell(1, 1, 4);
        b.place_cell(2, 2, 9);

        a.copy_from(&b);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn copy_from_panics_on_mismatched_sizes() {
        let mut a = IntensityGrid::new(3, 3);
        let b = IntensityGrid::new(4, 3);
        a.copy_from(&b);
    }
}
