//! Tile occupancy grid for the raycast demo

use serde::{Deserialize, Serialize};

/// State of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

/// Fixed-size 2D grid of cells, stored row-major (`y * width + x`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether signed tile coordinates fall inside the grid
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds cells are never occupied
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Cell::Occupied)
    }

    /// Set a cell. Returns false (and does nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip a cell between empty and occupied
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        match self.get(x, y) {
            Some(Cell::Empty) => self.set(x, y, Cell::Occupied),
            Some(Cell::Occupied) => self.set(x, y, Cell::Empty),
            None => false,
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Occupied).count()
    }

    /// Iterate all cells as `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i % width, i / width, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(40, 22);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.iter().count(), 40 * 22);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.is_occupied(10, 10));
        assert!(!grid.set(4, 0, Cell::Occupied));
        assert!(!grid.toggle(-1, -1));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_set_and_toggle() {
        let mut grid = Grid::new(4, 3);
        assert!(grid.set(3, 2, Cell::Occupied));
        assert!(grid.is_occupied(3, 2));

        assert!(grid.toggle(3, 2));
        assert!(!grid.is_occupied(3, 2));
        assert!(grid.toggle(0, 1));
        assert!(grid.is_occupied(0, 1));

        // Row-major layout: (0, 1) is the 5th cell
        let (x, y, cell) = grid.iter().nth(4).unwrap();
        assert_eq!((x, y, cell), (0, 1, Cell::Occupied));

        grid.clear();
        assert_eq!(grid.occupied_count(), 0);
    }
}
