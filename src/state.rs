//! Core grid structure and helper methods.

/// A cubic occupancy grid.
///
/// Cells are stored flat in z,y,x order (z changes slowest, x fastest),
/// one byte per cell: 0 = dead, 1 = alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub size: i16,
    pub cells: Vec<u8>,
    pub generation: u64,
}

impl Grid {
    /// Get the linear index for a 3D coordinate
    #[inline]
    pub fn index(&self, x: i16, y: i16, z: i16) -> usize {
        let side = self.size as usize;
        z as usize * side * side + y as usize * side + x as usize
    }

    /// Whether a coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i16, y: i16, z: i16) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y) && (0..self.size).contains(&z)
    }

    /// Read a cell. Out-of-range coordinates read as dead.
    pub fn get(&self, x: i16, y: i16, z: i16) -> bool {
        self.contains(x, y, z) && self.cells[self.index(x, y, z)] != 0
    }

    /// Write a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i16, y: i16, z: i16, alive: bool) {
        if self.contains(x, y, z) {
            let idx = self.index(x, y, z);
            self.cells[idx] = alive as u8;
        }
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::create_grid;

    #[test]
    fn test_index_layout() {
        let grid = create_grid(4);
        assert_eq!(grid.index(0, 0, 0), 0);
        assert_eq!(grid.index(1, 0, 0), 1);
        assert_eq!(grid.index(0, 1, 0), 4);
        assert_eq!(grid.index(0, 0, 1), 16);
        assert_eq!(grid.index(3, 3, 3), 63);
    }

    #[test]
    fn test_set_get_and_count() {
        let mut grid = create_grid(8);
        assert!(grid.is_empty());

        grid.set(0, 0, 0, true);
        grid.set(7, 7, 7, true);
        grid.set(3, 4, 5, true);
        assert!(grid.get(3, 4, 5));
        assert!(!grid.get(5, 4, 3));
        assert_eq!(grid.live_count(), 3);

        grid.set(0, 0, 0, false);
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = create_grid(4);
        grid.set(-1, 0, 0, true);
        grid.set(4, 0, 0, true);
        assert!(grid.is_empty());
        assert!(!grid.get(-1, -1, -1));
        assert!(!grid.get(10, 10, 10));
    }
}
