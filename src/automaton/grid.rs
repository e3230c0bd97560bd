//! Grid initialization and toroidal neighbour access.

use crate::state::Grid;

/// Initialize an all-dead cubic grid with the given side length.
pub fn create_grid(size: i16) -> Grid {
    let side = size.max(0) as usize;
    Grid {
        size,
        cells: vec![0; side * side * side],
        generation: 0,
    }
}

/// Calculate the linear index for a 3D coordinate.
#[inline]
pub fn index_of(grid: &Grid, x: i16, y: i16, z: i16) -> usize {
    grid.index(x, y, z)
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: i16, y: i16, z: i16) -> bool {
    grid.contains(x, y, z)
}

/// Map a neighbour coordinate onto the torus.
///
/// Only `-1` and `size` ever reach this from `count_neighbors`; both wrap
/// to the opposite face.
#[inline]
pub fn wrap(coord: i16, size: i16) -> i16 {
    (coord + size) % size
}

/// Count alive neighbors using Moore neighborhood (26 neighbors) on a torus.
///
/// Every offset is counted separately, so on grids narrower than three
/// cells the same neighbour can be seen through more than one offset.
pub fn count_neighbors(grid: &Grid, x: i16, y: i16, z: i16) -> u8 {
    let size = grid.size;
    let mut count = 0;

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                let nx = wrap(x + dx, size);
                let ny = wrap(y + dy, size);
                let nz = wrap(z + dz, size);

                count += grid.cells[grid.index(nx, ny, nz)];
            }
        }
    }

    count
}
