//! Region extraction and import operations.

use crate::state::Grid;

/// An axis-aligned box of cells, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub min: [i16; 3],
    pub max: [i16; 3],
}

impl Region {
    pub fn new(min: [i16; 3], max: [i16; 3]) -> Self {
        Region { min, max }
    }

    /// Clamp the region to the grid, or `None` if nothing is left.
    fn clamp_to(&self, grid: &Grid) -> Option<Region> {
        let clamp = |v: i16| v.max(0).min(grid.size);
        let min = self.min.map(clamp);
        let max = self.max.map(clamp);

        if (0..3).any(|axis| min[axis] >= max[axis]) {
            return None;
        }
        Some(Region { min, max })
    }

    /// Number of cells in the region (0 if empty or inverted).
    pub fn volume(&self) -> usize {
        (0..3)
            .map(|axis| (self.max[axis] - self.min[axis]).max(0) as usize)
            .product()
    }
}

/// Extract a region of the grid into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This order matches the order used by `import_region` for symmetry.
///
/// # Returns
/// Number of bytes written to the buffer, or 0 on error.
pub fn extract_region(grid: &Grid, out_buf: &mut [u8], region: Region) -> u64 {
    if grid.cells.is_empty() {
        return 0;
    }

    let Some(region) = region.clamp_to(grid) else {
        return 0;
    };

    // Ensure buffer is large enough
    if out_buf.len() < region.volume() {
        return 0;
    }

    let mut offset = 0;
    for z in region.min[2]..region.max[2] {
        for y in region.min[1]..region.max[1] {
            for x in region.min[0]..region.max[0] {
                out_buf[offset] = grid.cells[grid.index(x, y, z)];
                offset += 1;
            }
        }
    }

    offset as u64
}

/// Import a region from a flat buffer into the grid.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `extract_region`).
/// Input values are normalized: 0 = dead, any non-zero = alive.
///
/// # Returns
/// Number of bytes read from the buffer, or 0 on error.
pub fn import_region(grid: &mut Grid, in_buf: &[u8], region: Region) -> u64 {
    let Some(region) = region.clamp_to(grid) else {
        return 0;
    };

    // Ensure buffer has enough data
    if in_buf.len() < region.volume() {
        return 0;
    }

    let mut offset = 0;
    for z in region.min[2]..region.max[2] {
        for y in region.min[1]..region.max[1] {
            for x in region.min[0]..region.max[0] {
                let idx = grid.index(x, y, z);
                grid.cells[idx] = (in_buf[offset] != 0) as u8;
                offset += 1;
            }
        }
    }

    offset as u64
}
