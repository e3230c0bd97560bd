//! Cube-per-cell mesh generation.
//!
//! Every live cell becomes an independent axis-aligned unit cube: 8 points
//! appended to the point list and 6 quads indexing only those points.
//! Coincident corners of neighbouring cubes are not welded.

use crate::state::Grid;

/// A vertex position in world space.
pub type Point = [f64; 3];

/// A quad as four indices into `Mesh::points`.
pub type Face = [u32; 4];

/// Half the edge length of a cell cube, `sqrt(1/4)`.
pub const HALF_EXTENT: f64 = 0.5;

/// Corner sign pattern, applied to (x, y, z) in emission order.
pub const CUBE_CORNERS: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

/// Quads of a cube, as offsets into its 8 corners.
pub const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [2, 6, 7, 3],
    [3, 0, 4, 7],
];

/// Points and quads describing the live cells of one grid snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub points: Vec<Point>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Number of cubes in the mesh.
    pub fn cube_count(&self) -> usize {
        self.faces.len() / CUBE_FACES.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as a flat `x, y, z, x, y, z, ...` buffer.
    pub fn flat_points(&self) -> Vec<f64> {
        self.points.iter().flatten().copied().collect()
    }

    /// Faces as a flat `a, b, c, d, a, b, c, d, ...` buffer.
    pub fn flat_faces(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Append one cube centred at `center`.
    fn push_cube(&mut self, center: Point) {
        let base = self.points.len() as u32;

        self.points.extend(CUBE_CORNERS.iter().map(|sign| {
            [
                center[0] + sign[0] * HALF_EXTENT,
                center[1] + sign[1] * HALF_EXTENT,
                center[2] + sign[2] * HALF_EXTENT,
            ]
        }));
        self.faces
            .extend(CUBE_FACES.iter().map(|&face| face.map(|corner| base + corner)));
    }
}

/// Build the mesh for every live cell of `grid`.
///
/// Cells are visited x outermost, then y, then z, so point and face order
/// is reproducible. Cell `(i, j, k)` is centred at `(i, j, k) - size / 2`,
/// with the half computed in floating point.
pub fn populate(grid: &Grid) -> Mesh {
    let live = grid.live_count();
    let mut mesh = Mesh {
        points: Vec::with_capacity(live * CUBE_CORNERS.len()),
        faces: Vec::with_capacity(live * CUBE_FACES.len()),
    };

    let half = grid.size as f64 / 2.0;
    for i in 0..grid.size {
        for j in 0..grid.size {
            for k in 0..grid.size {
                if grid.cells[grid.index(i, j, k)] == 0 {
                    continue;
                }
                mesh.push_cube([i as f64 - half, j as f64 - half, k as f64 - half]);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::create_grid;

    #[test]
    fn test_half_extent_is_sqrt_quarter() {
        assert_eq!(HALF_EXTENT, (0.25f64).sqrt());
    }

    #[test]
    fn test_empty_grid_has_empty_mesh() {
        let mesh = populate(&create_grid(8));
        assert!(mesh.points.is_empty());
        assert!(mesh.faces.is_empty());
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_single_cell_at_origin() {
        let mut grid = create_grid(8);
        grid.set(0, 0, 0, true);

        let mesh = populate(&grid);

        assert_eq!(
            mesh.points,
            vec![
                [-3.5, -3.5, -3.5],
                [-3.5, -3.5, -4.5],
                [-4.5, -3.5, -4.5],
                [-4.5, -3.5, -3.5],
                [-3.5, -4.5, -3.5],
                [-3.5, -4.5, -4.5],
                [-4.5, -4.5, -4.5],
                [-4.5, -4.5, -3.5],
            ]
        );
        assert_eq!(
            mesh.faces,
            vec![
                [0, 1, 2, 3],
                [4, 5, 6, 7],
                [0, 4, 5, 1],
                [1, 5, 6, 2],
                [2, 6, 7, 3],
                [3, 0, 4, 7],
            ]
        );
        assert_eq!(mesh.cube_count(), 1);
    }

    #[test]
    fn test_second_cube_offsets_indices() {
        let mut grid = create_grid(8);
        grid.set(1, 0, 0, true);
        grid.set(0, 0, 5, true);

        let mesh = populate(&grid);

        // x is the outer loop, so (0,0,5) is emitted first
        assert_eq!(mesh.points[0], [-3.5, -3.5, 1.5]);
        assert_eq!(mesh.points[8], [-2.5, -3.5, -3.5]);
        assert_eq!(mesh.faces[6], [8, 9, 10, 11]);
        assert_eq!(mesh.faces[11], [11, 8, 12, 15]);
    }

    #[test]
    fn test_adjacent_cells_are_not_welded() {
        let mut grid = create_grid(4);
        grid.set(1, 1, 1, true);
        grid.set(2, 1, 1, true);

        let mesh = populate(&grid);

        assert_eq!(mesh.points.len(), 16);
        assert_eq!(mesh.faces.len(), 12);
        // The shared corner appears once per cube
        let shared = [-0.5, -0.5, -0.5];
        assert_eq!(mesh.points.iter().filter(|&&p| p == shared).count(), 2);
    }

    #[test]
    fn test_odd_size_half_offset() {
        let mut grid = create_grid(5);
        grid.set(0, 0, 0, true);

        let mesh = populate(&grid);
        assert_eq!(mesh.points[0], [-2.0, -2.0, -2.0]);
        assert_eq!(mesh.points[6], [-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_flat_buffers() {
        let mut grid = create_grid(8);
        grid.set(4, 4, 4, true);

        let mesh = populate(&grid);
        let points = mesh.flat_points();
        let faces = mesh.flat_faces();

        assert_eq!(points.len(), 24);
        assert_eq!(&points[..3], &[0.5, 0.5, 0.5]);
        assert_eq!(faces.len(), 24);
        assert_eq!(&faces[20..], &[3, 0, 4, 7]);
    }
}
