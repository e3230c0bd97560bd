//! Mesh generation and buffer export.
//!
//! A host calls `cl_populate`, sizes its buffers from the counts, copies the
//! flat point and face arrays out, then frees the mesh.

use crate::mesh::{populate, Mesh};
use crate::state::Grid;

/// Builds the cube mesh for a grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// A mesh to be freed with `cl_destroy_mesh()`, or null if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn cl_populate(ptr: *const Grid) -> *mut Mesh {
    if ptr.is_null() {
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(populate(&*ptr)))
}

/// Destroys a mesh.
///
/// # Safety
/// - `mesh` must be a pointer returned by `cl_populate()`, or null
#[no_mangle]
pub unsafe extern "C" fn cl_destroy_mesh(mesh: *mut Mesh) {
    if !mesh.is_null() {
        drop(Box::from_raw(mesh));
    }
}

/// Number of points (each three `f64`s), or 0 if mesh is null.
///
/// # Safety
/// - `mesh` must be a valid Mesh pointer, or null
#[no_mangle]
pub unsafe extern "C" fn cl_mesh_point_count(mesh: *const Mesh) -> u64 {
    if mesh.is_null() {
        return 0;
    }
    (*mesh).points.len() as u64
}

/// Number of quad faces (each four `u32`s), or 0 if mesh is null.
///
/// # Safety
/// - `mesh` must be a valid Mesh pointer, or null
#[no_mangle]
pub unsafe extern "C" fn cl_mesh_face_count(mesh: *const Mesh) -> u64 {
    if mesh.is_null() {
        return 0;
    }
    (*mesh).faces.len() as u64
}

/// Copies points as `x, y, z, ...` into `out_buf`.
///
/// # Safety
/// - `mesh` must be a valid Mesh pointer, or null
/// - `out_buf` must point to at least `out_len` writable `f64`s
///
/// # Returns
/// Number of `f64`s written, or 0 if the buffer is too small.
#[no_mangle]
pub unsafe extern "C" fn cl_mesh_copy_points(
    mesh: *const Mesh,
    out_buf: *mut f64,
    out_len: usize,
) -> u64 {
    if mesh.is_null() || out_buf.is_null() {
        return 0;
    }

    let flat = (*mesh).flat_points();
    if out_len < flat.len() {
        return 0;
    }
    std::slice::from_raw_parts_mut(out_buf, flat.len()).copy_from_slice(&flat);
    flat.len() as u64
}

/// Copies faces as `a, b, c, d, ...` (0-based point indices) into `out_buf`.
///
/// # Safety
/// - `mesh` must be a valid Mesh pointer, or null
/// - `out_buf` must point to at least `out_len` writable `u32`s
///
/// # Returns
/// Number of `u32`s written, or 0 if the buffer is too small.
#[no_mangle]
pub unsafe extern "C" fn cl_mesh_copy_faces(
    mesh: *const Mesh,
    out_buf: *mut u32,
    out_len: usize,
) -> u64 {
    if mesh.is_null() || out_buf.is_null() {
        return 0;
    }

    let flat = (*mesh).flat_faces();
    if out_len < flat.len() {
        return 0;
    }
    std::slice::from_raw_parts_mut(out_buf, flat.len()).copy_from_slice(&flat);
    flat.len() as u64
}
