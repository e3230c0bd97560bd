//! Region extraction and import FFI functions.

use crate::automaton::{self, Region};
use crate::state::Grid;

/// Extracts a box of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// This matches the layout expected by `cl_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `out_buf` must point to at least `out_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error (null pointer, short buffer).
#[no_mangle]
pub unsafe extern "C" fn cl_extract_region(
    ptr: *const Grid,
    out_buf: *mut u8,
    out_len: usize,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, out_len);
    let region = Region::new([min_x, min_y, min_z], [max_x, max_y, max_z]);
    automaton::extract_region(&*ptr, buf_slice, region)
}

/// Imports a box of cells from a flat buffer.
///
/// # Layout
/// The buffer is expected to be in z,y,x order (matching `cl_extract_region`).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `in_buf` must point to at least `in_len` readable bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn cl_import_region(
    ptr: *mut Grid,
    in_buf: *const u8,
    in_len: usize,
    min_x: i16,
    min_y: i16,
    min_z: i16,
    max_x: i16,
    max_y: i16,
    max_z: i16,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts(in_buf, in_len);
    let region = Region::new([min_x, min_y, min_z], [max_x, max_y, max_z]);
    automaton::import_region(&mut *ptr, buf_slice, region)
}
