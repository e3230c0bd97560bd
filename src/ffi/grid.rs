//! Cell access and stepping.

use crate::automaton;
use crate::state::Grid;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn cl_set_cell(ptr: *mut Grid, x: i16, y: i16, z: i16, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set(x, y, z, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn cl_get_cell(ptr: *const Grid, x: i16, y: i16, z: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).get(x, y, z) as u8
}

/// Advances the grid by one generation in place.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn cl_step(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }
    let grid = &mut *ptr;
    *grid = automaton::step(grid);
}

/// Advances the grid by `generations` generations in place.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn cl_iterate(ptr: *mut Grid, generations: u32) {
    if ptr.is_null() {
        return;
    }
    let grid = &mut *ptr;
    *grid = automaton::iterate(grid, generations);
}
