//! Grid creation, destruction, and generation queries.

use log::warn;

use crate::automaton;
use crate::state::Grid;

/// Creates a new all-dead cubic grid and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new Grid, or null if `size` is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `cl_destroy_grid()`.
#[no_mangle]
pub extern "C" fn cl_create_grid(size: i16) -> *mut Grid {
    if size <= 0 {
        warn!("cl_create_grid: rejecting size {}", size);
        return std::ptr::null_mut();
    }
    Box::into_raw(Box::new(automaton::create_grid(size)))
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by this library, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn cl_destroy_grid(ptr: *mut Grid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter from a grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn cl_get_generation(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation
}

/// Gets the side length of a grid, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn cl_get_size(ptr: *const Grid) -> i16 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).size
}

/// Counts live cells, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn cl_live_count(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).live_count() as u64
}
