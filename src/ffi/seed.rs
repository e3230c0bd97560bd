//! Seeding from a C string address.

use std::ffi::{c_char, CStr};

use log::warn;

use crate::seed::{seed, Address};
use crate::state::Grid;

/// Parses a dotted IPv4 address and returns a freshly seeded 8x8x8 grid.
///
/// # Safety
/// - `address` must be a valid NUL-terminated string, or null
///
/// # Returns
/// A grid to be freed with `cl_destroy_grid()`, or null if the address is
/// null, not UTF-8, or not a valid `a.b.c.d` address.
#[no_mangle]
pub unsafe extern "C" fn cl_seed_address(address: *const c_char) -> *mut Grid {
    if address.is_null() {
        return std::ptr::null_mut();
    }

    let Ok(text) = CStr::from_ptr(address).to_str() else {
        warn!("cl_seed_address: address is not UTF-8");
        return std::ptr::null_mut();
    };

    match text.parse::<Address>() {
        Ok(parsed) => Box::into_raw(Box::new(seed(&parsed))),
        Err(err) => {
            warn!("cl_seed_address: {}", err);
            std::ptr::null_mut()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::{cl_destroy_grid, cl_get_cell, cl_get_size, cl_live_count};
    use std::ffi::CString;

    #[test]
    fn test_seed_valid_address() {
        let address = CString::new("192.168.1.1").unwrap();
        unsafe {
            let grid = cl_seed_address(address.as_ptr());
            assert!(!grid.is_null());
            assert_eq!(cl_get_size(grid), 8);
            assert_eq!(cl_live_count(grid), 7);
            assert_eq!(cl_get_cell(grid, 1, 1, 3), 1);
            cl_destroy_grid(grid);
        }
    }

    #[test]
    fn test_seed_invalid_address() {
        for bad in ["1.2.3", "1.2.3.300", "a.b.c.d", ""] {
            let address = CString::new(bad).unwrap();
            unsafe {
                assert!(cl_seed_address(address.as_ptr()).is_null(), "{}", bad);
            }
        }
        unsafe {
            assert!(cl_seed_address(std::ptr::null()).is_null());
        }
    }
}
