//! C FFI layer for host integration.
//!
//! This module exports C ABI functions for hosts that load the cdylib
//! (a 3D editor's scripting runtime, LuaJIT FFI, ctypes, ...).
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `automaton`, `seed` and `mesh`. These functions
//! are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod mesh;
pub mod region;
pub mod seed;

pub use grid::{cl_get_cell, cl_iterate, cl_set_cell, cl_step};
pub use lifecycle::{cl_create_grid, cl_destroy_grid, cl_get_generation, cl_get_size, cl_live_count};
pub use mesh::{
    cl_destroy_mesh, cl_mesh_copy_faces, cl_mesh_copy_points, cl_mesh_face_count,
    cl_mesh_point_count, cl_populate,
};
pub use region::{cl_extract_region, cl_import_region};
pub use seed::cl_seed_address;
