//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for creating grids, stepping the
//! automaton (sequentially or on a rayon pool), and extracting/importing
//! regions. The FFI layer in `ffi/` calls these functions.

pub mod grid;
pub mod parallel;
pub mod region;
pub mod stepping;

pub use grid::{count_neighbors, create_grid, in_bounds, index_of, wrap};
pub use parallel::{iterate_parallel, StepController};
pub use region::{extract_region, import_region, Region};
pub use stepping::{iterate, next_state, step, step_into, BIRTH, SURVIVAL};
