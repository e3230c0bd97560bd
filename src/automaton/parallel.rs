//! Multi-threaded stepping over disjoint z-slabs.
//!
//! Core invariant: all reads come from the immutable generation-N grid, all
//! writes go to a separate generation-N+1 buffer, and each worker owns a
//! whole z-slab of that buffer. The new generation is only swapped in after
//! every slab has been written, so the result is bit-identical to
//! `stepping::step` regardless of thread count or slab order.

use log::debug;
use rayon::prelude::*;

use super::grid::{count_neighbors, create_grid};
use super::stepping::next_state;
use crate::error::ConfigError;
use crate::state::Grid;

/// Owns a grid, its back buffer, and the rayon pool that steps it.
pub struct StepController {
    /// Current generation.
    pub grid: Grid,

    /// Back buffer for generation N+1. Contents are garbage between steps.
    scratch: Grid,

    /// Rayon thread pool (at least one thread).
    pub thread_pool: rayon::ThreadPool,
}

impl StepController {
    /// Create a controller around an existing grid.
    pub fn new(grid: Grid, num_threads: usize) -> Result<Self, ConfigError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads.max(1))
            .build()?;
        let scratch = create_grid(grid.size);

        Ok(StepController {
            grid,
            scratch,
            thread_pool,
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Extract the inner grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance one full generation. Returns once every slab is written.
    pub fn step_blocking(&mut self) {
        let src = &self.grid;
        let dst = &mut self.scratch;
        if dst.size != src.size || dst.cells.len() != src.cells.len() {
            *dst = create_grid(src.size);
        }

        let side = src.size as usize;
        if side > 0 {
            self.thread_pool.install(|| {
                dst.cells
                    .par_chunks_mut(side * side)
                    .enumerate()
                    .for_each(|(z, slab)| process_slab(src, z as i16, slab));
            });
        }
        dst.generation = src.generation + 1;

        std::mem::swap(&mut self.grid, &mut self.scratch);
        debug!(
            "generation {}: {} live cells ({} threads)",
            self.grid.generation,
            self.grid.live_count(),
            self.threads()
        );
    }

    /// Advance `generations` full generations.
    pub fn run(&mut self, generations: u32) {
        for _ in 0..generations {
            self.step_blocking();
        }
    }
}

/// Fill one z-slab of the next generation.
fn process_slab(src: &Grid, z: i16, slab: &mut [u8]) {
    let side = src.size as usize;
    for y in 0..src.size {
        for x in 0..src.size {
            let alive = src.cells[src.index(x, y, z)] != 0;
            let neighbors = count_neighbors(src, x, y, z);
            slab[y as usize * side + x as usize] = next_state(alive, neighbors) as u8;
        }
    }
}

/// Parallel counterpart of `stepping::iterate`.
pub fn iterate_parallel(
    grid: &Grid,
    generations: u32,
    num_threads: usize,
) -> Result<Grid, ConfigError> {
    let mut ctrl = StepController::new(grid.clone(), num_threads)?;
    ctrl.run(generations);
    Ok(ctrl.into_grid())
}
