//! Cellular automaton stepping with B2-4/S3-8 rules.

use std::ops::RangeInclusive;

use log::debug;

use super::grid::{count_neighbors, create_grid};
use crate::state::Grid;

/// Neighbour counts at which a dead cell comes to life.
pub const BIRTH: RangeInclusive<u8> = 2..=4;

/// Neighbour counts at which a live cell survives.
pub const SURVIVAL: RangeInclusive<u8> = 3..=8;

/// Apply the transition rule to a single cell.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        SURVIVAL.contains(&neighbors)
    } else {
        BIRTH.contains(&neighbors)
    }
}

/// Compute the next generation of `src` into `dst`.
///
/// `dst` is resized to match `src` if needed; its previous contents are
/// overwritten and never read.
pub fn step_into(src: &Grid, dst: &mut Grid) {
    if dst.size != src.size || dst.cells.len() != src.cells.len() {
        *dst = create_grid(src.size);
    }

    for z in 0..src.size {
        for y in 0..src.size {
            for x in 0..src.size {
                let idx = src.index(x, y, z);
                let neighbors = count_neighbors(src, x, y, z);
                dst.cells[idx] = next_state(src.cells[idx] != 0, neighbors) as u8;
            }
        }
    }

    dst.generation = src.generation + 1;
}

/// Step the automaton forward by one generation.
///
/// Rules:
/// - Birth: a dead cell with 2 to 4 live neighbours becomes alive
/// - Survival: a live cell with 3 to 8 live neighbours stays alive
/// - Moore neighbourhood on a torus: 26 neighbours, wrapping on every face
///
/// The input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let mut next = create_grid(grid.size);
    step_into(grid, &mut next);
    next
}

/// Run `generations` steps and return the final grid.
///
/// Two buffers are swapped between generations so each step reads a
/// complete snapshot of the previous one.
pub fn iterate(grid: &Grid, generations: u32) -> Grid {
    let mut current = grid.clone();
    if generations == 0 {
        return current;
    }

    let mut next = create_grid(grid.size);
    for _ in 0..generations {
        step_into(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
        debug!(
            "generation {}: {} live cells",
            current.generation,
            current.live_count()
        );
    }

    current
}
