//! Seed, evolve, mesh.

use log::info;

use crate::automaton::{iterate, iterate_parallel};
use crate::config::LifeConfig;
use crate::error::ConfigError;
use crate::mesh::{populate, Mesh};
use crate::seed::{seed_grid, Address};
use crate::state::Grid;

/// The result of one seed-to-mesh run.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    pub address: Address,
    /// Grid after the last generation.
    pub grid: Grid,
    pub mesh: Mesh,
}

impl Simulation {
    /// Seed from `address`, run `config.generations` steps, and mesh the result.
    pub fn run(address: Address, config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seeded = seed_grid(&address, config.size)?;
        let grid = match config.threads {
            Some(threads) => iterate_parallel(&seeded, config.generations, threads)?,
            None => iterate(&seeded, config.generations),
        };
        let mesh = populate(&grid);

        info!(
            "{}: {} seed cells -> {} live cells after {} generations ({} points, {} faces)",
            address,
            seeded.live_count(),
            grid.live_count(),
            grid.generation,
            mesh.points.len(),
            mesh.faces.len()
        );

        Ok(Simulation {
            address,
            grid,
            mesh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed;

    #[test]
    fn test_run_defaults() {
        let address: Address = "192.168.1.1".parse().unwrap();
        let sim = Simulation::run(address, &LifeConfig::default()).unwrap();

        let expected_grid = iterate(&seed(&address), 3);
        assert_eq!(sim.grid, expected_grid);
        assert_eq!(sim.mesh, populate(&expected_grid));
        assert_eq!(sim.grid.generation, 3);
    }

    #[test]
    fn test_run_zero_generations_meshes_seed() {
        let address: Address = "255.0.0.0".parse().unwrap();
        let sim = Simulation::run(address, &LifeConfig::default().generations(0)).unwrap();

        assert_eq!(sim.grid, seed(&address));
        assert_eq!(sim.mesh.cube_count(), 8);
    }

    #[test]
    fn test_threaded_run_matches_sequential() {
        let address: Address = "10.20.30.40".parse().unwrap();
        let config = LifeConfig::default().size(10).generations(5);

        let sequential = Simulation::run(address, &config).unwrap();
        let threaded = Simulation::run(address, &config.threads(3)).unwrap();
        assert_eq!(sequential, threaded);
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let address: Address = "1.2.3.4".parse().unwrap();
        assert!(Simulation::run(address, &LifeConfig::default().size(3)).is_err());
    }
}
