//! Simulation configuration.

use crate::error::ConfigError;
use crate::seed::{SEED_GRID_SIZE, SEED_MIN_SIZE};

/// Generations run when nothing else is asked for.
pub const DEFAULT_GENERATIONS: u32 = 3;

/// How to run a seed-to-mesh simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    /// Side length of the cubic grid.
    pub size: i16,
    /// Number of generations to evolve the seed.
    pub generations: u32,
    /// Worker threads for stepping.
    /// `None` means the single-threaded stepper.
    pub threads: Option<usize>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        LifeConfig {
            size: SEED_GRID_SIZE,
            generations: DEFAULT_GENERATIONS,
            threads: None,
        }
    }
}

impl LifeConfig {
    /// Set the grid side length.
    pub fn size(mut self, size: i16) -> Self {
        self.size = size;
        self
    }

    /// Set the number of generations.
    pub fn generations(mut self, n: u32) -> Self {
        self.generations = n;
        self
    }

    /// Step on a rayon pool of `n` threads.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n.max(1));
        self
    }

    /// Check that the grid can be allocated and seeded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.size < SEED_MIN_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.size,
                min: SEED_MIN_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LifeConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.generations, 3);
        assert_eq!(config.threads, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LifeConfig::default().size(16).generations(10).threads(0);
        assert_eq!(config.size, 16);
        assert_eq!(config.generations, 10);
        assert_eq!(config.threads, Some(1));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(matches!(
            LifeConfig::default().size(-3).validate(),
            Err(ConfigError::InvalidSize(-3))
        ));
        assert!(matches!(
            LifeConfig::default().size(4).validate(),
            Err(ConfigError::GridTooSmall { size: 4, min: 5 })
        ));
        assert!(LifeConfig::default().size(5).validate().is_ok());
    }
}
