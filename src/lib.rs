//! Cube Life - 3D toroidal cellular automaton to cube mesh
//!
//! A dotted IPv4 address seeds a 4x4x2 block of a cubic grid. The grid is
//! evolved with a B2-4/S3-8 rule on a 26-neighbour torus, and every live cell
//! of the result becomes an unshared 8-point, 6-quad cube.
//!
//! The Rust API lives in `automaton`, `seed`, `mesh` and `pipeline`; hosts
//! that load the cdylib use the C ABI in `ffi`.

pub mod adapter;
pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod mesh;
pub mod pipeline;
pub mod seed;
pub mod state;


pub use adapter::{Material, ObjExporter, SceneSink};
pub use automaton::{iterate, step, StepController};
pub use config::LifeConfig;
pub use error::{AddressError, ConfigError, ExportError};
pub use mesh::{populate, Face, Mesh, Point};
pub use pipeline::Simulation;
pub use seed::{seed, seed_grid, Address};
pub use state::Grid;
