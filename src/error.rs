//! Error types for the boundaries of the crate.
//!
//! The automaton and mesher are total functions and never fail; everything
//! here is raised while parsing input, validating configuration or writing
//! output.

use std::path::PathBuf;

use thiserror::Error;

/// A seed address that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("expected 4 dot-separated octets, found {found}")]
    OctetCount { found: usize },
    #[error("octet {octet:?} is not a decimal number")]
    NotNumeric { octet: String },
    #[error("octet {octet:?} is out of range 0-255")]
    OutOfRange { octet: String },
}

/// An unusable simulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    InvalidSize(i16),
    #[error("grid size {size} cannot hold the seed block (needs at least {min})")]
    GridTooSmall { size: i16, min: i16 },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Failure while handing a mesh to an output sink.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no object has been added to render")]
    NothingToRender,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
