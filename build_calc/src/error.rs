//! Calculator errors

use crate::config::ConfigError;
use thiserror::Error;

/// Error from running a build through the calculator
#[derive(Error, Debug)]
pub enum CalcError {
    /// The build cannot seed base stats (unknown class, bad level)
    #[error("Invalid build: {0}")]
    InvalidBuild(String),
    #[error("No build loaded")]
    NoBuild,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
