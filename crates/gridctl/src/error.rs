//! Error handling for the gridctl crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for gridctl operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running gridctl.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Scenario loading or validation errors.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// The grid rejected a seed or a gesture.
    #[error("Grid error: {0}")]
    Grid(#[from] cellgrid::Error),
    /// A gesture failed at a given step of the script.
    #[error("Step {step}: {source}")]
    Step {
        /// 1-based index of the failing event.
        step: usize,
        /// Underlying engine error.
        source: cellgrid::Error,
    },
}
