//! Error type shared by every grid operation.

use std::result;

use cellgrid_ids::ItemId;
use thiserror::Error;

use crate::{geom::CellRect, relocation::Phase};

/// Convenient result type for grid operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors surfaced by the grid engine.
///
/// Every variant is recoverable: a failed call leaves the grid exactly as it
/// was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A canvas dimension or cell-size hint was not positive.
    #[error("Invalid grid config: {field} must be positive (got {value})")]
    InvalidConfig {
        /// Name of the offending input.
        field: &'static str,
        /// Value that was supplied.
        value: i32,
    },

    /// A cell rectangle was built with a span smaller than one cell.
    #[error("Invalid span {span_h}x{span_v}: spans must cover at least one cell")]
    InvalidSpan {
        /// Horizontal span that was supplied.
        span_h: i32,
        /// Vertical span that was supplied.
        span_v: i32,
    },

    /// The target rectangle is out of bounds or occupied.
    #[error("Invalid position {rect}")]
    InvalidPosition {
        /// Rectangle that was rejected.
        rect: CellRect,
    },

    /// A protocol call arrived outside the phase in which it is legal.
    #[error("Cannot {op} while {phase}")]
    InvalidState {
        /// Operation that was attempted.
        op: &'static str,
        /// Phase the grid was in.
        phase: Phase,
    },

    /// The referenced item is not placed on the grid.
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// An item with this identity is already placed.
    #[error("Item {0} is already placed")]
    DuplicateItem(ItemId),
}
