//! Placement validation: bounds plus occupancy.

use std::fmt::{self, Display, Formatter};

use cellgrid_ids::ItemId;

use crate::{
    geom::{CellRect, GridConfig},
    occupancy::OccupancyIndex,
};

/// Why a rectangle cannot be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Part of the rectangle falls outside the grid.
    OutOfBounds,
    /// The rectangle overlaps an item already on the grid.
    Occupied {
        /// First overlapping item in insertion order.
        by: ItemId,
    },
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::Occupied { by } => write!(f, "occupied by {by}"),
        }
    }
}

/// Decides whether a rectangle may be placed on the grid as it stands.
#[derive(Clone, Copy, Debug)]
pub struct PlacementValidator<'a> {
    /// Grid dimensions.
    config: &'a GridConfig,
    /// Current occupants.
    index: &'a OccupancyIndex,
}

impl<'a> PlacementValidator<'a> {
    /// Validator over `config` and `index`.
    #[must_use]
    pub const fn new(config: &'a GridConfig, index: &'a OccupancyIndex) -> Self {
        Self { config, index }
    }

    /// Check `rect`, ignoring `excluding` when looking for overlaps.
    ///
    /// Bounds are checked first, so an out-of-range rectangle is reported as
    /// such even when it also overlaps an item.
    pub fn check(&self, rect: &CellRect, excluding: Option<ItemId>) -> Result<(), Rejection> {
        if !self.config.contains(rect) {
            return Err(Rejection::OutOfBounds);
        }
        match self.index.find_intersecting(rect, excluding) {
            Some(occupant) => Err(Rejection::Occupied { by: occupant.id() }),
            None => Ok(()),
        }
    }

    /// Whether [`Self::check`] passes.
    #[must_use]
    pub fn is_valid(&self, rect: &CellRect, excluding: Option<ItemId>) -> bool {
        self.check(rect, excluding).is_ok()
    }
}
