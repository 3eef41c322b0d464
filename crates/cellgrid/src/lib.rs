//! cellgrid: a placement engine for items on a uniform cell grid.
//!
//! The engine maps canvas pixels to cells, tracks which items occupy which
//! cells, validates placements, and relocates items through a drag protocol
//! that commits, swaps single cells, or reverts. It never paints and never
//! reads input devices: hosts feed it gesture events and draw the
//! [`LayoutFrame`] it produces.
//!
//! ```
//! use cellgrid::{CellRect, Grid, GridConfig, ItemId, Point};
//!
//! let mut grid = Grid::new(GridConfig::configure(600, 400, 100, 100)?);
//! grid.place(ItemId::new(1), CellRect::unit(0, 0))?;
//! grid.start(ItemId::new(1), Point::new(50.0, 50.0))?;
//! grid.update_position(Point::new(550.0, 350.0))?;
//! grid.drop(Point::new(550.0, 350.0))?;
//! assert_eq!(grid.query(5, 3).map(|it| it.id()), Some(ItemId::new(1)));
//! # Ok::<(), cellgrid::Error>(())
//! ```

mod error;
mod frame;
mod geom;
mod grid;
mod occupancy;
mod placement;
mod preview;
mod relocation;


pub use cellgrid_ids::ItemId;
pub use error::{Error, Result};
pub use frame::{ItemFrame, LayoutFrame};
pub use geom::{CellRect, GridConfig, Margins, PixelRect, Point};
pub use grid::Grid;
pub use occupancy::{OccupancyIndex, PlacedItem};
pub use placement::{PlacementValidator, Rejection};
pub use preview::PreviewOverlay;
pub use relocation::{DragSession, Outcome, Phase, Relocation, RelocationProtocol};
