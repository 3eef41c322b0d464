//! The public face of the engine.
//!
//! [`Grid`] owns the configuration, the occupancy index and the relocation
//! protocol. Hosts seed it with [`Grid::place`], forward gesture events to the
//! drag methods, and read a [`LayoutFrame`] after every mutating call.

use std::result::Result as StdResult;

use cellgrid_ids::ItemId;
use tracing::debug;

use crate::{
    Error, Result,
    frame::{ItemFrame, LayoutFrame},
    geom::{CellRect, GridConfig, Margins, Point},
    occupancy::{OccupancyIndex, PlacedItem},
    placement::{PlacementValidator, Rejection},
    relocation::{DragSession, Outcome, Phase, Relocation, RelocationProtocol},
};

/// A configured grid with its placed items and drag state.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Current dimensions.
    config: GridConfig,
    /// Placed items.
    index: OccupancyIndex,
    /// Drag state machine.
    relocation: RelocationProtocol,
}

impl Grid {
    /// An empty grid with the given dimensions.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            index: OccupancyIndex::new(),
            relocation: RelocationProtocol::new(),
        }
    }

    /// Replace the dimensions wholesale.
    ///
    /// Placed items keep their cell rectangles; migrating them to the new
    /// geometry is up to the caller. On error the previous config stays.
    pub fn configure(
        &mut self,
        canvas_width: i32,
        canvas_height: i32,
        target_cell_width: i32,
        target_cell_height: i32,
    ) -> Result<GridConfig> {
        let config = GridConfig::configure(
            canvas_width,
            canvas_height,
            target_cell_width,
            target_cell_height,
        )?;
        self.config = config;
        Ok(config)
    }

    /// Current grid dimensions.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Placed items in insertion order. The dragged item is not included.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        self.index.all()
    }

    /// A placed item, or the in-flight subject of the active drag.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.index.get(id).or_else(|| {
            self.relocation
                .session()
                .map(DragSession::subject)
                .filter(|s| s.id() == id)
        })
    }

    /// Place a new item with no margins. See [`Grid::place_with_margins`].
    pub fn place(&mut self, id: ItemId, rect: CellRect) -> Result<()> {
        self.place_with_margins(id, rect, Margins::ZERO)
    }

    /// Place a new item after validating its rectangle.
    ///
    /// Seeding is refused while a drag is active, so the subject's original
    /// cells remain free for a revert.
    pub fn place_with_margins(
        &mut self,
        id: ItemId,
        rect: CellRect,
        margins: Margins,
    ) -> Result<()> {
        self.require_idle("place")?;
        if self.index.contains(id) {
            return Err(Error::DuplicateItem(id));
        }
        if let Err(reason) = self.validator().check(&rect, None) {
            debug!(item = %id, %rect, %reason, "place rejected");
            return Err(Error::InvalidPosition { rect });
        }
        debug!(item = %id, %rect, "placed");
        self.index.add(PlacedItem::new(id, rect, margins));
        Ok(())
    }

    /// Remove a placed item.
    pub fn remove(&mut self, id: ItemId) -> Result<PlacedItem> {
        self.require_idle("remove")?;
        let item = self.index.remove(id)?;
        debug!(item = %id, "removed");
        Ok(item)
    }

    /// The placed item covering cell `(x, y)`, if any.
    #[must_use]
    pub fn query(&self, x: i32, y: i32) -> Option<&PlacedItem> {
        self.index.at(x, y)
    }

    /// The placed item under a pixel position, if any.
    #[must_use]
    pub fn hit_test(&self, pointer: Point) -> Option<&PlacedItem> {
        let (x, y) = self.config.pixel_to_cell(pointer);
        self.query(x, y)
    }

    /// Whether `rect` could be placed, ignoring `excluding`.
    #[must_use]
    pub fn is_valid(&self, rect: &CellRect, excluding: Option<ItemId>) -> bool {
        self.validator().is_valid(rect, excluding)
    }

    /// Like [`Grid::is_valid`], with the reason for a rejection.
    pub fn check(&self, rect: &CellRect, excluding: Option<ItemId>) -> StdResult<(), Rejection> {
        self.validator().check(rect, excluding)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.relocation.phase()
    }

    /// Current preview rectangle of the active drag.
    #[must_use]
    pub const fn preview(&self) -> Option<CellRect> {
        self.relocation.preview().rect()
    }

    /// How the most recent drag ended.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.relocation.last_outcome()
    }

    /// Begin dragging `id`.
    pub fn start(&mut self, id: ItemId, pointer: Point) -> Result<()> {
        self.relocation
            .start(&mut self.index, &self.config, id, pointer)
    }

    /// Follow the pointer during a drag; returns the previewed rectangle.
    pub fn update_position(&mut self, pointer: Point) -> Result<CellRect> {
        self.relocation
            .update_position(&self.index, &self.config, pointer)
    }

    /// Finish the drag at `pointer`.
    pub fn drop(&mut self, pointer: Point) -> Result<Relocation> {
        self.relocation
            .drop(&mut self.index, &self.config, pointer)
    }

    /// Abort the drag.
    pub fn cancel(&mut self) -> Result<()> {
        self.relocation.cancel(&mut self.index)
    }

    /// Pixel layout of every item plus the drag overlay.
    #[must_use]
    pub fn frame(&self) -> LayoutFrame {
        let items = self
            .index
            .all()
            .iter()
            .map(|it| self.item_frame(it))
            .collect();
        let in_flight = self
            .relocation
            .session()
            .map(|s| self.item_frame(s.subject()));
        let preview = self
            .preview()
            .map(|r| self.config.cell_rect_to_pixel_rect(&r));
        LayoutFrame {
            items,
            in_flight,
            preview,
        }
    }

    /// Layout of a single item at its effective rectangle.
    fn item_frame(&self, item: &PlacedItem) -> ItemFrame {
        let cell = item.effective_rect();
        ItemFrame {
            id: item.id(),
            cell,
            pixel: self
                .config
                .pixel_rect_with_margins(&cell, &item.margins()),
        }
    }

    /// Validator over the current config and index.
    const fn validator(&self) -> PlacementValidator<'_> {
        PlacementValidator::new(&self.config, &self.index)
    }

    /// Fail with [`Error::InvalidState`] while a drag is active.
    fn require_idle(&self, op: &'static str) -> Result<()> {
        match self.phase() {
            Phase::Idle => Ok(()),
            phase => Err(Error::InvalidState { op, phase }),
        }
    }
}
