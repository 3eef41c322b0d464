//! The set of placed items and the overlap queries over it.
//!
//! Items are kept in insertion order and scanned linearly. A grid holds a
//! handful of items, so every query is a straight walk over a `Vec`.

use cellgrid_ids::ItemId;

use crate::{
    Error, Result,
    geom::{CellRect, Margins},
};

/// An item on the grid together with its cell rectangle.
///
/// The identity never changes; relocation replaces the rectangle in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    /// Host-assigned identity.
    id: ItemId,
    /// Committed position.
    rect: CellRect,
    /// Staged, not yet committed position. Only set during a drag.
    pending: Option<CellRect>,
    /// Whether `pending` is authoritative for layout.
    use_pending: bool,
    /// Pixel inset applied when laying out.
    margins: Margins,
}

impl PlacedItem {
    /// Build an item with no pending position.
    #[must_use]
    pub const fn new(id: ItemId, rect: CellRect, margins: Margins) -> Self {
        Self {
            id,
            rect,
            pending: None,
            use_pending: false,
            margins,
        }
    }

    /// Stable identity.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Committed position, regardless of any staged one.
    #[must_use]
    pub const fn rect(&self) -> CellRect {
        self.rect
    }

    /// Staged position during a drag.
    #[must_use]
    pub const fn pending(&self) -> Option<CellRect> {
        self.pending
    }

    /// Whether the staged position is authoritative for layout.
    #[must_use]
    pub const fn uses_pending(&self) -> bool {
        self.use_pending
    }

    /// Pixel inset.
    #[must_use]
    pub const fn margins(&self) -> Margins {
        self.margins
    }

    /// The rectangle that counts for layout and collision.
    #[must_use]
    pub const fn effective_rect(&self) -> CellRect {
        match (self.use_pending, self.pending) {
            (true, Some(p)) => p,
            _ => self.rect,
        }
    }

    /// Cells covered by the effective rectangle.
    #[must_use]
    pub const fn area(&self) -> i64 {
        self.effective_rect().area()
    }

    /// Stage a position. `authoritative` selects it for layout.
    pub(crate) const fn stage(&mut self, rect: CellRect, authoritative: bool) {
        self.pending = Some(rect);
        self.use_pending = authoritative;
    }

    /// Drop any staged position.
    pub(crate) const fn clear_pending(&mut self) {
        self.pending = None;
        self.use_pending = false;
    }

    /// Commit a new position and drop any staged one.
    pub(crate) const fn relocate(&mut self, rect: CellRect) {
        self.rect = rect;
        self.clear_pending();
    }
}

/// Placed items in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    /// Items, oldest first.
    items: Vec<PlacedItem>,
}

impl OccupancyIndex {
    /// An empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// First item, in insertion order, whose effective rectangle intersects
    /// `rect`, skipping `excluding`.
    #[must_use]
    pub fn find_intersecting(
        &self,
        rect: &CellRect,
        excluding: Option<ItemId>,
    ) -> Option<&PlacedItem> {
        self.items
            .iter()
            .filter(|it| Some(it.id) != excluding)
            .find(|it| it.effective_rect().intersects(rect))
    }

    /// Append an item without any collision or bounds check.
    pub fn add(&mut self, item: PlacedItem) {
        self.items.push(item);
    }

    /// Remove an item by identity.
    pub fn remove(&mut self, id: ItemId) -> Result<PlacedItem> {
        self.take(id).map(|(_, item)| item)
    }

    /// Remove an item and report the slot it occupied so it can be restored.
    pub fn take(&mut self, id: ItemId) -> Result<(usize, PlacedItem)> {
        let slot = self.position(id).ok_or(Error::NotFound(id))?;
        Ok((slot, self.items.remove(slot)))
    }

    /// Reinsert an item at `slot`, or at the end if the index has shrunk.
    pub fn restore(&mut self, slot: usize, item: PlacedItem) {
        let slot = slot.min(self.items.len());
        self.items.insert(slot, item);
    }

    /// Every placed item, oldest first.
    #[must_use]
    pub fn all(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Item with id `id`.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|it| it.id == id)
    }

    /// Mutable access for the relocation protocol.
    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|it| it.id == id)
    }

    /// Whether `id` is placed.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// First item, in insertion order, covering the cell `(x, y)`.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Option<&PlacedItem> {
        self.items
            .iter()
            .find(|it| it.effective_rect().covers(x, y))
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insertion slot of `id`.
    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|it| it.id == id)
    }
}
