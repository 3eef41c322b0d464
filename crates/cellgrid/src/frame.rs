//! Pixel layout snapshots for renderers.

use cellgrid_ids::ItemId;

use crate::geom::{CellRect, PixelRect};

/// One item as the renderer should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemFrame {
    /// Item identity.
    pub id: ItemId,
    /// Cell rectangle used for layout.
    pub cell: CellRect,
    /// Pixel rectangle, margins applied.
    pub pixel: PixelRect,
}

/// Everything the rendering collaborator needs after a mutating call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutFrame {
    /// Placed items in insertion order.
    pub items: Vec<ItemFrame>,
    /// The item being dragged, laid out at its staged position when that is
    /// a legal landing spot and at its original position otherwise.
    pub in_flight: Option<ItemFrame>,
    /// Destination indicator of the active drag, without margins.
    pub preview: Option<PixelRect>,
}

impl LayoutFrame {
    /// Frame for `id`, whether placed or in flight.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ItemFrame> {
        self.items
            .iter()
            .chain(self.in_flight.iter())
            .find(|f| f.id == id)
    }
}
