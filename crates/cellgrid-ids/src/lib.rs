//! Shared identifiers for items placed on a cell grid.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

use std::fmt;

/// Identity of an item placed on the grid.
///
/// The identifier is chosen by the host when it seeds the grid and stays the
/// same for the lifetime of the item, across every relocation. The engine never
/// mints identifiers of its own, so hosts can use the value to key their own
/// visuals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// Construct an identifier from the host's raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value supplied by the host.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ItemId> for u32 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
