//! The drag destination overlay.

use crate::geom::CellRect;

/// The single "ghost" rectangle showing where an active drag would land.
///
/// The overlay lives beside the occupancy index, never inside it, so it can
/// never collide with anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewOverlay {
    /// Current destination indicator, if any.
    rect: Option<CellRect>,
}

impl PreviewOverlay {
    /// Replace any existing preview.
    pub const fn set(&mut self, rect: CellRect) {
        self.rect = Some(rect);
    }

    /// Hide the preview.
    pub const fn clear(&mut self) {
        self.rect = None;
    }

    /// The previewed rectangle, if shown.
    #[must_use]
    pub const fn rect(&self) -> Option<CellRect> {
        self.rect
    }

    /// Whether a preview is shown.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.rect.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_clear_removes() {
        let mut p = PreviewOverlay::default();
        assert!(!p.is_shown());
        p.set(CellRect::unit(1, 1));
        p.set(CellRect::unit(2, 3));
        assert_eq!(p.rect(), Some(CellRect::unit(2, 3)));
        p.clear();
        assert_eq!(p.rect(), None);
        p.clear();
        assert!(!p.is_shown());
    }
}
