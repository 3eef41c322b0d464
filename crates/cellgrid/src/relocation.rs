//! Drag relocation: the state machine driven by the host's gesture source.
//!
//! A drag moves through `Idle → Dragging → {Committed, Swapped, Reverted,
//! Cancelled} → Idle`. Each gesture event maps to exactly one call:
//!
//! - drag started → [`RelocationProtocol::start`]
//! - pointer moved → [`RelocationProtocol::update_position`]
//! - dropped → [`RelocationProtocol::drop`]
//! - gesture aborted → [`RelocationProtocol::cancel`]
//!
//! While a drag is active the subject is held by the session rather than the
//! occupancy index, so it never collides with its own original cells. On every
//! terminal outcome it goes back into the index at its original insertion slot.

use std::fmt::{self, Display, Formatter};

use cellgrid_ids::ItemId;
use tracing::debug;

use crate::{
    Error, Result,
    geom::{CellRect, GridConfig, Point},
    occupancy::{OccupancyIndex, PlacedItem},
    placement::PlacementValidator,
    preview::PreviewOverlay,
};

/// Whether a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No drag session.
    #[default]
    Idle,
    /// A drag session is active.
    Dragging,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Dragging => write!(f, "dragging"),
        }
    }
}

/// How the most recent drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The subject moved to a free target.
    Committed,
    /// The subject traded places with a single-cell occupant.
    Swapped,
    /// The target was invalid; the subject stayed where it was.
    Reverted,
    /// The gesture was aborted; the subject stayed where it was.
    Cancelled,
}

/// A successful drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// The subject now occupies `to`.
    Committed {
        /// Item that moved.
        item: ItemId,
        /// Where it was.
        from: CellRect,
        /// Where it is now.
        to: CellRect,
    },
    /// The subject and `other` exchanged cells.
    Swapped {
        /// Item that was dragged.
        item: ItemId,
        /// Item that was displaced.
        other: ItemId,
        /// The subject's original cell, now held by `other`.
        from: CellRect,
        /// The displaced item's original cell, now held by the subject.
        to: CellRect,
    },
}

impl Relocation {
    /// The terminal outcome this relocation represents.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::Committed { .. } => Outcome::Committed,
            Self::Swapped { .. } => Outcome::Swapped,
        }
    }
}

/// State held for the lifetime of one drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// The item being dragged, out of the index while in flight.
    subject: PlacedItem,
    /// Insertion slot the subject is restored to.
    slot: usize,
    /// Pointer position relative to the subject's top-left cell corner.
    pointer_offset: Point,
}

impl DragSession {
    /// The item being dragged.
    #[must_use]
    pub const fn subject(&self) -> &PlacedItem {
        &self.subject
    }

    /// Pointer position relative to the subject's cell origin at start.
    #[must_use]
    pub const fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    /// Cell rectangle the subject would occupy with the pointer at `pointer`.
    fn target(&self, config: &GridConfig, pointer: Point) -> CellRect {
        let (cx, cy) = config.pixel_to_cell(pointer - self.pointer_offset);
        self.subject.rect().moved_to(cx, cy)
    }
}

/// The drag state machine plus its preview overlay.
#[derive(Clone, Debug, Default)]
pub struct RelocationProtocol {
    /// Active session, if dragging.
    session: Option<DragSession>,
    /// Destination indicator for the active session.
    preview: PreviewOverlay,
    /// How the previous session ended.
    last_outcome: Option<Outcome>,
}

impl RelocationProtocol {
    /// An idle protocol.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dragging while a session exists.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The preview overlay.
    #[must_use]
    pub const fn preview(&self) -> &PreviewOverlay {
        &self.preview
    }

    /// How the previous session ended.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Begin dragging `id` with the pointer at `pointer`.
    ///
    /// The subject leaves the collision set until the drag ends.
    pub fn start(
        &mut self,
        index: &mut OccupancyIndex,
        config: &GridConfig,
        id: ItemId,
        pointer: Point,
    ) -> Result<()> {
        self.require(Phase::Idle, "start")?;
        let (slot, subject) = index.take(id)?;
        let origin = config.cell_rect_to_pixel_rect(&subject.rect()).origin();
        let pointer_offset = pointer - origin;
        debug!(
            item = %id,
            rect = %subject.rect(),
            offset_x = pointer_offset.x,
            offset_y = pointer_offset.y,
            "drag started"
        );
        self.session = Some(DragSession {
            subject,
            slot,
            pointer_offset,
        });
        Ok(())
    }

    /// Move the preview to follow the pointer. Latest position wins.
    ///
    /// The target is also staged on the subject; it becomes the subject's
    /// layout position only while it is a legal landing spot.
    pub fn update_position(
        &mut self,
        index: &OccupancyIndex,
        config: &GridConfig,
        pointer: Point,
    ) -> Result<CellRect> {
        let phase = self.phase();
        let Some(session) = self.session.as_mut() else {
            return Err(Error::InvalidState {
                op: "update position",
                phase,
            });
        };
        let target = session.target(config, pointer);
        let legal = PlacementValidator::new(config, index).is_valid(&target, None);
        session.subject.stage(target, legal);
        self.preview.set(target);
        debug!(item = %session.subject.id(), %target, legal, "drag preview");
        Ok(target)
    }

    /// End the drag with the pointer at `pointer`.
    ///
    /// Swaps with a single-cell occupant when the subject is a single cell
    /// too, otherwise commits to a valid target. An invalid target restores
    /// the subject and fails with [`Error::InvalidPosition`].
    pub fn drop(
        &mut self,
        index: &mut OccupancyIndex,
        config: &GridConfig,
        pointer: Point,
    ) -> Result<Relocation> {
        let phase = self.phase();
        let Some(session) = self.session.take() else {
            return Err(Error::InvalidState { op: "drop", phase });
        };
        let target = session.target(config, pointer);
        let DragSession {
            mut subject, slot, ..
        } = session;
        self.preview.clear();
        subject.clear_pending();

        let id = subject.id();
        let from = subject.rect();
        let occupant = index
            .find_intersecting(&target, Some(id))
            .filter(|o| o.area() == 1 && from.area() == 1)
            .map(PlacedItem::id);

        if let Some(other) = occupant
            && let Some(displaced) = index.get_mut(other)
        {
            let to = displaced.rect();
            displaced.relocate(from);
            subject.relocate(to);
            index.restore(slot, subject);
            debug!(item = %id, %other, %from, %to, "drag swapped");
            self.last_outcome = Some(Outcome::Swapped);
            return Ok(Relocation::Swapped {
                item: id,
                other,
                from,
                to,
            });
        }

        match PlacementValidator::new(config, index).check(&target, Some(id)) {
            Ok(()) => {
                subject.relocate(target);
                index.restore(slot, subject);
                debug!(item = %id, %from, to = %target, "drag committed");
                self.last_outcome = Some(Outcome::Committed);
                Ok(Relocation::Committed {
                    item: id,
                    from,
                    to: target,
                })
            }
            Err(reason) => {
                index.restore(slot, subject);
                debug!(item = %id, %target, %reason, "drag reverted");
                self.last_outcome = Some(Outcome::Reverted);
                Err(Error::InvalidPosition { rect: target })
            }
        }
    }

    /// Abort the drag, putting the subject back where it was.
    pub fn cancel(&mut self, index: &mut OccupancyIndex) -> Result<()> {
        let phase = self.phase();
        let Some(DragSession {
            mut subject, slot, ..
        }) = self.session.take()
        else {
            return Err(Error::InvalidState { op: "cancel", phase });
        };
        self.preview.clear();
        subject.clear_pending();
        debug!(item = %subject.id(), rect = %subject.rect(), "drag cancelled");
        index.restore(slot, subject);
        self.last_outcome = Some(Outcome::Cancelled);
        Ok(())
    }

    /// Fail with [`Error::InvalidState`] unless in `want`.
    fn require(&self, want: Phase, op: &'static str) -> Result<()> {
        let phase = self.phase();
        if phase == want {
            Ok(())
        } else {
            Err(Error::InvalidState { op, phase })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Margins;

    fn setup(items: &[(u32, CellRect)]) -> (GridConfig, OccupancyIndex, RelocationProtocol) {
        let config = GridConfig::configure(600, 400, 100, 100).unwrap();
        let mut index = OccupancyIndex::new();
        for (id, rect) in items {
            index.add(PlacedItem::new(ItemId::new(*id), *rect, Margins::ZERO));
        }
        (config, index, RelocationProtocol::new())
    }

    #[test]
    fn start_takes_subject_out_of_collision_set() {
        let (config, mut index, mut proto) = setup(&[(1, CellRect::unit(0, 0))]);
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(30.0, 40.0))
            .unwrap();
        assert_eq!(proto.phase(), Phase::Dragging);
        assert!(index.is_empty());
        let session = proto.session().unwrap();
        assert_eq!(session.pointer_offset(), Point::new(30.0, 40.0));
        assert_eq!(session.subject().id(), ItemId::new(1));
    }

    #[test]
    fn start_unknown_item_is_not_found_and_stays_idle() {
        let (config, mut index, mut proto) = setup(&[(1, CellRect::unit(0, 0))]);
        let err = proto
            .start(&mut index, &config, ItemId::new(2), Point::default())
            .unwrap_err();
        assert_eq!(err, Error::NotFound(ItemId::new(2)));
        assert_eq!(proto.phase(), Phase::Idle);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn pointer_offset_is_preserved_across_moves() {
        let (config, mut index, mut proto) = setup(&[(1, CellRect::unit(2, 1))]);
        // Grab the item near its bottom-right corner.
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(290.0, 190.0))
            .unwrap();
        // Moving the pointer one cell right and down lands one cell over.
        let target = proto
            .update_position(&index, &config, Point::new(390.0, 290.0))
            .unwrap();
        assert_eq!(target, CellRect::unit(3, 2));
        // A tiny nudge stays in the original cell.
        let target = proto
            .update_position(&index, &config, Point::new(295.0, 195.0))
            .unwrap();
        assert_eq!(target, CellRect::unit(2, 1));
    }

    #[test]
    fn preview_staging_follows_legality() {
        let (config, mut index, mut proto) =
            setup(&[(1, CellRect::unit(0, 0)), (2, CellRect::unit(3, 0))]);
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(50.0, 50.0))
            .unwrap();

        proto
            .update_position(&index, &config, Point::new(150.0, 150.0))
            .unwrap();
        let subject = proto.session().unwrap().subject();
        assert_eq!(subject.pending(), Some(CellRect::unit(1, 1)));
        assert!(subject.uses_pending());
        assert_eq!(subject.effective_rect(), CellRect::unit(1, 1));

        proto
            .update_position(&index, &config, Point::new(350.0, 50.0))
            .unwrap();
        let subject = proto.session().unwrap().subject();
        assert_eq!(subject.pending(), Some(CellRect::unit(3, 0)));
        assert!(!subject.uses_pending());
        assert_eq!(subject.effective_rect(), CellRect::unit(0, 0));
    }

    #[test]
    fn drop_onto_own_cell_commits() {
        let (config, mut index, mut proto) = setup(&[(1, CellRect::new(0, 0, 2, 2).unwrap())]);
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(120.0, 120.0))
            .unwrap();
        let r = proto
            .drop(&mut index, &config, Point::new(220.0, 120.0))
            .unwrap();
        assert_eq!(r.outcome(), Outcome::Committed);
        assert_eq!(
            index.get(ItemId::new(1)).unwrap().rect(),
            CellRect::new(1, 0, 2, 2).unwrap()
        );
    }

    #[test]
    fn multi_cell_collision_reverts_instead_of_swapping() {
        let (config, mut index, mut proto) = setup(&[
            (1, CellRect::new(0, 0, 2, 1).unwrap()),
            (2, CellRect::unit(3, 0)),
        ]);
        let before = index.clone();
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(10.0, 10.0))
            .unwrap();
        let err = proto
            .drop(&mut index, &config, Point::new(210.0, 10.0))
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPosition {
                rect: CellRect::new(2, 0, 2, 1).unwrap()
            }
        );
        assert_eq!(proto.last_outcome(), Some(Outcome::Reverted));
        assert_eq!(index, before);
    }

    #[test]
    fn single_cell_onto_multi_cell_occupant_reverts() {
        let (config, mut index, mut proto) = setup(&[
            (1, CellRect::unit(0, 0)),
            (2, CellRect::new(2, 0, 2, 2).unwrap()),
        ]);
        let before = index.clone();
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(10.0, 10.0))
            .unwrap();
        assert!(
            proto
                .drop(&mut index, &config, Point::new(310.0, 110.0))
                .is_err()
        );
        assert_eq!(index, before);
    }

    #[test]
    fn calls_outside_their_phase_are_invalid_state() {
        let (config, mut index, mut proto) = setup(&[(1, CellRect::unit(0, 0))]);
        assert_eq!(
            proto.update_position(&index, &config, Point::default()),
            Err(Error::InvalidState {
                op: "update position",
                phase: Phase::Idle
            })
        );
        assert_eq!(
            proto.drop(&mut index, &config, Point::default()),
            Err(Error::InvalidState {
                op: "drop",
                phase: Phase::Idle
            })
        );
        assert_eq!(
            proto.cancel(&mut index),
            Err(Error::InvalidState {
                op: "cancel",
                phase: Phase::Idle
            })
        );
        proto
            .start(&mut index, &config, ItemId::new(1), Point::default())
            .unwrap();
        assert_eq!(
            proto.start(&mut index, &config, ItemId::new(1), Point::default()),
            Err(Error::InvalidState {
                op: "start",
                phase: Phase::Dragging
            })
        );
        assert_eq!(proto.phase(), Phase::Dragging);
    }

    #[test]
    fn cancel_restores_and_clears() {
        let (config, mut index, mut proto) =
            setup(&[(1, CellRect::unit(0, 0)), (2, CellRect::unit(1, 0))]);
        let before = index.clone();
        proto
            .start(&mut index, &config, ItemId::new(1), Point::new(50.0, 50.0))
            .unwrap();
        proto
            .update_position(&index, &config, Point::new(450.0, 250.0))
            .unwrap();
        proto.cancel(&mut index).unwrap();
        assert_eq!(index, before);
        assert_eq!(proto.phase(), Phase::Idle);
        assert_eq!(proto.preview().rect(), None);
        assert_eq!(proto.last_outcome(), Some(Outcome::Cancelled));
    }
}
