//! Validated scenario values built from the raw document.

use std::{collections::HashSet, path::Path};

use cellgrid::{CellRect, Grid, GridConfig, ItemId, Margins, Point};

use crate::{
    Error,
    raw::{RawEvent, RawItem, RawScenario},
};

/// An item to seed onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: ItemId,
    pub rect: CellRect,
    pub margins: Margins,
}

/// A gesture as reported by the host's drag source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A drag started on `item` with the pointer at `at`.
    Press { item: ItemId, at: Point },
    /// The pointer moved.
    Move { at: Point },
    /// The pointer was released.
    Release { at: Point },
    /// The platform aborted the gesture.
    Cancel,
}

/// A grid setup plus a scripted gesture sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Grid dimensions.
    pub config: GridConfig,
    /// Items to seed, in placement order.
    pub items: Vec<ItemSpec>,
    /// Gestures to replay after seeding.
    pub events: Vec<GestureEvent>,
}

impl Scenario {
    /// Build an empty grid and place every seeded item on it.
    ///
    /// Seeds are validated like any other placement, so overlapping or
    /// out-of-bounds items fail here.
    pub fn seed(&self) -> cellgrid::Result<Grid> {
        let mut grid = Grid::new(self.config);
        for item in &self.items {
            grid.place_with_margins(item.id, item.rect, item.margins)?;
        }
        Ok(grid)
    }
}

impl RawItem {
    /// Validate one seeded item against the grid it will be placed on.
    ///
    /// Margins must be non-negative and leave a positive pixel size inside
    /// the item's cells.
    fn into_spec(self, config: &GridConfig, path: Option<&Path>) -> Result<ItemSpec, Error> {
        let id = self.id;
        let fail = |msg: String| Error::invalid(path, format!("item {id}: {msg}"));
        let (x, y) = self.at;
        let (h, v) = self.span;
        let rect = CellRect::new(x, y, h, v).map_err(|e| fail(e.to_string()))?;

        let m = self.margins;
        if m.left < 0 || m.top < 0 || m.right < 0 || m.bottom < 0 {
            return Err(fail("margins must not be negative".to_string()));
        }
        let width = i64::from(h) * i64::from(config.cell_width());
        let height = i64::from(v) * i64::from(config.cell_height());
        if i64::from(m.left) + i64::from(m.right) >= width
            || i64::from(m.top) + i64::from(m.bottom) >= height
        {
            return Err(fail(format!(
                "margins leave no room inside {width}x{height}px"
            )));
        }

        Ok(ItemSpec {
            id: ItemId::new(id),
            rect,
            margins: Margins {
                left: m.left,
                top: m.top,
                right: m.right,
                bottom: m.bottom,
            },
        })
    }
}

/// A pointer position, rejecting NaN and infinities.
fn finite_point(x: f64, y: f64, step: usize, path: Option<&Path>) -> Result<Point, Error> {
    if x.is_finite() && y.is_finite() {
        Ok(Point::new(x, y))
    } else {
        Err(Error::invalid(
            path,
            format!("event {step}: pointer position ({x}, {y}) is not finite"),
        ))
    }
}

impl RawEvent {
    /// Validate one gesture. `step` is 1-based and only used in messages.
    fn into_event(self, step: usize, path: Option<&Path>) -> Result<GestureEvent, Error> {
        Ok(match self {
            Self::Press { item, x, y } => GestureEvent::Press {
                item: ItemId::new(item),
                at: finite_point(x, y, step, path)?,
            },
            Self::Move { x, y } => GestureEvent::Move {
                at: finite_point(x, y, step, path)?,
            },
            Self::Release { x, y } => GestureEvent::Release {
                at: finite_point(x, y, step, path)?,
            },
            Self::Cancel => GestureEvent::Cancel,
        })
    }
}

impl RawScenario {
    /// Validate the document into a [`Scenario`].
    ///
    /// Checks geometry inputs, spans, margins, item identity, and pointer
    /// positions. Placement legality is left to [`Scenario::seed`].
    pub fn into_scenario(self, path: Option<&Path>) -> Result<Scenario, Error> {
        let config = GridConfig::configure(
            self.canvas.width,
            self.canvas.height,
            self.cell_hint.width,
            self.cell_hint.height,
        )
        .map_err(|e| Error::invalid(path, e.to_string()))?;

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());
        for raw in self.items {
            if !seen.insert(raw.id) {
                return Err(Error::invalid(path, format!("duplicate item id {}", raw.id)));
            }
            items.push(raw.into_spec(&config, path)?);
        }

        let events = self
            .events
            .into_iter()
            .enumerate()
            .map(|(i, ev)| ev.into_event(i + 1, path))
            .collect::<Result<_, _>>()?;

        Ok(Scenario {
            config,
            items,
            events,
        })
    }
}
