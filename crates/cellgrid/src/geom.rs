//! Geometry primitives and the pixel/cell conversions for a configured grid.
//! Pixel sizes are integers; pointer positions are fractional and floored into cells.

use std::{
    fmt::{self, Display, Formatter},
    ops::Sub,
};

use tracing::debug;

use crate::{Error, Result};

/// A pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal position, growing rightwards.
    pub x: f64,
    /// Vertical position, growing downwards.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A rectangle of whole cells covering `[x, x + span_h) × [y, y + span_v)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Leftmost column.
    x: i32,
    /// Topmost row.
    y: i32,
    /// Number of columns covered.
    span_h: i32,
    /// Number of rows covered.
    span_v: i32,
}

impl CellRect {
    /// Build a rectangle, rejecting spans smaller than one cell.
    pub fn new(x: i32, y: i32, span_h: i32, span_v: i32) -> Result<Self> {
        if span_h < 1 || span_v < 1 {
            return Err(Error::InvalidSpan { span_h, span_v });
        }
        Ok(Self {
            x,
            y,
            span_h,
            span_v,
        })
    }

    /// A single cell at `(x, y)`.
    #[must_use]
    pub const fn unit(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            span_h: 1,
            span_v: 1,
        }
    }

    /// The same span moved so its top-left cell is `(x, y)`.
    #[must_use]
    pub const fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Leftmost column.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Topmost row.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Columns covered.
    #[inline]
    #[must_use]
    pub const fn span_h(&self) -> i32 {
        self.span_h
    }

    /// Rows covered.
    #[inline]
    #[must_use]
    pub const fn span_v(&self) -> i32 {
        self.span_v
    }

    /// One past the rightmost column.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.span_h)
    }

    /// One past the bottom row.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.span_v)
    }

    /// Number of cells covered.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> i64 {
        self.span_h as i64 * self.span_v as i64
    }

    /// Half-open overlap on both axes.
    #[inline]
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the cell `(x, y)` lies inside this rectangle.
    #[inline]
    #[must_use]
    pub const fn covers(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }
}

impl Display for CellRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{} {}x{})",
            self.x, self.y, self.span_h, self.span_v
        )
    }
}

/// Per-item inset, in pixels, applied when converting cells to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Margins {
    /// Inset from the left edge.
    pub left: i32,
    /// Inset from the top edge.
    pub top: i32,
    /// Inset from the right edge.
    pub right: i32,
    /// Inset from the bottom edge.
    pub bottom: i32,
}

impl Margins {
    /// No inset on any side.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// The same inset on every side.
    #[must_use]
    pub const fn uniform(v: i32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

/// A rectangle in canvas pixels. Always derived, never stored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl PixelRect {
    /// Top-left corner as a pointer position.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Display for PixelRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{} {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Grid dimensions derived from a canvas size and a target cell size.
///
/// Build one with [`GridConfig::configure`]. A config is an immutable value;
/// reconfiguring produces a new one that replaces the old wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Canvas width in pixels.
    canvas_width: i32,
    /// Canvas height in pixels.
    canvas_height: i32,
    /// Requested cell width.
    target_cell_width: i32,
    /// Requested cell height.
    target_cell_height: i32,
    /// Number of columns, at least one.
    columns: i32,
    /// Number of rows, at least one.
    rows: i32,
    /// Width of every cell in pixels.
    cell_width: i32,
    /// Height of every cell in pixels.
    cell_height: i32,
}

/// Round `canvas / hint` to the nearest whole count, never below one.
#[inline]
fn cell_count(canvas: i32, hint: i32) -> i32 {
    ((f64::from(canvas) / f64::from(hint)).round() as i32).max(1)
}

/// Reject non-positive geometry inputs.
#[inline]
fn positive(field: &'static str, value: i32) -> Result<i32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(Error::InvalidConfig { field, value })
    }
}

impl GridConfig {
    /// Derive the grid for a canvas and a target cell size.
    ///
    /// `columns = round(canvas_width / target_cell_width)` and
    /// `cell_width = floor(canvas_width / columns)`, likewise for rows. Any
    /// remainder pixels along the right and bottom edges are left unused.
    pub fn configure(
        canvas_width: i32,
        canvas_height: i32,
        target_cell_width: i32,
        target_cell_height: i32,
    ) -> Result<Self> {
        let canvas_width = positive("canvas_width", canvas_width)?;
        let canvas_height = positive("canvas_height", canvas_height)?;
        let target_cell_width = positive("target_cell_width", target_cell_width)?;
        let target_cell_height = positive("target_cell_height", target_cell_height)?;

        let columns = cell_count(canvas_width, target_cell_width);
        let rows = cell_count(canvas_height, target_cell_height);
        let config = Self {
            canvas_width,
            canvas_height,
            target_cell_width,
            target_cell_height,
            columns,
            rows,
            cell_width: canvas_width / columns,
            cell_height: canvas_height / rows,
        };
        debug!(
            canvas_width,
            canvas_height,
            columns,
            rows,
            cell_width = config.cell_width,
            cell_height = config.cell_height,
            "grid configured"
        );
        Ok(config)
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn canvas_width(&self) -> i32 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn canvas_height(&self) -> i32 {
        self.canvas_height
    }

    /// Requested cell width.
    #[must_use]
    pub const fn target_cell_width(&self) -> i32 {
        self.target_cell_width
    }

    /// Requested cell height.
    #[must_use]
    pub const fn target_cell_height(&self) -> i32 {
        self.target_cell_height
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Derived cell width in pixels.
    #[must_use]
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Derived cell height in pixels.
    #[must_use]
    pub const fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Map a pixel position to the cell containing it.
    ///
    /// No clamping: positions left of or above the canvas give negative cells,
    /// and positions past the last column or row give out-of-range cells.
    #[must_use]
    pub fn pixel_to_cell(&self, p: Point) -> (i32, i32) {
        let cx = (p.x / f64::from(self.cell_width)).floor() as i32;
        let cy = (p.y / f64::from(self.cell_height)).floor() as i32;
        (cx, cy)
    }

    /// Pixel rectangle of `rect` with no margins.
    #[must_use]
    pub fn cell_rect_to_pixel_rect(&self, rect: &CellRect) -> PixelRect {
        self.pixel_rect_with_margins(rect, &Margins::ZERO)
    }

    /// Pixel rectangle of `rect`, inset by `m`.
    ///
    /// Arithmetic saturates, so extreme margins clamp rather than overflow.
    #[must_use]
    pub fn pixel_rect_with_margins(&self, rect: &CellRect, m: &Margins) -> PixelRect {
        let cw = self.cell_width;
        let ch = self.cell_height;
        PixelRect {
            x: rect.x().saturating_mul(cw).saturating_add(m.left),
            y: rect.y().saturating_mul(ch).saturating_add(m.top),
            width: rect
                .span_h()
                .saturating_mul(cw)
                .saturating_sub(m.left)
                .saturating_sub(m.right),
            height: rect
                .span_v()
                .saturating_mul(ch)
                .saturating_sub(m.top)
                .saturating_sub(m.bottom),
        }
    }

    /// Whether `rect` lies entirely within `[0, columns) × [0, rows)`.
    #[must_use]
    pub const fn contains(&self, rect: &CellRect) -> bool {
        rect.x() >= 0 && rect.y() >= 0 && rect.right() <= self.columns && rect.bottom() <= self.rows
    }
}
