//! Plain-text rendering of layout frames.

use std::io::{self, Write};

use cellgrid::{GridConfig, ItemFrame, LayoutFrame, Point};

/// Describe the grid dimensions in one line.
pub fn write_config<W: Write>(out: &mut W, config: &GridConfig) -> io::Result<()> {
    writeln!(
        out,
        "grid {}x{} cells of {}x{}px on a {}x{} canvas",
        config.columns(),
        config.rows(),
        config.cell_width(),
        config.cell_height(),
        config.canvas_width(),
        config.canvas_height()
    )
}

/// Write every item in `frame`, the in-flight subject, and the preview.
pub fn write_frame<W: Write>(out: &mut W, frame: &LayoutFrame) -> io::Result<()> {
    for item in &frame.items {
        write_item(out, "item", item)?;
    }
    if let Some(item) = &frame.in_flight {
        write_item(out, "drag", item)?;
    }
    if let Some(rect) = frame.preview {
        writeln!(out, "  preview       px {rect}")?;
    }
    Ok(())
}

/// One row of the layout table.
fn write_item<W: Write>(out: &mut W, label: &str, item: &ItemFrame) -> io::Result<()> {
    writeln!(
        out,
        "  {label} {:<8} cell {:<14} px {}",
        item.id.to_string(),
        item.cell.to_string(),
        item.pixel
    )
}

/// Compact pointer formatting.
pub fn point(p: Point) -> String {
    format!("({:.0},{:.0})", p.x, p.y)
}
