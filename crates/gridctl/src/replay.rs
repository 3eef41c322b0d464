//! Drive a seeded grid with a scenario's scripted gestures.

use std::{
    fmt::{self, Display, Formatter},
    io::Write,
};

use cellgrid::{Grid, Outcome, Relocation};
use config::{GestureEvent, Scenario};
use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    render,
};

/// Count of drags by terminal outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Drops that moved the subject to a free target.
    pub committed: usize,
    /// Drops that exchanged two single-cell items.
    pub swapped: usize,
    /// Drops onto an invalid target.
    pub reverted: usize,
    /// Aborted gestures.
    pub cancelled: usize,
}

impl Summary {
    /// Tally one terminal outcome.
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Committed => self.committed += 1,
            Outcome::Swapped => self.swapped += 1,
            Outcome::Reverted => self.reverted += 1,
            Outcome::Cancelled => self.cancelled += 1,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} committed, {} swapped, {} reverted, {} cancelled",
            self.committed, self.swapped, self.reverted, self.cancelled
        )
    }
}

/// Seed `scenario` and print its layout.
pub fn show<W: Write>(out: &mut W, scenario: &Scenario) -> Result<Grid> {
    let grid = scenario.seed()?;
    render::write_config(out, grid.config())?;
    render::write_frame(out, &grid.frame())?;
    Ok(grid)
}

/// Seed `scenario`, replay its events, and report each drag outcome.
///
/// A drop onto an invalid target is reported and the replay carries on; any
/// other engine error stops the replay.
pub fn replay<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    frames: bool,
) -> Result<(Grid, Summary)> {
    let mut grid = show(out, scenario)?;
    let mut summary = Summary::default();

    for (i, event) in scenario.events.iter().enumerate() {
        let step = i + 1;
        let at_step = |source| Error::Step { step, source };
        match *event {
            GestureEvent::Press { item, at } => {
                grid.start(item, at).map_err(at_step)?;
                writeln!(out, "{step:>3} press   {item} at {}", render::point(at))?;
            }
            GestureEvent::Move { at } => {
                let target = grid.update_position(at).map_err(at_step)?;
                debug!(step, target = %target, "pointer moved");
                writeln!(
                    out,
                    "{step:>3} move    to {} preview {target}",
                    render::point(at)
                )?;
            }
            GestureEvent::Release { at } => {
                match grid.drop(at) {
                    Ok(Relocation::Committed { item, from, to }) => {
                        writeln!(out, "{step:>3} commit  {item} {from} -> {to}")?;
                    }
                    Ok(Relocation::Swapped {
                        item,
                        other,
                        from,
                        to,
                    }) => {
                        writeln!(
                            out,
                            "{step:>3} swap    {item} {from} -> {to}, {other} {to} -> {from}"
                        )?;
                    }
                    Err(cellgrid::Error::InvalidPosition { rect }) => {
                        warn!(step, rect = %rect, "Invalid position");
                        writeln!(out, "{step:>3} revert  invalid position {rect}")?;
                    }
                    Err(e) => return Err(at_step(e)),
                }
                finish_drag(&grid, &mut summary, frames, out)?;
            }
            GestureEvent::Cancel => {
                grid.cancel().map_err(at_step)?;
                writeln!(out, "{step:>3} cancel")?;
                finish_drag(&grid, &mut summary, frames, out)?;
            }
        }
    }

    info!(
        committed = summary.committed,
        swapped = summary.swapped,
        reverted = summary.reverted,
        cancelled = summary.cancelled,
        "Replay finished"
    );
    writeln!(out, "{summary}")?;
    render::write_frame(out, &grid.frame())?;
    Ok((grid, summary))
}

/// Record the outcome of the drag that just ended, optionally printing the layout.
fn finish_drag<W: Write>(
    grid: &Grid,
    summary: &mut Summary,
    frames: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(outcome) = grid.last_outcome() {
        summary.record(outcome);
    }
    if frames {
        render::write_frame(out, &grid.frame())?;
    }
    Ok(())
}
