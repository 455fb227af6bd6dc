use crate::config::RedrawMode;
use crate::grid::{Cell, Coord, Grid};
use crate::physics::Move;

/// Collects the cells whose on-screen state changed during one tick.
///
/// In [`RedrawMode::Moves`] the set is whatever the tick reported touching
/// (may repeat a cell, never misses one). In [`RedrawMode::Diff`] the grid is
/// compared against the last frame handed out, so reports are exact.
#[derive(Debug)]
pub(crate) struct RedrawTracker {
    mode: RedrawMode,
    dirty: Vec<Coord>,
    shown: Vec<Cell>,
}

impl RedrawTracker {
    pub(crate) fn new(mode: RedrawMode) -> Self {
        Self {
            mode,
            dirty: Vec::new(),
            shown: Vec::new(),
        }
    }

    pub(crate) fn begin(&mut self) {
        self.dirty.clear();
    }

    pub(crate) fn mark(&mut self, at: Coord) {
        if self.mode == RedrawMode::Moves {
            self.dirty.push(at);
        }
    }

    pub(crate) fn mark_move(&mut self, m: Move) {
        self.mark(m.from);
        self.mark(m.to);
    }

    pub(crate) fn finish(&mut self, grid: &Grid) -> &[Coord] {
        if self.mode == RedrawMode::Diff {
            let cells = grid.cells();
            if self.shown.len() != cells.len() {
                self.shown = vec![Cell::Empty; cells.len()];
            }
            let w = grid.width();
            for (i, (shown, now)) in self.shown.iter_mut().zip(cells).enumerate() {
                if shown != now {
                    self.dirty.push((i % w, i / w));
                    *shown = *now;
                }
            }
        }
        &self.dirty
    }

    pub(crate) fn dirty(&self) -> &[Coord] {
        &self.dirty
    }

    /// Forget everything drawn so far; the display was just cleared.
    pub(crate) fn reset(&mut self) {
        self.dirty.clear();
        self.shown.clear();
    }
}
