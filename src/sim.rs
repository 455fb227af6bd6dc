use crate::config::{InjectPolicy, RedrawMode};
use crate::grid::{Coord, Grid, Hue};
use crate::inject::{inject, Spread};
use crate::physics;
use crate::redraw::RedrawTracker;
use log::debug;
use rand::Rng;

/// Input as seen by the simulation; produced by the polling thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SimEvent {
    Quit,
    Resize { width: u16, height: u16 },
    Pointer { x: u16, y: u16 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    /// Grid was reallocated; the display must be cleared.
    Resync,
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Pointer {
    x: usize,
    y: usize,
    moved: bool,
}

pub(crate) struct Simulation {
    grid: Grid,
    pointer: Pointer,
    hue: Hue,
    policy: InjectPolicy,
    tracker: RedrawTracker,
}

impl Simulation {
    pub(crate) fn new(w: usize, h: usize, policy: InjectPolicy, redraw: RedrawMode) -> Self {
        Self {
            grid: Grid::new(w, h),
            pointer: Pointer::default(),
            hue: Hue::FIRST,
            policy,
            tracker: RedrawTracker::new(redraw),
        }
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells changed by the most recent tick.
    pub(crate) fn dirty(&self) -> &[Coord] {
        self.tracker.dirty()
    }

    pub(crate) fn handle(&mut self, ev: SimEvent) -> Flow {
        match ev {
            SimEvent::Quit => Flow::Quit,
            SimEvent::Resize { width, height } => {
                self.resize(usize::from(width), usize::from(height));
                Flow::Resync
            }
            SimEvent::Pointer { x, y } => {
                self.pointer = Pointer {
                    x: usize::from(x),
                    y: usize::from(y),
                    moved: true,
                };
                Flow::Continue
            }
        }
    }

    pub(crate) fn resize(&mut self, w: usize, h: usize) {
        debug!(
            "resize {}x{} -> {w}x{h}, dropping all sand",
            self.grid.width(),
            self.grid.height()
        );
        self.grid.resize(w, h);
        self.tracker.reset();
    }

    pub(crate) fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spread = Spread::random(rng);
        self.tick_with(spread);
    }

    /// One tick: pour at the pointer if it moved, let everything fall, collect
    /// the changed cells, then advance the spawn hue.
    pub(crate) fn tick_with(&mut self, spread: Spread) {
        self.tracker.begin();

        if std::mem::take(&mut self.pointer.moved) {
            let at = (self.pointer.x, self.pointer.y);
            // may be stale after a shrink
            if at.0 < self.grid.width() && at.1 < self.grid.height() {
                for c in inject(&mut self.grid, at, self.hue, spread, self.policy) {
                    self.tracker.mark(c);
                }
            }
        }

        for m in physics::step(&mut self.grid) {
            self.tracker.mark_move(m);
        }
        self.tracker.finish(&self.grid);

        self.hue = self.hue.next();
    }
}
