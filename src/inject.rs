use crate::config::InjectPolicy;
use crate::grid::{Cell, Coord, Grid, Hue};
use rand::Rng;

// neighbour codes drawn by `Spread`
const UP: u8 = 0;
const DOWN: u8 = 1;
const LEFT: u8 = 2;
const RIGHT: u8 = 3;

/// Two independent draws from `{0,1,2,3}` picking which neighbours of the
/// pointer cell also receive a grain. Equal draws select one neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Spread {
    a: u8,
    b: u8,
}

impl Spread {
    #[cfg(test)]
    pub(crate) fn new(a: u8, b: u8) -> Self {
        assert!(a <= RIGHT && b <= RIGHT, "spread codes must be 0..=3");
        Self { a, b }
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: rng.gen_range(0..=RIGHT),
            b: rng.gen_range(0..=RIGHT),
        }
    }

    fn selects(self, code: u8) -> bool {
        self.a == code || self.b == code
    }
}

/// Pours grains of `hue` at `at` and returns every cell that was written.
///
/// `at` must lie inside the grid. Under [`InjectPolicy::Gate`] nothing
/// happens when the pointer cell is already occupied; under
/// [`InjectPolicy::Overwrite`] the pointer cell is repainted regardless.
/// Neighbour grains are only ever placed into empty, in-bounds cells.
pub(crate) fn inject(
    grid: &mut Grid,
    at: Coord,
    hue: Hue,
    spread: Spread,
    policy: InjectPolicy,
) -> Vec<Coord> {
    let (x, y) = at;
    let mut placed = Vec::with_capacity(3);

    if policy == InjectPolicy::Gate && !grid.get(x, y).is_empty() {
        return placed;
    }
    grid.set(x, y, Cell::Sand(hue));
    placed.push(at);

    let neighbours = [
        (UP, (y > 0).then(|| (x, y - 1))),
        (DOWN, (y + 1 < grid.height()).then(|| (x, y + 1))),
        (LEFT, (x > 0).then(|| (x - 1, y))),
        (RIGHT, (x + 1 < grid.width()).then(|| (x + 1, y))),
    ];
    for (code, cell) in neighbours {
        let Some((nx, ny)) = cell else { continue };
        if spread.selects(code) && grid.get(nx, ny).is_empty() {
            grid.set(nx, ny, Cell::Sand(hue));
            placed.push((nx, ny));
        }
    }
    placed
}
