use crate::grid::{Cell, Coord, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Move {
    pub(crate) from: Coord,
    pub(crate) to: Coord,
}

/// Advance every grain by at most one cell and return the moves made.
///
/// Rows are scanned from `height - 2` up to 0, columns left to right. A grain
/// only ever looks one row down, and that row has already been visited, so
/// nothing that lands there is picked up again in the same pass.
///
/// Per grain, first empty target wins: straight down, down-left, down-right.
/// The bottom row is the floor and never moves.
pub(crate) fn step(grid: &mut Grid) -> Vec<Move> {
    let (w, h) = (grid.width(), grid.height());
    let mut moves = Vec::new();
    if h < 2 {
        return moves;
    }

    for y in (0..h - 1).rev() {
        let below = y + 1;
        for x in 0..w {
            let cell = grid.get(x, y);
            if cell.is_empty() {
                continue;
            }

            let target = if grid.get(x, below).is_empty() {
                Some(x)
            } else if x > 0 && grid.get(x - 1, below).is_empty() {
                Some(x - 1)
            } else if x + 1 < w && grid.get(x + 1, below).is_empty() {
                Some(x + 1)
            } else {
                None
            };

            if let Some(tx) = target {
                grid.set(tx, below, cell);
                grid.set(x, y, Cell::Empty);
                moves.push(Move {
                    from: (x, y),
                    to: (tx, below),
                });
            }
        }
    }
    moves
}
