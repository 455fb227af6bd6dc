/// Column/row position on the grid, origin top-left.
pub(crate) type Coord = (usize, usize);

/// Colour key of a grain, always in `1..=359`. Zero is reserved for empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Hue(u16);

impl Hue {
    pub(crate) const FIRST: Hue = Hue(1);
    pub(crate) const MAX: u16 = 359;

    #[cfg(test)]
    pub(crate) fn new(deg: u16) -> Option<Self> {
        (1..=Self::MAX).contains(&deg).then_some(Self(deg))
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }

    /// Spawn hue for the following tick. 359 wraps to 1, never 0.
    pub(crate) fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Sand(Hue),
}

impl Cell {
    pub(crate) fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Row-major cell matrix sized to the viewport. Rows grow downward,
/// which is also the direction of gravity.
///
/// Callers bounds-check before indexing; an out-of-range coordinate is a
/// logic error and panics.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    w: usize,
    h: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::Empty; w * h],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.w
    }

    pub(crate) fn height(&self) -> usize {
        self.h
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.w && y < self.h,
            "cell ({x},{y}) outside {}x{} grid",
            self.w,
            self.h
        );
        y * self.w + x
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    /// Reallocates to the new size. Every cell comes back empty; grains are
    /// not carried across.
    pub(crate) fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.cells.clear();
        self.cells.resize(w * h, Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hue(deg: u16) -> Hue {
        Hue::new(deg).unwrap()
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells().len(), 21);
        assert!(grid.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(4, 4);
        grid.set(3, 2, Cell::Sand(hue(42)));
        assert_eq!(grid.get(3, 2), Cell::Sand(hue(42)));
        assert_eq!(grid.get(2, 3), Cell::Empty);
        // row-major
        assert_eq!(grid.cells()[2 * 4 + 3], Cell::Sand(hue(42)));
    }

    #[test]
    fn resize_discards_everything() {
        let mut grid = Grid::new(10, 10);
        for i in 0..10 {
            grid.set(i, i, Cell::Sand(hue(100)));
        }
        grid.resize(5, 5);
        assert_eq!((grid.width(), grid.height()), (5, 5));
        assert_eq!(grid.cells().len(), 25);
        assert!(grid.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn resize_up_is_empty_too() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, Cell::Sand(hue(5)));
        grid.resize(6, 4);
        assert!(grid.cells().iter().all(|c| c.is_empty()));
        assert_eq!(grid.get(5, 3), Cell::Empty);
    }

    #[test]
    #[should_panic(expected = "outside 5x5 grid")]
    fn out_of_range_column_panics() {
        let grid = Grid::new(5, 5);
        let _ = grid.get(5, 0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_row_panics_on_set() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 5, Cell::Sand(Hue::FIRST));
    }

    #[test]
    fn hue_rejects_reserved_and_overflow() {
        assert_eq!(Hue::new(0), None);
        assert_eq!(Hue::new(360), None);
        assert_eq!(Hue::new(1), Some(Hue::FIRST));
        assert_eq!(Hue::new(359).map(Hue::get), Some(359));
    }

    #[test]
    fn hue_wraps_past_359_to_one() {
        assert_eq!(hue(358).next(), hue(359));
        assert_eq!(hue(359).next(), Hue::FIRST);
    }

    proptest! {
        #[test]
        fn prop_hue_counter_never_leaves_range(start in 1u16..=359, steps in 0usize..2000) {
            let mut h = hue(start);
            for _ in 0..steps {
                h = h.next();
                prop_assert!((1..=359).contains(&h.get()));
            }
        }
    }
}
