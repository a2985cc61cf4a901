use crate::config::GRID_SIZE;

/// Cell is a coordinate on the bounded board.
/// Construction is checked, so every Cell lies within `[0, GRID_SIZE)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    /// Create a cell, or `None` when the coordinate is off the board
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Signed variant used by input mapping, where negative positions occur
    pub fn from_signed(x: i64, y: i64) -> Option<Self> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        Self::new(x, y)
    }

    pub const fn x(self) -> usize {
        self.x
    }

    pub const fn y(self) -> usize {
        self.y
    }

    /// The up to eight surrounding cells, clipped to the board (no wraparound).
    /// Corner cells yield 3, edge cells 5, interior cells 8.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        let xs = self.x.saturating_sub(1)..=(self.x + 1).min(GRID_SIZE - 1);
        xs.flat_map(move |nx| {
            let ys = self.y.saturating_sub(1)..=(self.y + 1).min(GRID_SIZE - 1);
            ys.map(move |ny| Cell { x: nx, y: ny })
        })
        .filter(move |&other| other != self)
    }

    /// Two distinct cells are neighbours iff both deltas are at most 1
    pub fn is_neighbor_of(self, other: Cell) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        assert!(Cell::new(GRID_SIZE, 0).is_none());
        assert!(Cell::new(0, GRID_SIZE).is_none());
        assert!(Cell::from_signed(-1, 3).is_none());
        assert_eq!(Cell::from_signed(2, 3), Cell::new(2, 3));
    }

    #[test]
    fn test_interior_has_eight_neighbors() {
        assert_eq!(cell(5, 5).neighbors().count(), 8);
    }

    #[test]
    fn test_corners_and_edges_are_clipped() {
        let last = GRID_SIZE - 1;
        assert_eq!(cell(0, 0).neighbors().count(), 3);
        assert_eq!(cell(last, last).neighbors().count(), 3);
        assert_eq!(cell(0, 7).neighbors().count(), 5);
        assert_eq!(cell(7, last).neighbors().count(), 5);

        for corner in [cell(0, 0), cell(last, 0), cell(0, last), cell(last, last)] {
            assert!(corner.neighbors().all(|n| n.x() < GRID_SIZE && n.y() < GRID_SIZE));
            assert!(corner.neighbors().all(|n| n != corner));
        }
    }

    #[test]
    fn test_neighbor_relation() {
        assert!(cell(3, 3).is_neighbor_of(cell(4, 4)));
        assert!(cell(3, 3).is_neighbor_of(cell(3, 2)));
        assert!(!cell(3, 3).is_neighbor_of(cell(3, 3)));
        assert!(!cell(3, 3).is_neighbor_of(cell(5, 3)));
    }
}
