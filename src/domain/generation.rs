use std::collections::HashSet;

use super::{Cell, rules};

/// Generation is the set of live cells on the board at one point in time.
/// Cells outside the set are implicitly dead. Updates are functional:
/// `next()` returns a fresh generation and never mutates `self`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Generation {
    live: HashSet<Cell>,
}

impl Generation {
    /// An empty (extinct) generation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Add a live cell. Returns false if it was already alive.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.live.insert(cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Cells in row-major order, for stable logging
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_by_key(|c| (c.y(), c.x()));
        cells
    }

    /// Number of live cells adjacent to `cell`
    fn count_live_neighbors(&self, cell: Cell) -> u8 {
        self.live
            .iter()
            .filter(|other| other.is_neighbor_of(cell))
            .count() as u8
    }

    /// Compute the next generation on the bounded board.
    ///
    /// Only live cells and their clipped neighbourhoods can change state,
    /// so those form the candidate set; each candidate is then counted
    /// against the live cells and run through the B3/S23 rule.
    pub fn next(&self) -> Self {
        let candidates: HashSet<Cell> = self
            .live
            .iter()
            .flat_map(|&cell| cell.neighbors().chain(std::iter::once(cell)))
            .collect();

        candidates
            .into_iter()
            .filter(|&cell| rules::evolve(self.contains(cell), self.count_live_neighbors(cell)))
            .collect()
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_SIZE;

    fn generation(cells: &[(usize, usize)]) -> Generation {
        cells
            .iter()
            .map(|&(x, y)| Cell::new(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        assert!(Generation::new().next().is_empty());
    }

    #[test]
    fn test_isolated_cell_dies() {
        assert!(generation(&[(8, 8)]).next().is_empty());
        assert!(generation(&[(1, 1), (9, 9)]).next().is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = generation(&[(5, 5), (5, 6), (5, 7)]);
        let vertical = generation(&[(4, 6), (5, 6), (6, 6)]);

        assert_eq!(horizontal.next(), vertical);
        assert_eq!(horizontal.next().next(), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = generation(&[(3, 3), (3, 4), (4, 3), (4, 4)]);
        assert_eq!(block.next(), block);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let block = generation(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(block.next(), block);
    }

    #[test]
    fn test_next_is_deterministic() {
        let glider = generation(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(glider.next(), glider.next());
    }

    #[test]
    fn test_birth_with_exactly_three_neighbors() {
        // L-tromino: the missing corner of the 2x2 box is born
        let next = generation(&[(3, 3), (4, 3), (3, 4)]).next();
        assert!(next.contains(Cell::new(4, 4).unwrap()));
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn test_overcrowded_center_dies() {
        // Plus shape: the centre has four live neighbours
        let plus = generation(&[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        assert!(!plus.next().contains(Cell::new(5, 5).unwrap()));
    }

    #[test]
    fn test_no_wraparound_at_edges() {
        // A blinker against the left edge would grow a cell at x = -1 on an
        // unbounded board; here that cell is simply dropped.
        let left = generation(&[(0, 3), (0, 4), (0, 5)]);
        assert_eq!(left.next(), generation(&[(0, 4), (1, 4)]));

        let last = GRID_SIZE - 1;
        let right = generation(&[(last, 0), (last, 1), (last, 2)]);
        assert_eq!(right.next(), generation(&[(last - 1, 1), (last, 1)]));
    }
}
