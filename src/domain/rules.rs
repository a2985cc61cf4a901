/// Conway's Game of Life (B3/S23) transition for a single cell:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn evolve(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}
