/// Returns whether a cell is alive in the next generation
///
/// `alive` is the cell's state in the previous generation and `neighbors` is
/// the number of alive cells in its window. The window includes the cell
/// itself, so an alive cell counts towards its own total.
#[inline]
pub(super) fn next_state(alive: bool, neighbors: usize) -> bool {
    match (alive, neighbors) {
        (false, 3) => true,
        (true, 2 | 3) => true,
        // alive with fewer than 2 or more than 3, or dead without exactly 3
        _ => false,
    }
}
