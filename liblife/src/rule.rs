use crate::board::TileState;

/// What happens to a single cell when the next generation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Dies,
    Born,
}

/// Classifies a cell under the standard rule: a live cell survives with 2 or 3
/// live neighbors, a dead cell is born with exactly 3. `None` means the cell
/// keeps its current state.
pub fn classify(tile: TileState, live_neighbors: usize) -> Option<Fate> {
    match (tile, live_neighbors) {
        (TileState::Alive, 2 | 3) => None,
        (TileState::Alive, _) => Some(Fate::Dies),
        (TileState::Dead, 3) => Some(Fate::Born),
        (TileState::Dead, _) => None,
    }
}
