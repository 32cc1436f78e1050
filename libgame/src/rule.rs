use crate::board::TileState;

/// Birth/survival neighbor counts. The default is Conway's B3/S23.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_state(&self, tile: TileState, alive_neighbor_count: usize) -> TileState {
        let alive = match tile {
            TileState::Alive => self.survive.contains(&alive_neighbor_count),
            TileState::Dead => self.birth.contains(&alive_neighbor_count),
        };

        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
