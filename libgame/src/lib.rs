//! Bounded Conway's Game of Life.
//!
//! Boards are values: stepping and toggling return a new [`GameBoard`] and leave the input
//! untouched. A board always carries its own dimensions, so a step can never be computed
//! against a size that does not belong to it.

use board::GameBoard;
use error::BoardError;
use pos::Position;
use rule::Rule;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;
pub mod size;

/// Builds a `height` x `width` board, all dead or randomly seeded with about 30% alive tiles.
/// Bounds are the caller's business.
pub fn create_grid(width: usize, height: usize, randomize: bool) -> GameBoard {
    if randomize {
        GameBoard::new_random(width, height)
    } else {
        GameBoard::new(width, height)
    }
}

/// One Conway generation on a non-wrapping board.
pub fn next_generation(board: &GameBoard) -> GameBoard {
    board.next_generation(&Rule::default())
}

pub fn toggle_cell<P>(board: &GameBoard, pos: P) -> Result<GameBoard, BoardError>
where
    P: Into<Position>,
{
    board.toggled(pos)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub rule: Rule,
    pub generation: u64,
}

impl Game {
    pub fn new(board: GameBoard, rule: Rule) -> Self {
        Self {
            board,
            rule,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.board = self.board.next_generation(&self.rule);
        self.generation += 1;
    }

    /// Swaps in a new board, e.g. after a resize or clear. The generation count restarts.
    pub fn replace_board(&mut self, board: GameBoard) {
        self.board = board;
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileState;

    fn board(picture: &str) -> GameBoard {
        picture.parse().unwrap()
    }

    #[test]
    fn create_grid_dead_by_default() {
        let board = create_grid(14, 11, false);

        assert_eq!((board.width(), board.height()), (14, 11));
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn create_grid_returns_independent_boards() {
        let a = create_grid(10, 10, false);
        let b = toggle_cell(&a, [0, 0]).unwrap();

        assert_eq!(a.alive_count(), 0);
        assert_eq!(b.alive_count(), 1);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = board(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );
        let vertical = board(
            "
            .....
            ..#..
            ..#..
            ..#..
            .....
            ",
        );

        let once = next_generation(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(next_generation(&once), horizontal);
    }

    #[test]
    fn block_is_still_life() {
        let block = board(
            "
            ....
            .##.
            .##.
            ....
            ",
        );

        let mut game = Game::new(block.clone(), Rule::default());
        for _ in 0..10 {
            game.tick();
        }

        assert_eq!(game.board, block);
        assert_eq!(game.generation, 10);
    }

    #[test]
    fn empty_board_stays_empty() {
        let empty = create_grid(13, 10, false);
        assert_eq!(next_generation(&empty), empty);
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        // Centre tile with 0, 1 and 4 neighbors respectively.
        for picture in [
            "...\n.#.\n...",
            "#..\n.#.\n...",
            "#.#\n.#.\n#.#",
        ] {
            let next = next_generation(&board(picture));
            assert_eq!(next.tile([1, 1]), Some(&TileState::Dead), "{picture}");
        }

        let full = board("###\n###\n###");
        let next = next_generation(&full);
        assert_eq!(next.tile([1, 1]), Some(&TileState::Dead));
    }

    #[test]
    fn stepping_leaves_input_untouched() {
        let glider = board(
            "
            .#....
            ..#...
            ###...
            ......
            ......
            ",
        );
        let snapshot = glider.clone();

        let next = next_generation(&glider);

        assert_eq!(glider, snapshot);
        assert_ne!(next, glider);
        assert_eq!(next.alive_count(), 5);
    }

    #[test]
    fn replace_board_resets_generation() {
        let mut game = Game::new(create_grid(10, 10, false), Rule::default());
        game.tick();
        game.tick();

        game.replace_board(create_grid(12, 12, false));

        assert_eq!(game.generation, 0);
        assert_eq!(game.board.width(), 12);
    }
}
