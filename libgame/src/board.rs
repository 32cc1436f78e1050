use std::{fmt, str::FromStr};

use itertools::Itertools;
use rand::Rng;

use crate::{error::BoardError, pos::Position, rule::Rule, size::GridSize};

pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.7;

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

// Invariant: tiles.len() == width * height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileState::default(); width * height],
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        Self::new_random_with(width, height, &mut rand::rng())
    }

    pub fn new_random_with<R>(width: usize, height: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tiles = (0..width * height)
            .map(|_| {
                if rng.random::<f64>() > RANDOM_ALIVE_THRESHOLD {
                    TileState::Alive
                } else {
                    TileState::Dead
                }
            })
            .collect();

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn with_tiles(
        width: usize,
        height: usize,
        tiles: Vec<TileState>,
    ) -> Result<Self, BoardError> {
        let expected = GridSize::new(width, height)
            .checked_area()
            .ok_or(BoardError::TooLarge { width, height })?;
        if tiles.len() != expected {
            return Err(BoardError::TileCount {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[u8]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        Self::from_rows_sized(rows, width, height)
    }

    /// Rejects the matrix if its shape differs from the declared `width` x `height`.
    pub fn from_rows_sized<R>(rows: &[R], width: usize, height: usize) -> Result<Self, BoardError>
    where
        R: AsRef<[u8]>,
    {
        let mismatch = |actual_width: usize| BoardError::ShapeMismatch {
            expected_width: width,
            expected_height: height,
            actual_width,
            actual_height: rows.len(),
        };

        if rows.len() != height {
            return Err(mismatch(rows.first().map_or(0, |row| row.as_ref().len())));
        }

        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != width) {
            return Err(mismatch(row.as_ref().len()));
        }

        let tiles = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .map(TileState::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_tiles(width, height, tiles)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }

        self.tiles
            .chunks_exact(self.width)
            .map(|row| row.iter().map(|&tile| u8::from(tile)).collect())
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    // No wraparound: neighbors past an edge are skipped.
    pub fn alive_neighbor_count(&self, pos: Position) -> usize {
        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|&[dx, dy]| self.tile(pos.offset(dx, dy)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    pub fn next_generation(&self, rule: &Rule) -> GameBoard {
        let tiles = self
            .enumerate_tiles()
            .map(|(pos, &tile)| rule.next_state(tile, self.alive_neighbor_count(pos)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            tiles,
        }
    }

    pub fn toggled<P>(&self, pos: P) -> Result<GameBoard, BoardError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or(BoardError::OutOfRange {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        })?;

        let mut board = self.clone();
        board.tiles[index] = board.tiles[index].flipped();
        Ok(board)
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }

        let rows = self.tiles.chunks_exact(self.width).map(|row| {
            row.iter()
                .map(|tile| match tile {
                    TileState::Alive => '#',
                    TileState::Dead => '.',
                })
                .collect::<String>()
        });

        write!(f, "{}", rows.format("\n"))
    }
}

impl FromStr for GameBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.bytes()
                    .map(|byte| match byte {
                        b'#' | b'1' => Ok(1),
                        b'.' | b'0' => Ok(0),
                        value => Err(BoardError::InvalidCell { value }),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            TileState::Alive => TileState::Dead,
            TileState::Dead => TileState::Alive,
        }
    }
}

impl From<TileState> for u8 {
    fn from(value: TileState) -> Self {
        match value {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }
}

impl TryFrom<u8> for TileState {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TileState::Dead),
            1 => Ok(TileState::Alive),
            value => Err(BoardError::InvalidCell { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn board(picture: &str) -> GameBoard {
        picture.parse().unwrap()
    }

    #[test]
    fn new_board_is_dead() {
        let board = GameBoard::new(12, 10);

        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 10);
        assert_eq!(board.tiles().len(), 120);
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn random_board_roughly_thirty_percent_alive() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = GameBoard::new_random_with(100, 100, &mut rng);

        let alive = board.alive_count();
        assert!((2500..3500).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn random_board_is_reproducible_with_seed() {
        let a = GameBoard::new_random_with(20, 15, &mut StdRng::seed_from_u64(42));
        let b = GameBoard::new_random_with(20, 15, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn with_tiles_rejects_wrong_length() {
        let err = GameBoard::with_tiles(3, 3, vec![TileState::Dead; 8]).unwrap_err();

        assert_eq!(
            err,
            BoardError::TileCount {
                width: 3,
                height: 3,
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn with_tiles_rejects_overflowing_size() {
        assert_eq!(
            GameBoard::with_tiles(usize::MAX, 2, Vec::new()),
            Err(BoardError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_jagged_matrix() {
        let rows = vec![vec![0u8, 1, 0], vec![0, 1], vec![0, 1, 0]];

        assert!(matches!(
            GameBoard::from_rows(&rows),
            Err(BoardError::ShapeMismatch {
                expected_width: 3,
                actual_width: 2,
                ..
            })
        ));
    }

    #[test]
    fn from_rows_sized_rejects_wrong_dimensions() {
        let rows = vec![vec![0u8; 4]; 3];

        assert_eq!(
            GameBoard::from_rows_sized(&rows, 3, 4),
            Err(BoardError::ShapeMismatch {
                expected_width: 3,
                expected_height: 4,
                actual_width: 4,
                actual_height: 3
            })
        );
        assert!(GameBoard::from_rows_sized(&rows, 4, 3).is_ok());
    }

    #[test]
    fn from_rows_rejects_non_binary_cells() {
        let rows = vec![vec![0u8, 2], vec![1, 0]];

        assert_eq!(
            GameBoard::from_rows(&rows),
            Err(BoardError::InvalidCell { value: 2 })
        );
    }

    #[test]
    fn rows_are_indexed_row_then_column() {
        let board = board(
            "
            .#.
            ...
            ",
        );

        assert_eq!(board.tile([1, 0]), Some(&TileState::Alive));
        assert_eq!(board.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn display_parses_back() {
        let picture = "#..\n.#.\n..#";
        assert_eq!(board(picture).to_string(), picture);
    }

    #[test]
    fn tile_out_of_bounds_is_none() {
        let board = GameBoard::new(3, 2);

        assert!(board.tile([3, 0]).is_none());
        assert!(board.tile([0, 2]).is_none());
    }

    #[test]
    fn neighbor_count_skips_edges() {
        let board = board(
            "
            ###
            ###
            ###
            ",
        );

        assert_eq!(board.alive_neighbor_count(Position::new(0, 0)), 3);
        assert_eq!(board.alive_neighbor_count(Position::new(1, 0)), 5);
        assert_eq!(board.alive_neighbor_count(Position::new(1, 1)), 8);
    }

    #[test]
    fn corner_does_not_wrap() {
        let board = board(
            "
            #...
            ....
            ....
            ...#
            ",
        );

        assert_eq!(board.alive_neighbor_count(Position::new(0, 0)), 0);
        assert_eq!(board.alive_neighbor_count(Position::new(3, 3)), 0);

        let next = board.next_generation(&Rule::default());
        assert_eq!(next.alive_count(), 0);
    }

    #[test]
    fn toggled_flips_only_one_tile() {
        let original = GameBoard::new(4, 4);
        let toggled = original.toggled([2, 1]).unwrap();

        assert_eq!(toggled.tile([2, 1]), Some(&TileState::Alive));
        assert_eq!(toggled.alive_count(), 1);
        assert_eq!(original.alive_count(), 0);
    }

    #[test]
    fn toggled_rejects_out_of_range() {
        let board = GameBoard::new(4, 3);

        assert_eq!(
            board.toggled([4, 0]),
            Err(BoardError::OutOfRange {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(board.toggled([0, 3]).is_err());
    }
}
