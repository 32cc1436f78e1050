use crate::size::MAX_GRID_AREA;

/// Rejections raised before any board is built or modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(
        "Board shape is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    ShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Board of {width}x{height} needs {expected} tiles, got {actual}")]
    TileCount {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Board of {width}x{height} exceeds the {max} tile limit", max = MAX_GRID_AREA)]
    TooLarge { width: usize, height: usize },

    #[error("Cell value {value} is neither 0 nor 1")]
    InvalidCell { value: u8 },
}
