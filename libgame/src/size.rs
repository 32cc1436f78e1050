/// Smallest width or height a session will commit to.
pub const MIN_GRID_DIMENSION: usize = 10;

pub const MAX_GRID_AREA: usize = 1 << 20;

/// Committed board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Largest grid that fits a viewport of the given size when every tile takes `cell_size`
    /// units on each axis. Never smaller than [`MIN_GRID_DIMENSION`], so clamping into
    /// `[MIN_GRID_DIMENSION, max]` always has a non-empty range.
    pub fn max_for_viewport(viewport_width: usize, viewport_height: usize, cell_size: usize) -> Self {
        let cell_size = cell_size.max(1);

        Self {
            width: (viewport_width / cell_size).max(MIN_GRID_DIMENSION),
            height: (viewport_height / cell_size).max(MIN_GRID_DIMENSION),
        }
    }

    /// Clamps both dimensions into `[MIN_GRID_DIMENSION, max]`.
    pub fn clamped(self, max: GridSize) -> Self {
        Self {
            width: self.width.max(MIN_GRID_DIMENSION).min(max.width),
            height: self.height.max(MIN_GRID_DIMENSION).min(max.height),
        }
    }

    /// `width * height`, or `None` if it overflows or exceeds [`MAX_GRID_AREA`].
    pub fn checked_area(self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .filter(|&area| area <= MAX_GRID_AREA)
    }

    /// Shrinks to fit inside `max`, without enforcing the lower bound.
    pub fn fitted(self, max: GridSize) -> Self {
        Self {
            width: self.width.min(max.width),
            height: self.height.min(max.height),
        }
    }
}
