use std::time::Duration;

use libgame::{
    board::GameBoard, create_grid, error::BoardError, pos::Position, rule::Rule,
    size::GridSize, toggle_cell, Game,
};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::ClientConfig;

pub const MIN_LOOP_DELAY: Duration = Duration::from_millis(25);
pub const MAX_LOOP_DELAY: Duration = Duration::from_millis(1000);

pub struct Session {
    pub game: Game,
    max_size: GridSize,
    cell_size: usize,
    loop_delay: Duration,
    rng: StdRng,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let max_size = config.max_size();
        let board = GameBoard::new_random_with(max_size.width, max_size.height, &mut rng);

        Self {
            game: Game::new(board, Rule::default()),
            max_size,
            cell_size: config.cell_size,
            loop_delay: clamp_loop_delay(Duration::from_millis(config.loop_delay_ms)),
            rng,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.game.board
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.game.board.width(), self.game.board.height())
    }

    pub fn max_size(&self) -> GridSize {
        self.max_size
    }

    pub fn loop_delay(&self) -> Duration {
        self.loop_delay
    }

    pub fn resize(&mut self, width: usize, height: usize) -> GridSize {
        let requested = GridSize::new(width, height);
        let size = requested.clamped(self.max_size);

        if size != requested {
            warn!(
                "Requested {}x{} clamped to {}x{}",
                requested.width, requested.height, size.width, size.height
            );
        }

        self.reseed(size);
        info!("Resized to {}x{}", size.width, size.height);
        size
    }

    pub fn randomize(&mut self) -> GridSize {
        let size = self.size().fitted(self.max_size);
        self.reseed(size);
        info!("Randomized {}x{} board", size.width, size.height);
        size
    }

    pub fn clear(&mut self) {
        let size = self.size();
        self.game.replace_board(create_grid(size.width, size.height, false));
        info!("Cleared board");
    }

    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let board = toggle_cell(&self.game.board, Position { x, y })?;
        self.game.board = board;
        Ok(())
    }

    /// Only the maximum changes; the committed size waits for the next resize or randomize.
    pub fn set_viewport(&mut self, width: usize, height: usize) -> Result<GridSize, BoardError> {
        let max_size = GridSize::max_for_viewport(width, height, self.cell_size);
        if max_size.checked_area().is_none() {
            return Err(BoardError::TooLarge {
                width: max_size.width,
                height: max_size.height,
            });
        }

        self.max_size = max_size;
        info!(
            "Viewport {width}x{height} allows up to {}x{}",
            self.max_size.width, self.max_size.height
        );
        Ok(self.max_size)
    }

    pub fn set_loop_delay(&mut self, millis: u64) -> Duration {
        let requested = Duration::from_millis(millis);
        self.loop_delay = clamp_loop_delay(requested);

        if self.loop_delay != requested {
            warn!(
                "Loop delay {}ms clamped to {}ms",
                millis,
                self.loop_delay.as_millis()
            );
        }

        self.loop_delay
    }

    pub fn step(&mut self, times: usize) {
        for _ in 0..times {
            self.game.tick();
        }
    }

    fn reseed(&mut self, size: GridSize) {
        let board = GameBoard::new_random_with(size.width, size.height, &mut self.rng);
        self.game.replace_board(board);
    }
}

pub fn clamp_loop_delay(delay: Duration) -> Duration {
    delay.clamp(MIN_LOOP_DELAY, MAX_LOOP_DELAY)
}
